//! Dog profile data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown for registered dogs until a photo is set.
pub const DEFAULT_DOG_IMAGE: &str =
    "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=800";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Body size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogSize {
    Toy,
    Small,
    Medium,
    Large,
    Giant,
}

impl DogSize {
    pub const ALL: [DogSize; 5] = [
        DogSize::Toy,
        DogSize::Small,
        DogSize::Medium,
        DogSize::Large,
        DogSize::Giant,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DogSize::Toy => "Toy",
            DogSize::Small => "Small",
            DogSize::Medium => "Medium",
            DogSize::Large => "Large",
            DogSize::Giant => "Giant",
        }
    }

    /// Weight band shown next to the size on the preferences screen.
    pub fn weight_hint(&self) -> &'static str {
        match self {
            DogSize::Toy => "up to 4 kg",
            DogSize::Small => "5-10 kg",
            DogSize::Medium => "11-25 kg",
            DogSize::Large => "26-44 kg",
            DogSize::Giant => "over 45 kg",
        }
    }
}

/// Energy level, serialized as `low`, `moderate`, `high`, `very-high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 4] = [
        EnergyLevel::Low,
        EnergyLevel::Moderate,
        EnergyLevel::High,
        EnergyLevel::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low",
            EnergyLevel::Moderate => "Moderate",
            EnergyLevel::High => "High",
            EnergyLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for DogSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
}

impl Location {
    pub fn new(lat: f64, lng: f64, city: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            city: city.into(),
        }
    }
}

/// A dog that can appear on a swipe card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: u8,
    pub gender: Gender,
    pub size: DogSize,
    pub energy: EnergyLevel,
    pub activities: Vec<String>,
    pub bio: String,
    pub image_url: String,
    pub location: Location,
    pub owner_id: String,
    pub owner_name: String,
}

impl Dog {
    /// Age formatted for a card, e.g. "1 year" or "3 years".
    pub fn age_label(&self) -> String {
        if self.age == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", self.age)
        }
    }

    pub fn has_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|a| a == activity)
    }
}

/// The signed-in owner's own registered dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogProfile {
    #[serde(flatten)]
    pub dog: Dog,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dog() -> Dog {
        Dog {
            id: "1".to_string(),
            name: "Max".to_string(),
            breed: "Golden Retriever".to_string(),
            age: 3,
            gender: Gender::Male,
            size: DogSize::Large,
            energy: EnergyLevel::VeryHigh,
            activities: vec!["Walking".to_string(), "Fetch".to_string()],
            bio: "Friendly".to_string(),
            image_url: DEFAULT_DOG_IMAGE.to_string(),
            location: Location::new(13.7563, 100.5018, "Bangkok"),
            owner_id: "owner1".to_string(),
            owner_name: "Sarah Johnson".to_string(),
        }
    }

    #[test]
    fn test_dog_serializes_camel_case() {
        let value = serde_json::to_value(sample_dog()).unwrap();
        assert_eq!(value["imageUrl"], DEFAULT_DOG_IMAGE);
        assert_eq!(value["ownerName"], "Sarah Johnson");
        assert_eq!(value["energy"], "very-high");
        assert_eq!(value["size"], "large");
        assert_eq!(value["gender"], "male");
    }

    #[test]
    fn test_profile_flattens_dog() {
        let now = Utc::now();
        let profile = DogProfile {
            dog: sample_dog(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["name"], "Max");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("dog").is_none());

        let back: DogProfile = serde_json::from_value(value).unwrap();
        assert_eq!(back.dog.id, "1");
    }

    #[test]
    fn test_energy_from_json() {
        let level: EnergyLevel = serde_json::from_value(json!("very-high")).unwrap();
        assert_eq!(level, EnergyLevel::VeryHigh);
        assert_eq!(level.label(), "Very High");
    }

    #[test]
    fn test_age_label() {
        let mut dog = sample_dog();
        assert_eq!(dog.age_label(), "3 years");
        dog.age = 1;
        assert_eq!(dog.age_label(), "1 year");
    }

    #[test]
    fn test_has_activity() {
        let dog = sample_dog();
        assert!(dog.has_activity("Fetch"));
        assert!(!dog.has_activity("Swimming"));
    }
}
