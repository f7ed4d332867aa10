//! Match filters and the option lists they are built from.

use serde::{Deserialize, Serialize};

use super::dog::{DogSize, EnergyLevel};

pub const ACTIVITY_OPTIONS: [&str; 10] = [
    "Walking",
    "Running",
    "Hiking",
    "Swimming",
    "Fetch",
    "Agility",
    "Dog Parks",
    "Beach",
    "Camping",
    "Training",
];

pub const BREED_OPTIONS: [&str; 24] = [
    "Australian Shepherd",
    "Beagle",
    "Border Collie",
    "Boston Terrier",
    "Boxer",
    "Bulldog",
    "Cavalier King Charles Spaniel",
    "Dachshund",
    "Doberman Pinscher",
    "French Bulldog",
    "German Shepherd",
    "German Shorthaired Pointer",
    "Golden Retriever",
    "Great Dane",
    "Labrador Retriever",
    "Miniature Schnauzer",
    "Mixed Breed",
    "Pembroke Welsh Corgi",
    "Pomeranian",
    "Poodle",
    "Rottweiler",
    "Shih Tzu",
    "Siberian Husky",
    "Yorkshire Terrier",
];

/// Upper bound of the age slider on the preferences screen.
pub const MAX_FILTER_AGE: u8 = 20;

/// Bounds of the radius slider, in km.
pub const RADIUS_RANGE_KM: (u32, u32) = (1, 100);

/// Inclusive age range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Candidate filters. Empty lists mean "any".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DogFilters {
    /// Carried for display; candidates are not filtered by distance.
    pub radius_km: u32,
    pub breeds: Vec<String>,
    pub age_range: AgeRange,
    pub sizes: Vec<DogSize>,
    pub energy_levels: Vec<EnergyLevel>,
    pub activities: Vec<String>,
}

impl Default for DogFilters {
    fn default() -> Self {
        Self {
            radius_km: 50,
            breeds: Vec::new(),
            age_range: AgeRange { min: 0, max: 15 },
            sizes: Vec::new(),
            energy_levels: Vec::new(),
            activities: Vec::new(),
        }
    }
}

/// Add `item` if absent, remove it if present.
fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|i| *i == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

impl DogFilters {
    pub fn toggle_size(&mut self, size: DogSize) {
        toggle(&mut self.sizes, size);
    }

    pub fn toggle_energy(&mut self, energy: EnergyLevel) {
        toggle(&mut self.energy_levels, energy);
    }

    pub fn toggle_breed(&mut self, breed: &str) {
        toggle(&mut self.breeds, breed.to_string());
    }

    pub fn toggle_activity(&mut self, activity: &str) {
        toggle(&mut self.activities, activity.to_string());
    }

    pub fn has_size(&self, size: DogSize) -> bool {
        self.sizes.contains(&size)
    }

    pub fn has_energy(&self, energy: EnergyLevel) -> bool {
        self.energy_levels.contains(&energy)
    }

    pub fn has_breed(&self, breed: &str) -> bool {
        self.breeds.iter().any(|b| b == breed)
    }

    pub fn has_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|a| a == activity)
    }

    /// Set the age bounds, keeping `min <= max` and both within the slider.
    pub fn set_age_range(&mut self, min: u8, max: u8) {
        let max = max.min(MAX_FILTER_AGE);
        self.age_range = AgeRange {
            min: min.min(max),
            max,
        };
    }

    pub fn set_radius(&mut self, radius_km: u32) {
        self.radius_km = radius_km.clamp(RADIUS_RANGE_KM.0, RADIUS_RANGE_KM.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_filters() {
        let filters = DogFilters::default();
        assert_eq!(filters.radius_km, 50);
        assert_eq!(filters.age_range, AgeRange { min: 0, max: 15 });
        assert!(filters.breeds.is_empty());
        assert!(filters.sizes.is_empty());
        assert!(filters.energy_levels.is_empty());
        assert!(filters.activities.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut filters = DogFilters::default();
        filters.toggle_size(DogSize::Small);
        filters.toggle_size(DogSize::Large);
        assert_eq!(filters.sizes, vec![DogSize::Small, DogSize::Large]);

        filters.toggle_size(DogSize::Small);
        assert_eq!(filters.sizes, vec![DogSize::Large]);

        filters.toggle_activity("Beach");
        assert!(filters.has_activity("Beach"));
        filters.toggle_activity("Beach");
        assert!(!filters.has_activity("Beach"));
    }

    #[test]
    fn test_serialized_shape() {
        let mut filters = DogFilters::default();
        filters.toggle_energy(EnergyLevel::VeryHigh);
        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(value["radiusKm"], 50);
        assert_eq!(value["ageRange"], json!({"min": 0, "max": 15}));
        assert_eq!(value["energyLevels"], json!(["very-high"]));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let filters: DogFilters = serde_json::from_value(json!({"breeds": ["Beagle"]})).unwrap();
        assert_eq!(filters.breeds, vec!["Beagle".to_string()]);
        assert_eq!(filters.radius_km, 50);
    }

    #[test]
    fn test_set_age_range_orders_bounds() {
        let mut filters = DogFilters::default();
        filters.set_age_range(9, 4);
        assert_eq!(filters.age_range, AgeRange { min: 4, max: 4 });
        filters.set_age_range(2, 30);
        assert_eq!(filters.age_range, AgeRange { min: 2, max: MAX_FILTER_AGE });
    }

    #[test]
    fn test_age_range_inclusive() {
        let range = AgeRange { min: 2, max: 5 };
        assert!(range.contains(2));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_set_radius_clamps() {
        let mut filters = DogFilters::default();
        filters.set_radius(0);
        assert_eq!(filters.radius_km, 1);
        filters.set_radius(500);
        assert_eq!(filters.radius_km, 100);
    }
}
