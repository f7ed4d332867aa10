//! Three-step dog registration and the saved profile.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{FieldError, PawResult, ProfileError};
use crate::models::{
    Dog, DogProfile, DogSize, EnergyLevel, Gender, Location, User, BREED_OPTIONS,
    DEFAULT_DOG_IMAGE,
};
use crate::storage::keys;
use crate::traits::{KeyValueStore, StoreExt};

pub const TOTAL_STEPS: u8 = 3;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_AGE: u32 = 25;
pub const MAX_BIO_LEN: usize = 300;
pub const DEFAULT_CITY: &str = "Bangkok";

/// Coordinates given to registered dogs. Candidates are not filtered by
/// distance, so only the city is meaningful.
const REGISTERED_COORDS: (f64, f64) = (13.7563, 100.5018);

#[rustfmt::skip]
pub const PROVINCES: [&str; 77] = [
    "Amnat Charoen", "Ang Thong", "Bangkok", "Bueng Kan",
    "Buri Ram", "Chachoengsao", "Chai Nat", "Chaiyaphum",
    "Chanthaburi", "Chiang Mai", "Chiang Rai", "Chon Buri",
    "Chumphon", "Kalasin", "Kamphaeng Phet", "Kanchanaburi",
    "Khon Kaen", "Krabi", "Lampang", "Lamphun",
    "Loei", "Lop Buri", "Mae Hong Son", "Maha Sarakham",
    "Mukdahan", "Nakhon Nayok", "Nakhon Pathom", "Nakhon Phanom",
    "Nakhon Ratchasima", "Nakhon Sawan", "Nakhon Si Thammarat", "Nan",
    "Narathiwat", "Nong Bua Lam Phu", "Nong Khai", "Nonthaburi",
    "Pathum Thani", "Pattani", "Phang Nga", "Phatthalung",
    "Phayao", "Phetchabun", "Phetchaburi", "Phichit",
    "Phitsanulok", "Phra Nakhon Si Ayutthaya", "Phrae", "Phuket",
    "Prachin Buri", "Prachuap Khiri Khan", "Ranong", "Ratchaburi",
    "Rayong", "Roi Et", "Sa Kaeo", "Sakon Nakhon",
    "Samut Prakan", "Samut Sakhon", "Samut Songkhram", "Saraburi",
    "Satun", "Sing Buri", "Si Sa Ket", "Songkhla",
    "Sukhothai", "Suphan Buri", "Surat Thani", "Surin",
    "Tak", "Trang", "Trat", "Ubon Ratchathani",
    "Udon Thani", "Uthai Thani", "Uttaradit", "Yala",
    "Yasothon",
];

/// Case-insensitive substring search over `options`, keeping their order.
fn search<'a>(options: &[&'a str], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .copied()
        .filter(|option| option.to_lowercase().contains(&query))
        .collect()
}

pub fn filter_breeds(query: &str) -> Vec<&'static str> {
    search(&BREED_OPTIONS, query)
}

pub fn filter_provinces(query: &str) -> Vec<&'static str> {
    search(&PROVINCES, query)
}

/// In-progress registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct DogRegistration {
    step: u8,
    pub name: String,
    pub breed: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub size: Option<DogSize>,
    pub energy: Option<EnergyLevel>,
    pub activities: Vec<String>,
    pub bio: String,
    pub city: String,
}

impl Default for DogRegistration {
    fn default() -> Self {
        Self {
            step: 1,
            name: String::new(),
            breed: String::new(),
            age: None,
            gender: Gender::Male,
            size: None,
            energy: None,
            activities: Vec::new(),
            bio: String::new(),
            city: DEFAULT_CITY.to_string(),
        }
    }
}

impl DogRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form for editing an already registered dog, starting at step 1.
    pub fn from_profile(profile: &DogProfile) -> Self {
        let dog = &profile.dog;
        Self {
            step: 1,
            name: dog.name.clone(),
            breed: dog.breed.clone(),
            age: Some(u32::from(dog.age)),
            gender: dog.gender,
            size: Some(dog.size),
            energy: Some(dog.energy),
            activities: dog.activities.clone(),
            bio: dog.bio.clone(),
            city: dog.location.city.clone(),
        }
    }

    /// Current step, `1..=TOTAL_STEPS`.
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    pub fn progress_percentage(&self) -> f64 {
        f64::from(self.step) / f64::from(TOTAL_STEPS) * 100.0
    }

    /// Parse the age field. Anything that is not a whole number clears it.
    pub fn set_age_text(&mut self, text: &str) {
        self.age = text.trim().parse().ok();
    }

    pub fn toggle_activity(&mut self, activity: &str) {
        if let Some(pos) = self.activities.iter().position(|a| a == activity) {
            self.activities.remove(pos);
        } else {
            self.activities.push(activity.to_string());
        }
    }

    pub fn has_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|a| a == activity)
    }

    /// Field errors of `step`; empty when the step is complete.
    pub fn step_errors(&self, step: u8) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            1 => {
                let name_len = self.name.trim().chars().count();
                if name_len == 0 {
                    errors.push(FieldError::new("name", "Name is required"));
                } else if name_len < MIN_NAME_LEN {
                    errors.push(FieldError::new("name", "Name must be at least 2 characters"));
                }
                if self.breed.trim().is_empty() {
                    errors.push(FieldError::new("breed", "Breed is required"));
                }
                match self.age {
                    None => errors.push(FieldError::new("age", "Age is required")),
                    Some(age) if age > MAX_AGE => {
                        errors.push(FieldError::new("age", "Age must be between 0 and 25"))
                    }
                    Some(_) => {}
                }
            }
            2 => {
                if self.size.is_none() {
                    errors.push(FieldError::new("size", "Size is required"));
                }
                if self.energy.is_none() {
                    errors.push(FieldError::new("energy", "Energy level is required"));
                }
            }
            3 => {
                if self.activities.is_empty() {
                    errors.push(FieldError::new("activities", "Pick at least one activity"));
                }
                if self.bio.chars().count() > MAX_BIO_LEN {
                    errors.push(FieldError::new("bio", "Bio must be 300 characters or less"));
                }
                if self.city.trim().is_empty() {
                    errors.push(FieldError::new("city", "City is required"));
                }
            }
            _ => {}
        }
        errors
    }

    pub fn validate_step(&self, step: u8) -> Result<(), ProfileError> {
        let errors = self.step_errors(step);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::InvalidStep { step, errors })
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.step_errors(self.step).is_empty()
    }

    /// Advance when the current step validates. Stays on the last step.
    pub fn next_step(&mut self) -> Result<u8, ProfileError> {
        self.validate_step(self.step)?;
        if self.step < TOTAL_STEPS {
            self.step += 1;
        }
        Ok(self.step)
    }

    pub fn previous_step(&mut self) -> u8 {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    /// Validate every step and build the owner's profile.
    pub fn build_profile(&self, owner: &User, now: DateTime<Utc>) -> Result<DogProfile, ProfileError> {
        for step in 1..=TOTAL_STEPS {
            self.validate_step(step)?;
        }

        let (size, energy, age) = match (self.size, self.energy, self.age) {
            (Some(size), Some(energy), Some(age)) => (size, energy, age),
            _ => {
                return Err(ProfileError::InvalidStep {
                    step: 1,
                    errors: vec![FieldError::new("form", "Form is incomplete")],
                })
            }
        };
        let age = u8::try_from(age).unwrap_or(u8::MAX);

        let (lat, lng) = REGISTERED_COORDS;
        Ok(DogProfile {
            dog: Dog {
                id: Uuid::new_v4().to_string(),
                name: self.name.trim().to_string(),
                breed: self.breed.trim().to_string(),
                age,
                gender: self.gender,
                size,
                energy,
                activities: self.activities.clone(),
                bio: self.bio.trim().to_string(),
                image_url: DEFAULT_DOG_IMAGE.to_string(),
                location: Location::new(lat, lng, self.city.trim()),
                owner_id: owner.id.clone(),
                owner_name: owner.name.clone(),
            },
            created_at: now,
            updated_at: now,
        })
    }
}

/// Loads and saves the signed-in owner's dog.
pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> PawResult<Option<DogProfile>> {
        Ok(self.store.get_item(keys::USER_DOG_PROFILE)?)
    }

    /// Validate `form` and persist the resulting profile.
    pub fn submit(
        &self,
        form: &DogRegistration,
        owner: &User,
        now: DateTime<Utc>,
    ) -> PawResult<DogProfile> {
        let profile = form.build_profile(owner, now)?;
        self.store.set_item(keys::USER_DOG_PROFILE, &profile)?;
        tracing::info!(dog_id = %profile.dog.id, name = %profile.dog.name, "dog registered");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use chrono::TimeZone;

    fn owner() -> User {
        User {
            id: "u-1".to_string(),
            email: "demo@pawmatch.com".to_string(),
            name: "Demo User".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn complete_form() -> DogRegistration {
        let mut form = DogRegistration::new();
        form.name = "Mochi".to_string();
        form.breed = "Shih Tzu".to_string();
        form.age = Some(2);
        form.gender = Gender::Female;
        form.size = Some(DogSize::Small);
        form.energy = Some(EnergyLevel::Moderate);
        form.toggle_activity("Walking");
        form.bio = "Loves naps.".to_string();
        form
    }

    #[test]
    fn test_provinces() {
        assert_eq!(PROVINCES.len(), 77);
        assert!(PROVINCES.contains(&"Bangkok"));
    }

    #[test]
    fn test_filter_provinces_case_insensitive() {
        assert_eq!(
            filter_provinces("chiang"),
            vec!["Chiang Mai", "Chiang Rai"]
        );
        assert_eq!(filter_provinces("").len(), 77);
        assert!(filter_provinces("zzz").is_empty());
    }

    #[test]
    fn test_filter_breeds() {
        let hits = filter_breeds("TERRIER");
        assert_eq!(hits, vec!["Boston Terrier", "Yorkshire Terrier"]);
    }

    #[test]
    fn test_step_one_blocks_until_valid() {
        let mut form = DogRegistration::new();
        assert_eq!(form.step(), 1);
        assert!(!form.can_proceed());

        let err = form.next_step().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "breed", "age"]);
        assert_eq!(form.step(), 1);

        form.name = "M".to_string();
        form.breed = "Beagle".to_string();
        form.age = Some(26);
        let fields: Vec<_> = form.step_errors(1).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "age"]);

        form.name = "Mo".to_string();
        form.age = Some(0);
        assert_eq!(form.next_step().unwrap(), 2);
    }

    #[test]
    fn test_step_two_and_three() {
        let mut form = complete_form();
        form.size = None;
        form.next_step().unwrap();
        assert!(form.next_step().is_err());
        form.size = Some(DogSize::Small);
        assert_eq!(form.next_step().unwrap(), 3);
        assert!(form.is_last_step());

        form.bio = "x".repeat(301);
        assert_eq!(form.step_errors(3)[0].field, "bio");
        form.bio = "x".repeat(300);
        assert!(form.can_proceed());
        assert_eq!(form.next_step().unwrap(), 3);
    }

    #[test]
    fn test_activities_required() {
        let mut form = complete_form();
        form.toggle_activity("Walking");
        assert!(!form.has_activity("Walking"));
        assert_eq!(form.step_errors(3)[0].field, "activities");
    }

    #[test]
    fn test_previous_step_floor() {
        let mut form = complete_form();
        assert_eq!(form.previous_step(), 1);
        form.next_step().unwrap();
        assert_eq!(form.previous_step(), 1);
    }

    #[test]
    fn test_progress_percentage() {
        let mut form = complete_form();
        assert!((form.progress_percentage() - 100.0 / 3.0).abs() < 1e-9);
        form.next_step().unwrap();
        form.next_step().unwrap();
        assert_eq!(form.progress_percentage(), 100.0);
    }

    #[test]
    fn test_set_age_text() {
        let mut form = DogRegistration::new();
        form.set_age_text(" 7 ");
        assert_eq!(form.age, Some(7));
        form.set_age_text("seven");
        assert_eq!(form.age, None);
    }

    #[test]
    fn test_submit_persists_profile() {
        let store = InMemoryStore::new();
        let profiles = ProfileService::new(Arc::new(store.clone()));
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

        let profile = profiles.submit(&complete_form(), &owner(), now).unwrap();
        assert_eq!(profile.dog.name, "Mochi");
        assert_eq!(profile.dog.location.city, "Bangkok");
        assert_eq!(profile.dog.image_url, DEFAULT_DOG_IMAGE);
        assert_eq!(profile.dog.owner_id, "u-1");
        assert_eq!(profile.created_at, now);

        let loaded = profiles.load().unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_submit_rejects_incomplete_form() {
        let store = InMemoryStore::new();
        let profiles = ProfileService::new(Arc::new(store.clone()));
        let mut form = complete_form();
        form.energy = None;

        let err = profiles.submit(&form, &owner(), Utc::now()).unwrap_err();
        assert_eq!(err.error_code(), "PROFILE_INVALID_STEP");
        assert!(profiles.load().unwrap().is_none());
    }

    #[test]
    fn test_from_profile_round_trips_fields() {
        let profile = complete_form()
            .build_profile(&owner(), Utc::now())
            .unwrap();
        let form = DogRegistration::from_profile(&profile);

        assert_eq!(form.step(), 1);
        assert_eq!(form.name, "Mochi");
        assert_eq!(form.city, "Bangkok");
        assert!(form.can_proceed());
    }
}
