//! Services behind the screens. Each persists through a shared
//! [`KeyValueStore`](crate::traits::KeyValueStore).

pub mod auth;
pub mod catalog;
pub mod dogs;
pub mod preferences;
pub mod profile;

pub use auth::{AuthService, DEMO_EMAIL, DEMO_PASSWORD};
pub use dogs::{DogService, DEFAULT_MUTUAL_LIKE_CHANCE};
pub use preferences::PreferencesService;
pub use profile::{filter_breeds, filter_provinces, DogRegistration, ProfileService, PROVINCES};
