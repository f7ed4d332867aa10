//! Data models shared by the services and the terminal front end.
//!
//! Field names serialize in camelCase so the stored documents keep the same
//! shape across versions.

pub mod auth;
pub mod dog;
pub mod filters;
pub mod swipe;

pub use auth::{AuthState, LoginCredentials, User};
pub use dog::{Dog, DogProfile, DogSize, EnergyLevel, Gender, Location, DEFAULT_DOG_IMAGE};
pub use filters::{
    AgeRange, DogFilters, ACTIVITY_OPTIONS, BREED_OPTIONS, MAX_FILTER_AGE, RADIUS_RANGE_KM,
};
pub use swipe::{time_ago, Match, SwipeOutcome, SwipeRecord, SwipeStats};
