//! Matching service: candidate selection, swipe history and matches.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use super::catalog;
use crate::error::{PawError, PawResult, ResultExt};
use crate::models::{Dog, DogFilters, Match, SwipeOutcome, SwipeRecord, SwipeStats};
use crate::storage::keys;
use crate::swipe::SwipeAction;
use crate::traits::{KeyValueStore, StoreExt};

/// Chance that a liked dog likes back.
pub const DEFAULT_MUTUAL_LIKE_CHANCE: f64 = 0.3;

/// Owns the swipe history and matches, persisted through a [`KeyValueStore`].
pub struct DogService {
    store: Arc<dyn KeyValueStore>,
    catalog: Vec<Dog>,
    swipes: Vec<SwipeRecord>,
    matches: Vec<Match>,
    mutual_like_chance: f64,
    rng: StdRng,
}

impl std::fmt::Debug for DogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DogService")
            .field("catalog", &self.catalog.len())
            .field("swipes", &self.swipes.len())
            .field("matches", &self.matches.len())
            .field("mutual_like_chance", &self.mutual_like_chance)
            .finish()
    }
}

impl DogService {
    /// Load swipe history and matches from `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> PawResult<Self> {
        let swipes: Vec<SwipeRecord> = store.get_item(keys::SWIPES)?.unwrap_or_default();
        let matches: Vec<Match> = store.get_item(keys::MATCHES)?.unwrap_or_default();
        tracing::debug!(
            swipes = swipes.len(),
            matches = matches.len(),
            "loaded swipe history"
        );

        Ok(Self {
            store,
            catalog: catalog::all_dogs(),
            swipes,
            matches,
            mutual_like_chance: DEFAULT_MUTUAL_LIKE_CHANCE,
            rng: StdRng::from_entropy(),
        })
    }

    /// Override the mutual-like probability. Values outside `0..=1` behave
    /// like the nearest bound.
    pub fn with_mutual_like_chance(mut self, chance: f64) -> Self {
        self.mutual_like_chance = chance;
        self
    }

    /// Make match decisions reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the candidate database.
    pub fn with_catalog(mut self, dogs: Vec<Dog>) -> Self {
        self.catalog = dogs;
        self
    }

    pub fn mutual_like_chance(&self) -> f64 {
        self.mutual_like_chance
    }

    /// Unswiped dogs that pass `filters`, in catalog order.
    ///
    /// Breed, size, energy and activity filters apply only when non-empty;
    /// activities match on any overlap. The age range always applies.
    pub fn get_dogs(&self, filters: &DogFilters) -> Vec<Dog> {
        let swiped: HashSet<&str> = self.swipes.iter().map(|s| s.dog_id.as_str()).collect();

        let mut filtered: Vec<&Dog> = self
            .catalog
            .iter()
            .filter(|dog| !swiped.contains(dog.id.as_str()))
            .collect();
        tracing::debug!(count = filtered.len(), "candidates before filtering");

        if !filters.breeds.is_empty() {
            filtered.retain(|dog| filters.has_breed(&dog.breed));
            tracing::debug!(count = filtered.len(), "after breed filter");
        }

        if !filters.sizes.is_empty() {
            filtered.retain(|dog| filters.has_size(dog.size));
            tracing::debug!(count = filtered.len(), "after size filter");
        }

        if !filters.energy_levels.is_empty() {
            filtered.retain(|dog| filters.has_energy(dog.energy));
            tracing::debug!(count = filtered.len(), "after energy filter");
        }

        if !filters.activities.is_empty() {
            filtered.retain(|dog| filters.activities.iter().any(|a| dog.has_activity(a)));
            tracing::debug!(count = filtered.len(), "after activities filter");
        }

        filtered.retain(|dog| filters.age_range.contains(dog.age));
        tracing::debug!(count = filtered.len(), "after age filter");

        filtered.into_iter().cloned().collect()
    }

    /// Record a decision about `dog_id` and roll for a mutual match.
    ///
    /// Only likes and favorites can match, and only for dogs in the catalog.
    /// Fails only when the swipe record itself cannot be saved; a match that
    /// cannot be saved is logged and dropped.
    pub fn submit_swipe(&mut self, dog_id: &str, action: SwipeAction) -> PawResult<SwipeOutcome> {
        let now = Utc::now();
        let mut swipes = self.swipes.clone();
        swipes.push(SwipeRecord {
            dog_id: dog_id.to_string(),
            action,
            timestamp: now,
        });
        self.store.set_item(keys::SWIPES, &swipes)?;
        self.swipes = swipes;

        let is_match = action.can_match() && self.rng.gen::<f64>() < self.mutual_like_chance;
        tracing::info!(dog_id, action = %action, is_match, "swipe submitted");
        if !is_match {
            return Ok(SwipeOutcome::default());
        }

        let Some(dog) = self.dog_by_id(dog_id).cloned() else {
            return Ok(SwipeOutcome::default());
        };

        let matched = Match {
            id: Uuid::new_v4().to_string(),
            dog,
            matched_at: now,
            chat_id: None,
        };
        let mut matches = self.matches.clone();
        matches.push(matched.clone());
        // The swipe is already recorded; a lost match must not make it look undone.
        let saved = self
            .store
            .set_item(keys::MATCHES, &matches)
            .map_err(PawError::from)
            .log_err("save_matches");
        if saved.is_err() {
            return Ok(SwipeOutcome::default());
        }
        self.matches = matches;

        Ok(SwipeOutcome {
            matched: Some(matched),
        })
    }

    /// Drop the most recent swipe and return its dog so it can be shown again.
    ///
    /// A match made by that swipe is kept.
    pub fn undo_last_swipe(&mut self) -> PawResult<Option<Dog>> {
        let Some((last, rest)) = self.swipes.split_last() else {
            return Ok(None);
        };
        let last = last.clone();
        let rest = rest.to_vec();

        self.store.set_item(keys::SWIPES, &rest)?;
        self.swipes = rest;
        tracing::info!(dog_id = %last.dog_id, action = %last.action, "swipe undone");

        Ok(self.dog_by_id(&last.dog_id).cloned())
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn swipes(&self) -> &[SwipeRecord] {
        &self.swipes
    }

    pub fn dog_by_id(&self, id: &str) -> Option<&Dog> {
        self.catalog.iter().find(|d| d.id == id)
    }

    pub fn clear_matches(&mut self) -> PawResult<()> {
        self.store.remove(keys::MATCHES)?;
        self.matches.clear();
        Ok(())
    }

    /// Forget every swipe and match.
    pub fn clear_all(&mut self) -> PawResult<()> {
        self.store.remove(keys::SWIPES)?;
        self.store.remove(keys::MATCHES)?;
        self.swipes.clear();
        self.matches.clear();
        tracing::info!("swipe history cleared");
        Ok(())
    }

    pub fn stats(&self) -> SwipeStats {
        SwipeStats::from_history(&self.swipes, &self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::models::{DogSize, EnergyLevel};

    fn service(store: &InMemoryStore, chance: f64) -> DogService {
        DogService::new(Arc::new(store.clone()))
            .unwrap()
            .with_mutual_like_chance(chance)
            .with_seed(7)
    }

    #[test]
    fn test_default_filters_return_whole_catalog() {
        let store = InMemoryStore::new();
        let svc = service(&store, 0.0);
        assert_eq!(svc.get_dogs(&DogFilters::default()).len(), catalog::len());
    }

    #[test]
    fn test_swiped_dogs_are_excluded() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 0.0);
        svc.submit_swipe("1", SwipeAction::Pass).unwrap();

        let dogs = svc.get_dogs(&DogFilters::default());
        assert_eq!(dogs.len(), catalog::len() - 1);
        assert!(dogs.iter().all(|d| d.id != "1"));
    }

    #[test]
    fn test_filters_compose() {
        let store = InMemoryStore::new();
        let svc = service(&store, 0.0);
        let mut filters = DogFilters::default();
        filters.toggle_size(DogSize::Large);
        filters.toggle_energy(EnergyLevel::High);
        filters.toggle_activity("Swimming");

        let dogs = svc.get_dogs(&filters);
        assert!(!dogs.is_empty());
        for dog in &dogs {
            assert_eq!(dog.size, DogSize::Large);
            assert_eq!(dog.energy, EnergyLevel::High);
            assert!(dog.has_activity("Swimming"));
        }
    }

    #[test]
    fn test_activities_match_any() {
        let store = InMemoryStore::new();
        let svc = service(&store, 0.0);
        let mut filters = DogFilters::default();
        filters.toggle_activity("Camping");
        filters.toggle_activity("Beach");

        let dogs = svc.get_dogs(&filters);
        assert!(!dogs.is_empty());
        assert!(dogs
            .iter()
            .all(|d| d.has_activity("Camping") || d.has_activity("Beach")));
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let store = InMemoryStore::new();
        let svc = service(&store, 0.0);
        let mut filters = DogFilters::default();
        filters.set_age_range(2, 2);

        let dogs = svc.get_dogs(&filters);
        assert!(!dogs.is_empty());
        assert!(dogs.iter().all(|d| d.age == 2));
    }

    #[test]
    fn test_breed_filter() {
        let store = InMemoryStore::new();
        let svc = service(&store, 0.0);
        let mut filters = DogFilters::default();
        filters.toggle_breed("Beagle");

        let dogs = svc.get_dogs(&filters);
        assert!(!dogs.is_empty());
        assert!(dogs.iter().all(|d| d.breed == "Beagle"));
    }

    #[test]
    fn test_pass_never_matches() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 1.0);

        let outcome = svc.submit_swipe("1", SwipeAction::Pass).unwrap();
        assert!(!outcome.is_match());
        assert!(svc.matches().is_empty());
    }

    #[test]
    fn test_like_matches_when_certain() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 1.0);

        let outcome = svc.submit_swipe("2", SwipeAction::Like).unwrap();
        let matched = outcome.matched.unwrap();
        assert_eq!(matched.dog.id, "2");
        assert_eq!(svc.matches().len(), 1);

        let stored: Vec<Match> = store.get_item(keys::MATCHES).unwrap().unwrap();
        assert_eq!(stored[0].id, matched.id);
    }

    #[test]
    fn test_like_never_matches_at_zero_chance() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 0.0);

        for id in ["1", "2", "3"] {
            assert!(!svc.submit_swipe(id, SwipeAction::Favorite).unwrap().is_match());
        }
        assert!(store.get(keys::MATCHES).unwrap().is_none());
    }

    #[test]
    fn test_unknown_dog_is_recorded_without_match() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 1.0);

        let outcome = svc.submit_swipe("ghost", SwipeAction::Like).unwrap();
        assert!(!outcome.is_match());
        assert_eq!(svc.swipes().len(), 1);
    }

    #[test]
    fn test_undo_returns_dog_and_keeps_match() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 1.0);
        svc.submit_swipe("3", SwipeAction::Like).unwrap();

        let dog = svc.undo_last_swipe().unwrap().unwrap();
        assert_eq!(dog.id, "3");
        assert!(svc.swipes().is_empty());
        assert_eq!(svc.matches().len(), 1);

        let stored: Vec<SwipeRecord> = store.get_item(keys::SWIPES).unwrap().unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_undo_with_no_history() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 0.0);
        assert!(svc.undo_last_swipe().unwrap().is_none());
    }

    #[test]
    fn test_history_reloads() {
        let store = InMemoryStore::new();
        {
            let mut svc = service(&store, 1.0);
            svc.submit_swipe("1", SwipeAction::Like).unwrap();
            svc.submit_swipe("2", SwipeAction::Favorite).unwrap();
        }

        let svc = service(&store, 0.0);
        assert_eq!(svc.swipes().len(), 2);
        assert_eq!(svc.matches().len(), 2);
        assert_eq!(svc.get_dogs(&DogFilters::default()).len(), catalog::len() - 2);
    }

    #[test]
    fn test_stats() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 1.0);
        svc.submit_swipe("1", SwipeAction::Pass).unwrap();
        svc.submit_swipe("2", SwipeAction::Like).unwrap();
        svc.submit_swipe("3", SwipeAction::Favorite).unwrap();

        let stats = svc.stats();
        assert_eq!(stats.total_swipes, 2);
        assert_eq!(stats.favorites, 1);
        assert_eq!(stats.matches, 2);
    }

    #[test]
    fn test_clear_matches_and_all() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 1.0);
        svc.submit_swipe("1", SwipeAction::Like).unwrap();

        svc.clear_matches().unwrap();
        assert!(svc.matches().is_empty());
        assert_eq!(svc.swipes().len(), 1);

        svc.clear_all().unwrap();
        assert!(svc.swipes().is_empty());
        assert!(store.raw_keys().is_empty());
    }

    #[test]
    fn test_failed_persist_keeps_memory_unchanged() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 0.0);
        store.set_set_should_fail(true);

        assert!(svc.submit_swipe("1", SwipeAction::Pass).is_err());
        assert!(svc.swipes().is_empty());
    }

    #[test]
    fn test_unsaved_match_keeps_the_swipe() {
        let store = InMemoryStore::new();
        let mut svc = service(&store, 1.0);
        store.fail_set_for(keys::MATCHES);

        let outcome = svc.submit_swipe("1", SwipeAction::Like).unwrap();
        assert!(!outcome.is_match());
        assert!(svc.matches().is_empty());
        assert_eq!(svc.swipes().len(), 1);
        assert!(store.get(keys::SWIPES).unwrap().is_some());
        assert!(store.get(keys::MATCHES).unwrap().is_none());
    }

    #[test]
    fn test_dog_by_id() {
        let store = InMemoryStore::new();
        let svc = service(&store, 0.0);
        assert_eq!(svc.dog_by_id("1").unwrap().name, "Max");
        assert!(svc.dog_by_id("999").is_none());
    }
}
