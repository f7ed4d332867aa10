//! Saved match filters.

use std::sync::Arc;

use crate::error::PawResult;
use crate::models::DogFilters;
use crate::storage::keys;
use crate::traits::{KeyValueStore, StoreExt};

pub struct PreferencesService {
    store: Arc<dyn KeyValueStore>,
}

impl PreferencesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Filters used for candidate selection, or the defaults.
    pub fn load(&self) -> PawResult<DogFilters> {
        Ok(self
            .store
            .get_item(keys::DOG_FILTERS)?
            .unwrap_or_default())
    }

    /// Persist `filters` as both the saved preferences and the active filters.
    pub fn save(&self, filters: &DogFilters) -> PawResult<()> {
        self.store.set_item(keys::MATCH_PREFERENCES, filters)?;
        self.store.set_item(keys::DOG_FILTERS, filters)?;
        tracing::info!(
            breeds = filters.breeds.len(),
            sizes = filters.sizes.len(),
            energy_levels = filters.energy_levels.len(),
            activities = filters.activities.len(),
            "preferences saved"
        );
        Ok(())
    }

    /// Default filters. Nothing is written until [`save`](Self::save).
    pub fn reset(&self) -> DogFilters {
        DogFilters::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::models::DogSize;

    #[test]
    fn test_load_defaults_when_empty() {
        let prefs = PreferencesService::new(Arc::new(InMemoryStore::new()));
        assert_eq!(prefs.load().unwrap(), DogFilters::default());
    }

    #[test]
    fn test_save_writes_both_keys() {
        let store = InMemoryStore::new();
        let prefs = PreferencesService::new(Arc::new(store.clone()));
        let mut filters = DogFilters::default();
        filters.toggle_size(DogSize::Toy);

        prefs.save(&filters).unwrap();
        assert_eq!(
            store.raw_keys(),
            vec!["pawmatch_dog_filters", "pawmatch_match_preferences"]
        );
        assert_eq!(prefs.load().unwrap(), filters);
    }

    #[test]
    fn test_reset_does_not_persist() {
        let store = InMemoryStore::new();
        let prefs = PreferencesService::new(Arc::new(store.clone()));
        let mut filters = DogFilters::default();
        filters.toggle_breed("Boxer");
        prefs.save(&filters).unwrap();

        assert_eq!(prefs.reset(), DogFilters::default());
        assert_eq!(prefs.load().unwrap(), filters);
    }
}
