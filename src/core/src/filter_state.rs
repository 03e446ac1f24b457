//! Selected category, persisted to the session `selectedCategory` slot.

use std::sync::Arc;

use log::{debug, warn};

use crate::error_handling::types::StorageError;
use crate::quote_store::CategoryFilter;
use crate::storage::types::SELECTED_CATEGORY_KEY;
use crate::storage::Storage;

pub struct FilterState {
    storage: Arc<dyn Storage>,
}

impl FilterState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Stores `filter` in the session slot. [`CategoryFilter::All`] is
    /// written as `"all"`.
    pub fn set_filter(&self, filter: &CategoryFilter) -> Result<(), StorageError> {
        self.storage.set_item(SELECTED_CATEGORY_KEY, filter.as_str())?;
        debug!("Selected category set to {}", filter);
        Ok(())
    }

    /// The last persisted filter, or [`CategoryFilter::All`] when nothing
    /// readable has been stored.
    pub fn get_filter(&self) -> CategoryFilter {
        match self.storage.get_item(SELECTED_CATEGORY_KEY) {
            Ok(Some(value)) => CategoryFilter::parse(&value),
            Ok(None) => CategoryFilter::All,
            Err(e) => {
                warn!("Unable to read selected category ({}), showing all", e);
                CategoryFilter::All
            }
        }
    }

    /// The persisted filter if it still names one of `categories`
    /// (case-insensitively), otherwise [`CategoryFilter::All`].
    pub fn restore(&self, categories: &[String]) -> CategoryFilter {
        match self.get_filter() {
            CategoryFilter::Category(name) => {
                let wanted = name.trim().to_lowercase();
                match categories.iter().find(|c| c.to_lowercase() == wanted) {
                    Some(existing) => CategoryFilter::Category(existing.clone()),
                    None => {
                        debug!("Saved category {:?} no longer exists", name);
                        CategoryFilter::All
                    }
                }
            }
            CategoryFilter::All => CategoryFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    #[test]
    fn defaults_to_all() {
        let state = FilterState::new(Arc::new(MemoryStorage::new()));
        assert_eq!(state.get_filter(), CategoryFilter::All);
    }

    #[test]
    fn set_filter_survives_a_new_state() {
        let dir = TempDir::new().unwrap();
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(dir.path()).unwrap());
        FilterState::new(storage.clone())
            .set_filter(&CategoryFilter::parse("Humor"))
            .unwrap();

        let state = FilterState::new(storage.clone());
        assert_eq!(state.get_filter(), CategoryFilter::Category("Humor".into()));
        assert_eq!(
            storage.get_item(SELECTED_CATEGORY_KEY).unwrap().as_deref(),
            Some("Humor")
        );
    }

    #[test]
    fn all_is_persisted_as_text() {
        let storage = Arc::new(MemoryStorage::new());
        let state = FilterState::new(storage.clone());
        state.set_filter(&CategoryFilter::parse("life")).unwrap();
        state.set_filter(&CategoryFilter::All).unwrap();
        assert_eq!(storage.get_item(SELECTED_CATEGORY_KEY).unwrap().as_deref(), Some("all"));
        assert_eq!(state.get_filter(), CategoryFilter::All);
    }

    #[test]
    fn restore_checks_existing_categories() {
        let state = FilterState::new(Arc::new(MemoryStorage::new()));
        let categories = vec!["Life".to_string(), "Humor".to_string()];

        state.set_filter(&CategoryFilter::parse("life")).unwrap();
        assert_eq!(state.restore(&categories), CategoryFilter::Category("Life".into()));

        state.set_filter(&CategoryFilter::parse("Gone")).unwrap();
        assert_eq!(state.restore(&categories), CategoryFilter::All);
    }
}
