//! Favorites Store
//!
//! In-memory mapping from (owner id, name) to saved text. Process-wide,
//! created empty at startup, discarded on exit.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cloneable handle over the shared favorites map.
///
/// Keyed by owner id and name together, so one user can never read
/// another's favorite by name. Stores are whole-value replaces and reads
/// are whole-value clones; racing stores on the same key resolve
/// last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: Arc<Mutex<HashMap<(String, String), String>>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the favorite under (owner, name).
    pub fn store(&self, owner_id: &str, name: &str, content: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert((owner_id.to_string(), name.to_string()), content.to_string());
    }

    /// Looks up the favorite under (owner, name).
    pub fn retrieve(&self, owner_id: &str, name: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(&(owner_id.to_string(), name.to_string()))
            .cloned()
    }

    /// Number of saved favorites across all owners.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_after_store_returns_content() {
        let store = FavoritesStore::new();
        store.store("42", "site", "https://example.com");
        assert_eq!(
            store.retrieve("42", "site").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn store_overwrites_existing_entry() {
        let store = FavoritesStore::new();
        store.store("42", "site", "first");
        store.store("42", "site", "second");
        assert_eq!(store.retrieve("42", "site").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn owners_are_isolated() {
        let store = FavoritesStore::new();
        store.store("42", "site", "secret");
        assert_eq!(store.retrieve("99", "site"), None);
    }

    #[test]
    fn missing_name_is_none() {
        let store = FavoritesStore::new();
        store.store("42", "site", "content");
        assert_eq!(store.retrieve("42", "other"), None);
    }

    #[test]
    fn clones_share_state() {
        let store = FavoritesStore::new();
        let handle = store.clone();
        handle.store("42", "site", "shared");
        assert_eq!(store.retrieve("42", "site").as_deref(), Some("shared"));
    }
}
