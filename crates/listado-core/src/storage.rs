//! Storage Port
//!
//! Key-value interface the store persists through. The browser adapter lives in
//! the UI crate; `MemoryStorage` backs tests and non-browser embeddings.

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal get/set/delete-by-key storage.
///
/// Writes cannot fail at this level. Adapters over fallible backends log the
/// failure and return.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str);

    fn remove_item(&self, key: &str);
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k"), None);

        storage.set_item("k", "v1");
        storage.set_item("k", "v2");
        assert_eq!(storage.get_item("k").as_deref(), Some("v2"));

        storage.remove_item("k");
        assert!(!storage.contains_key("k"));
    }
}
