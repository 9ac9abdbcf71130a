//! List Store
//!
//! Read-modify-write operations over one persisted key. Nothing is cached:
//! every operation starts from what storage currently holds, so the last
//! writer wins.

use crate::codec;
use crate::list::{normalize_entry, ItemList};
use crate::storage::KeyValueStorage;
use crate::view::ListView;

/// Result of [`ListStore::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Entry appended at `index`
    Added { index: usize },
    /// Input was empty after trimming; nothing changed
    Ignored,
}

/// Persisted ordered list of strings behind a storage port
#[derive(Debug, Clone)]
pub struct ListStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ListStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current list. Absent key reads as empty; a malformed value is
    /// removed and also reads as empty.
    pub fn load(&self) -> ItemList {
        let Some(raw) = self.storage.get_item(&self.key) else {
            return ItemList::new();
        };
        match codec::decode(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("discarding value under {:?}: {}", self.key, err);
                self.storage.remove_item(&self.key);
                ItemList::new()
            }
        }
    }

    /// Overwrite the persisted value with `items`.
    pub fn save(&self, items: &ItemList) {
        match codec::encode(items) {
            Ok(raw) => self.storage.set_item(&self.key, &raw),
            Err(err) => log::error!("failed to encode list for {:?}: {}", self.key, err),
        }
    }

    pub fn add(&self, text: &str) -> AddOutcome {
        let Some(entry) = normalize_entry(text) else {
            return AddOutcome::Ignored;
        };
        let items = self.load().appended(entry);
        let index = items.len() - 1;
        self.save(&items);
        log::debug!("added entry at {} ({} total)", index, items.len());
        AddOutcome::Added { index }
    }

    /// Remove the entry at `index` as rendered.
    ///
    /// The index is positional: if the list changed since it was rendered
    /// (another tab, for instance) a different entry may be removed, or none
    /// when the index no longer exists. The list is rewritten either way.
    pub fn remove_at(&self, index: usize) -> Option<String> {
        let (items, removed) = self.load().without(index);
        self.save(&items);
        match &removed {
            Some(_) => log::debug!("removed entry {} ({} left)", index, items.len()),
            None => log::debug!("no entry at {} to remove", index),
        }
        removed
    }

    /// Delete the persisted key outright.
    pub fn clear_all(&self) {
        self.storage.remove_item(&self.key);
        log::debug!("cleared {:?}", self.key);
    }

    pub fn view(&self) -> ListView {
        ListView::from_items(&self.load())
    }
}
