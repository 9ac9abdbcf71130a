//! Item List
//!
//! Ordered sequence of entries plus the pure transitions applied to it.
//! Positions are not stable: removing index `i` shifts every later entry down.

use serde::{Deserialize, Serialize};

/// Ordered list of entries, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<String>);

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the list with `entry` appended at the end.
    pub fn appended(mut self, entry: String) -> Self {
        self.0.push(entry);
        self
    }

    /// Returns the list without the entry at `index`, and that entry.
    ///
    /// Out-of-range indices leave the list as it was.
    pub fn without(mut self, index: usize) -> (Self, Option<String>) {
        if index < self.0.len() {
            let removed = self.0.remove(index);
            (self, Some(removed))
        } else {
            (self, None)
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ItemList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Trim user input; `None` if nothing is left.
pub fn normalize_entry(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_entry() {
        assert_eq!(normalize_entry("  milk \t"), Some("milk".to_string()));
        assert_eq!(normalize_entry("two  words"), Some("two  words".to_string()));
        assert_eq!(normalize_entry(""), None);
        assert_eq!(normalize_entry("   \n"), None);
        assert_eq!(normalize_entry("\u{3000}c\u{3000}"), Some("c".to_string()));
    }

    #[test]
    fn test_appended_keeps_order_and_duplicates() {
        let list = ItemList::new()
            .appended("a".into())
            .appended("b".into())
            .appended("a".into());
        assert_eq!(list.as_slice(), ["a", "b", "a"]);
    }

    #[test]
    fn test_without_shifts_later_entries() {
        let list: ItemList = ["a", "b", "c", "d"].into_iter().collect();

        let (list, removed) = list.without(1);
        assert_eq!(removed.as_deref(), Some("b"));
        assert_eq!(list.as_slice(), ["a", "c", "d"]);
    }

    #[test]
    fn test_without_out_of_range() {
        let list: ItemList = ["a"].into_iter().collect();
        let (list, removed) = list.without(3);
        assert_eq!(removed, None);
        assert_eq!(list.len(), 1);
    }
}
