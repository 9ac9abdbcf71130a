//! Render Model
//!
//! What the page shows for a given list, independent of any UI toolkit.

use crate::list::ItemList;

/// One rendered row. `index` is the position at render time and is what the
/// row's delete control targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Single placeholder row without controls
    Empty,
    Rows(Vec<Row>),
}

impl ListView {
    pub fn from_items(items: &ItemList) -> Self {
        if items.is_empty() {
            return ListView::Empty;
        }
        ListView::Rows(
            items
                .iter()
                .enumerate()
                .map(|(index, text)| Row {
                    index,
                    text: text.to_string(),
                })
                .collect(),
        )
    }

    /// The clear control is only usable when there is something to clear.
    pub fn clear_enabled(&self) -> bool {
        matches!(self, ListView::Rows(rows) if !rows.is_empty())
    }
}
