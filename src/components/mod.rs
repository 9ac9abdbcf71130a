//! UI Components
//!
//! Row views mounted into the page's list container.

mod empty_row;
mod item_row;
mod list_rows;

pub use empty_row::EmptyRow;
pub use item_row::ItemRow;
pub use list_rows::ListRows;
