//! Listado Core
//!
//! Browser-independent logic for the listado list manager: the storage port,
//! the item list model and its JSON form, and the operations the page binds to.

mod codec;
mod config;
mod error;
mod list;
mod storage;
mod store;
mod view;

pub use codec::{decode, encode};
pub use config::ListadoConfig;
pub use error::{StoreError, StoreResult};
pub use list::{normalize_entry, ItemList};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{AddOutcome, ListStore};
pub use view::{ListView, Row};
