//! View State Store
//!
//! Uses Leptos reactive_stores so the rows and the clear control follow the
//! list as last read from storage.

use listado_core::ItemList;
use reactive_stores::Store;

/// What the page currently shows
#[derive(Clone, Debug, Default, Store)]
pub struct ListadoState {
    /// Entries as of the last render
    pub items: ItemList,
}

pub type ListadoStore = Store<ListadoState>;
