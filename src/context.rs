//! Application Context
//!
//! The list store and view state, provided to components via the Leptos
//! Context API.

use leptos::prelude::*;
use listado_core::{AddOutcome, ListStore, ListadoConfig};
use reactive_stores::Store;

use crate::storage::BrowserStorage;
use crate::store::{ListadoState, ListadoStateStoreFields, ListadoStore};

#[derive(Clone, Copy)]
pub struct ListContext {
    /// Entries as of the last render
    pub state: ListadoStore,
    list: StoredValue<ListStore<BrowserStorage>>,
    config: StoredValue<ListadoConfig>,
}

impl ListContext {
    pub fn new(list: ListStore<BrowserStorage>, config: ListadoConfig) -> Self {
        let state = Store::new(ListadoState { items: list.load() });
        Self {
            state,
            list: StoredValue::new(list),
            config: StoredValue::new(config),
        }
    }

    /// Re-read storage and rebuild the rows from it.
    pub fn render(&self) {
        let items = self.list.with_value(|list| list.load());
        *self.state.items().write() = items;
    }

    pub fn add(&self, text: &str) -> AddOutcome {
        let outcome = self.list.with_value(|list| list.add(text));
        if let AddOutcome::Added { .. } = outcome {
            self.render();
        }
        outcome
    }

    pub fn remove_at(&self, index: usize) {
        self.list.with_value(|list| list.remove_at(index));
        self.render();
    }

    pub fn clear_all(&self) {
        self.list.with_value(|list| list.clear_all());
        self.render();
    }

    pub fn config<T>(&self, f: impl FnOnce(&ListadoConfig) -> T) -> T {
        self.config.with_value(f)
    }
}

pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}
