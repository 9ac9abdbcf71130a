//! Browser Storage Adapter
//!
//! `window.localStorage` behind the core storage port.

use listado_core::KeyValueStorage;

/// Handle to the origin's localStorage, looked up on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn backend() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::backend()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::backend() else {
            log::warn!("localStorage unavailable, {:?} not saved", key);
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to write {:?}: {:?}", key, err);
        }
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = Self::backend() else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            log::warn!("failed to remove {:?}: {:?}", key, err);
        }
    }
}
