//! `localStorage` implementation of the key-value store bridge.
//!
//! Keys are used exactly as given so values written here are visible to page
//! scripts that read `localStorage` directly.

use bridge_traits::{
    error::{BridgeError, Result as BridgeResult},
    storage::KeyValueStore,
};

use crate::error::js_error;

fn local_storage() -> BridgeResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| BridgeError::NotAvailable("window".into()))?;
    window
        .local_storage()
        .map_err(|err| js_error("localStorage", err))?
        .ok_or_else(|| BridgeError::NotAvailable("localStorage".into()))
}

#[derive(Clone)]
/// Browser-backed durable key-value store.
pub struct WasmLocalStorage {
    storage: web_sys::Storage,
}

impl WasmLocalStorage {
    /// Bind to `window.localStorage`.
    ///
    /// Fails when storage is disabled (private browsing, sandboxed frames).
    pub fn new() -> BridgeResult<Self> {
        Ok(Self {
            storage: local_storage()?,
        })
    }
}

impl KeyValueStore for WasmLocalStorage {
    fn get_item(&self, key: &str) -> BridgeResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| js_error("get_item", err))
    }

    fn set_item(&self, key: &str, value: &str) -> BridgeResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| js_error("set_item", err))
    }

    fn remove_item(&self, key: &str) -> BridgeResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|err| js_error("remove_item", err))
    }
}
