//! JSON values in the host key-value store.
//!
//! Values are stored as JSON text under the caller's key with no prefix, so
//! page scripts reading `localStorage` directly see the same data. Failures
//! never propagate: they are logged and returned as a degraded [`Reported`].

use bridge_traits::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use tracing::trace;

use crate::diagnostic::{Diagnostic, Reported};
use crate::error::{Result, UtilError};

#[derive(Clone)]
pub struct JsonStorage {
    store: Rc<dyn KeyValueStore>,
}

impl JsonStorage {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Serialize `value` and write it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Reported<()> {
        match self.try_set(key, value) {
            Ok(()) => {
                trace!(key, "Stored value");
                Reported::ok(())
            }
            Err(e) => Reported::degraded((), Diagnostic::report("storage.set", &e)),
        }
    }

    /// Read and parse the value under `key`.
    ///
    /// Missing keys and empty text are `None` without a diagnostic.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Reported<Option<T>> {
        match self.try_get(key) {
            Ok(value) => Reported::ok(value),
            Err(e) => Reported::degraded(None, Diagnostic::report("storage.get", &e)),
        }
    }

    /// Delete `key`.
    pub fn remove(&self, key: &str) -> Reported<()> {
        match self.store.remove_item(key) {
            Ok(()) => Reported::ok(()),
            Err(e) => Reported::degraded((), Diagnostic::report("storage.remove", &e)),
        }
    }

    fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.store.set_item(key, &text)?;
        Ok(())
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(text) = self.store.get_item(key)? else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(UtilError::from)
    }
}
