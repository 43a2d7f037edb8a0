//! Durable Key-Value Storage Abstraction
//!
//! Models the browser's `localStorage`: synchronous string keys and string
//! values that survive page reloads. There is no namespacing and no
//! transactional guarantee; concurrent writers (other tabs) are last-write-wins.

use crate::error::Result;

/// Durable string key-value store.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::KeyValueStore;
///
/// fn remember_theme(store: &dyn KeyValueStore) -> Result<()> {
///     store.set_item("theme", "\"dark\"")
/// }
/// ```
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous value.
    ///
    /// Hosts report a full store as [`BridgeError::QuotaExceeded`](crate::BridgeError::QuotaExceeded).
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}
