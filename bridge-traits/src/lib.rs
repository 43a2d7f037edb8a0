//! # Host Bridge Traits
//!
//! Browser capability traits that each host must implement.
//!
//! ## Overview
//!
//! This crate defines the contract between the utility bundle (`core-utils`)
//! and the page it runs in. Each trait represents one capability the bundle
//! needs but that only the host can provide: the document tree, timers, the
//! durable key-value store, blocking dialogs, file inputs and media devices.
//!
//! ## Traits
//!
//! ### Document
//! - [`Document`](dom::Document) - Element lookup, creation and attachment
//! - [`Element`](dom::Element) - Text, class, inline style and child queries
//! - [`FileInput`](file::FileInput) / [`PickedFile`](file::PickedFile) - File selection and reading
//!
//! ### Storage
//! - [`KeyValueStore`](storage::KeyValueStore) - Durable string key-value store (`localStorage`)
//!
//! ### Platform Integration
//! - [`Scheduler`](timer::Scheduler) - `setTimeout`-style deferred work and local task spawning
//! - [`Dialogs`](dialog::Dialogs) - Blocking alert primitive
//! - [`MediaDevices`](media::MediaDevices) - Device enumeration
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Web      | `bridge-wasm`       | ✅ Done |
//! | Tests    | `bridge-traits` (`testing` feature) | ✅ Done |
//!
//! ## Threading
//!
//! Browser objects live on the page's single UI thread, so none of these traits
//! require `Send` or `Sync`. Implementations are shared through `Rc` and async
//! methods use `async_trait(?Send)`.
//!
//! ## Error Handling
//!
//! All fallible bridge calls return [`BridgeError`](error::BridgeError).
//! Implementations should convert host exceptions into it with enough context
//! to tell which call failed.

pub mod dialog;
pub mod dom;
pub mod error;
pub mod file;
pub mod media;
pub mod storage;
pub mod timer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::BridgeError;

// Re-export commonly used types
pub use dialog::Dialogs;
pub use dom::{Display, Document, Element};
pub use file::{FileInput, PickedFile};
pub use media::{MediaDeviceInfo, MediaDeviceKind, MediaDevices};
pub use storage::KeyValueStore;
pub use timer::{Scheduler, TimerId};
