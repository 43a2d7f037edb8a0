//! WebAssembly Bridge Implementations
//!
//! This crate provides browser implementations of the bridge traits defined in
//! `bridge-traits`, using `web-sys` and `wasm-bindgen`, and exports the utility
//! bundle to page scripts as the `AppUtils` JavaScript class.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It will not compile for native targets.
//!
//! # Implementations
//!
//! - `WasmDocument` / `WasmElement`: DOM access through `web_sys::Document`
//! - `WasmDialogs`: `window.alert`
//! - `WasmScheduler`: `setTimeout` via `gloo-timers`, futures via `spawn_local`
//! - `WasmLocalStorage`: `window.localStorage`
//! - `WasmFileInput` / `WasmFile`: `<input type="file">` and its `File`s
//! - `WasmMediaDevices`: `navigator.mediaDevices`
//!
//! # Examples
//!
//! ```javascript
//! import init, { AppUtils, initLogging, installPageEnhancements } from './bridge_wasm.js';
//!
//! await init();
//! initLogging('info');
//! installPageEnhancements();
//!
//! const utils = new AppUtils({ messageAutoHideMs: 4000 });
//! utils.notify('Saved', 'success');
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod dom;
pub mod error;
pub mod exports;
pub mod file;
pub mod media;
pub mod page;
pub mod storage;
pub mod timer;

// Re-export commonly used types
pub use bootstrap::{build_wasm_bridges, WasmBridgeSet};
pub use dom::{WasmDialogs, WasmDocument, WasmElement};
pub use error::js_error;
pub use exports::JsAppUtils;
pub use file::{WasmFile, WasmFileInput};
pub use media::WasmMediaDevices;
pub use storage::WasmLocalStorage;
pub use timer::WasmScheduler;
