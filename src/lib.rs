//! Workspace umbrella crate.
//!
//! Host applications can depend on `app-utils-workspace` and enable the
//! documented features instead of wiring each crate individually:
//!
//! - default: the platform-neutral utility bundle (`core-utils`) and its
//!   runtime configuration (`core-runtime`)
//! - `wasm`: the browser bridges and JavaScript exports (`bridge-wasm`)

pub use core_runtime;
pub use core_utils;

#[cfg(feature = "wasm")]
pub use bridge_wasm;
