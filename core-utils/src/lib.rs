//! # Browser Page Utilities
//!
//! Small helpers for page scripts: transient messages, toast notifications,
//! button busy states, date formatting, image upload previews, required-field
//! validation, camera detection, API error display, debouncing and JSON
//! storage.
//!
//! ## Overview
//!
//! Every helper is written against the host bridges from `bridge-traits`, so
//! the same code drives the real page (through `bridge-wasm`) and in-memory
//! fakes in tests. [`AppUtils`] bundles the helpers with a
//! [`UtilsConfig`](core_runtime::UtilsConfig); the free functions in each
//! module are available for callers that manage bridges themselves.
//!
//! ## Failure model
//!
//! - Bad user input (oversized upload, empty required field) is reported to
//!   the user through an alert or inline styling.
//! - Host failures (storage quota, device enumeration, JSON parsing) are
//!   logged and returned as a degraded [`Reported`] value.
//! - Errors handed to [`handle_api_error`](api_error::handle_api_error) are
//!   always displayed and never re-raised.
//!
//! ## Usage
//!
//! ```ignore
//! use core_utils::AppUtils;
//!
//! let utils = AppUtils::new(config);
//! utils.storage().set("profile", &profile);
//! if !utils.validate_form("register-form") {
//!     utils.notify("Please fill in every field", "error", None)?;
//! }
//! ```

pub mod api_error;
pub mod bundle;
pub mod camera;
pub mod datetime;
pub mod debounce;
pub mod diagnostic;
pub mod error;
pub mod loading;
pub mod message;
pub mod notify;
pub mod page;
pub mod preview;
pub mod storage;
pub mod validation;

pub use api_error::ErrorMessage;
pub use bundle::AppUtils;
pub use debounce::Debounced;
pub use diagnostic::{Diagnostic, Reported};
pub use error::{Result, UtilError};
pub use notify::NotificationKind;
pub use preview::UploadRejection;
pub use storage::JsonStorage;
