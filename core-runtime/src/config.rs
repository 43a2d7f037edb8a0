//! # Utility Bundle Configuration
//!
//! Provides configuration management for the browser utility bundle.
//!
//! ## Overview
//!
//! Configuration has two halves:
//!
//! - [`UtilsSettings`]: plain, serializable tunables (timings, upload policy,
//!   colours, fallback text). Every field has a default, so hosts may pass a
//!   partial JSON object.
//! - [`UtilsConfig`]: the settings plus the host bridges, assembled through
//!   [`UtilsConfigBuilder`] with fail-fast validation.
//!
//! ## Required Dependencies
//!
//! - `Document` - DOM lookups and element creation
//! - `Scheduler` - timers for auto-hide, notifications and debounce
//! - `KeyValueStore` - durable JSON storage
//! - `Dialogs` - blocking alerts
//!
//! ## Optional Dependencies
//!
//! - `MediaDevices` - camera detection; without it the check reports `false`
//!   (browsers hide `navigator.mediaDevices` outside secure contexts)
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::{UtilsConfig, UtilsSettings};
//! use std::rc::Rc;
//!
//! let config = UtilsConfig::builder()
//!     .document(Rc::new(MyDocument))
//!     .scheduler(Rc::new(MyScheduler))
//!     .storage(Rc::new(MyStore))
//!     .dialogs(Rc::new(MyDialogs))
//!     .settings(UtilsSettings::default())
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{Dialogs, Document, KeyValueStore, MediaDevices, Scheduler};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::Duration;

/// Tunable behaviour of the utility bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UtilsSettings {
    /// Delay before `show_message` hides its target again.
    pub message_auto_hide_ms: u64,

    /// Default on-screen time of a toast notification.
    pub notification_duration_ms: u64,

    /// Length of the notification exit animation before removal.
    pub notification_exit_ms: u64,

    /// Delay before page `.alert` banners fade out.
    pub alert_auto_dismiss_ms: u64,

    /// Image upload limits and rejection texts.
    pub upload: UploadPolicy,

    /// Shown by `handle_api_error` when the error carries no message.
    pub fallback_error_message: String,

    /// Border colours applied by form validation.
    pub field_colors: FieldColors,

    /// Notification background colours.
    pub notification_palette: NotificationPalette,
}

impl Default for UtilsSettings {
    fn default() -> Self {
        Self {
            message_auto_hide_ms: 5000,
            notification_duration_ms: 3000,
            notification_exit_ms: 300,
            alert_auto_dismiss_ms: 5000,
            upload: UploadPolicy::default(),
            fallback_error_message: "Có lỗi xảy ra. Vui lòng thử lại!".to_string(),
            field_colors: FieldColors::default(),
            notification_palette: NotificationPalette::default(),
        }
    }
}

impl UtilsSettings {
    pub fn message_auto_hide(&self) -> Duration {
        Duration::from_millis(self.message_auto_hide_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    pub fn alert_auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_auto_dismiss_ms)
    }

    /// Validates the settings.
    ///
    /// This checks:
    /// - Auto-hide delay is non-zero (a zero delay hides messages before paint)
    /// - Upload limit is non-zero and at least one MIME type is allowed
    /// - Fallback error text is not empty
    pub fn validate(&self) -> Result<()> {
        if self.message_auto_hide_ms == 0 {
            return Err(Error::Config(
                "Message auto-hide delay must be greater than 0ms".to_string(),
            ));
        }

        if self.upload.max_bytes == 0 {
            return Err(Error::Config(
                "Upload size limit must be greater than 0 bytes".to_string(),
            ));
        }

        if self.upload.allowed_mime_types.is_empty() {
            return Err(Error::Config(
                "Upload policy must allow at least one MIME type".to_string(),
            ));
        }

        if self.fallback_error_message.trim().is_empty() {
            return Err(Error::Config(
                "Fallback error message cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Limits applied to image uploads before they are previewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadPolicy {
    /// Largest accepted file, in bytes.
    pub max_bytes: u64,
    /// Accepted MIME types, compared exactly.
    pub allowed_mime_types: Vec<String>,
    /// Alert text for files over `max_bytes`.
    pub oversize_message: String,
    /// Alert text for files outside `allowed_mime_types`.
    pub unsupported_type_message: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            allowed_mime_types: vec![
                "image/jpeg".to_string(),
                "image/jpg".to_string(),
                "image/png".to_string(),
            ],
            oversize_message: "File quá lớn! Vui lòng chọn file nhỏ hơn 5MB".to_string(),
            unsupported_type_message: "Chỉ chấp nhận file ảnh (JPG, JPEG, PNG)".to_string(),
        }
    }
}

impl UploadPolicy {
    pub fn is_oversized(&self, size: u64) -> bool {
        size > self.max_bytes
    }

    pub fn allows_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|allowed| allowed == mime_type)
    }
}

/// Border colours for required-field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldColors {
    pub invalid: String,
    pub valid: String,
}

impl Default for FieldColors {
    fn default() -> Self {
        Self {
            invalid: "#dc3545".to_string(),
            valid: "#e0e0e0".to_string(),
        }
    }
}

/// Background colours per notification kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationPalette {
    pub success: String,
    pub error: String,
    /// Used for `info` and any unrecognised kind.
    pub info: String,
}

impl Default for NotificationPalette {
    fn default() -> Self {
        Self {
            success: "#28a745".to_string(),
            error: "#dc3545".to_string(),
            info: "#667eea".to_string(),
        }
    }
}

/// Settings plus host bridges. Use [`UtilsConfigBuilder`] to construct.
#[derive(Clone)]
pub struct UtilsConfig {
    pub settings: UtilsSettings,

    /// Host document (required)
    pub document: Rc<dyn Document>,

    /// Event-loop scheduler (required)
    pub scheduler: Rc<dyn Scheduler>,

    /// Durable key-value store (required)
    pub storage: Rc<dyn KeyValueStore>,

    /// Blocking dialogs (required)
    pub dialogs: Rc<dyn Dialogs>,

    /// Media device enumeration (optional)
    pub media_devices: Option<Rc<dyn MediaDevices>>,
}

impl std::fmt::Debug for UtilsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UtilsConfig")
            .field("settings", &self.settings)
            .field("document", &"Document { ... }")
            .field("scheduler", &"Scheduler { ... }")
            .field("storage", &"KeyValueStore { ... }")
            .field("dialogs", &"Dialogs { ... }")
            .field(
                "media_devices",
                &self
                    .media_devices
                    .as_ref()
                    .map(|_| "MediaDevices { ... }"),
            )
            .finish()
    }
}

impl UtilsConfig {
    /// Creates a new builder for constructing a `UtilsConfig`.
    pub fn builder() -> UtilsConfigBuilder {
        UtilsConfigBuilder::default()
    }
}

fn capability_missing(capability: &str, message: &str) -> Error {
    Error::CapabilityMissing {
        capability: capability.to_string(),
        message: message.to_string(),
    }
}

/// Builder for [`UtilsConfig`].
///
/// Call [`build()`](UtilsConfigBuilder::build) once every required bridge is
/// set; it returns an actionable error naming the first one missing.
#[derive(Default)]
pub struct UtilsConfigBuilder {
    settings: Option<UtilsSettings>,
    document: Option<Rc<dyn Document>>,
    scheduler: Option<Rc<dyn Scheduler>>,
    storage: Option<Rc<dyn KeyValueStore>>,
    dialogs: Option<Rc<dyn Dialogs>>,
    media_devices: Option<Rc<dyn MediaDevices>>,
}

impl UtilsConfigBuilder {
    /// Overrides the default settings.
    pub fn settings(mut self, settings: UtilsSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn document(mut self, document: Rc<dyn Document>) -> Self {
        self.document = Some(document);
        self
    }

    pub fn scheduler(mut self, scheduler: Rc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn storage(mut self, storage: Rc<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn dialogs(mut self, dialogs: Rc<dyn Dialogs>) -> Self {
        self.dialogs = Some(dialogs);
        self
    }

    pub fn media_devices(mut self, media_devices: Rc<dyn MediaDevices>) -> Self {
        self.media_devices = Some(media_devices);
        self
    }

    /// Builds the final `UtilsConfig` instance.
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] when a required bridge was not provided
    /// - [`Error::Config`] when the settings fail validation
    pub fn build(self) -> Result<UtilsConfig> {
        let document = self.document.ok_or_else(|| {
            capability_missing(
                "Document",
                "Document implementation is required for DOM access. \
                 Web: use bridge_wasm::WasmDocument. Tests: use FakeDocument.",
            )
        })?;

        let scheduler = self.scheduler.ok_or_else(|| {
            capability_missing(
                "Scheduler",
                "Scheduler implementation is required for timers. \
                 Web: use bridge_wasm::WasmScheduler. Tests: use ManualScheduler.",
            )
        })?;

        let storage = self.storage.ok_or_else(|| {
            capability_missing(
                "KeyValueStore",
                "KeyValueStore implementation is required for persistent storage. \
                 Web: use bridge_wasm::WasmLocalStorage. Tests: use MemoryStore.",
            )
        })?;

        let dialogs = self.dialogs.ok_or_else(|| {
            capability_missing(
                "Dialogs",
                "Dialogs implementation is required for blocking alerts. \
                 Web: use bridge_wasm::WasmDialogs. Tests: use RecordingDialogs.",
            )
        })?;

        let settings = self.settings.unwrap_or_default();
        settings.validate()?;

        Ok(UtilsConfig {
            settings,
            document,
            scheduler,
            storage,
            dialogs,
            media_devices: self.media_devices,
        })
    }
}
