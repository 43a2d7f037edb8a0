//! API error display.
//!
//! Page scripts hand all kinds of failures to [`handle_api_error`]: plain
//! strings, parsed JSON error bodies, Rust errors. [`ErrorMessage`] pulls a
//! user-facing message out of each of them; anything without a usable message
//! falls back to the configured generic text.

use bridge_traits::{BridgeError, Dialogs, Element, Scheduler};
use core_runtime::UtilsSettings;
use std::rc::Rc;
use tracing::error;

use crate::error::UtilError;
use crate::message::show_message;

/// Extracts the message a user should see for an error value.
pub trait ErrorMessage {
    /// `None` when the value carries no message.
    fn error_message(&self) -> Option<String>;

    /// The full value as it should appear in logs.
    fn describe(&self) -> String {
        self.error_message().unwrap_or_default()
    }
}

impl ErrorMessage for str {
    fn error_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ErrorMessage for String {
    fn error_message(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: ErrorMessage + ?Sized> ErrorMessage for &T {
    fn error_message(&self) -> Option<String> {
        (**self).error_message()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ErrorMessage> ErrorMessage for Option<T> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().and_then(ErrorMessage::error_message)
    }

    fn describe(&self) -> String {
        self.as_ref()
            .map_or_else(|| "None".to_string(), ErrorMessage::describe)
    }
}

/// Only the `message` string field of a JSON object counts.
impl ErrorMessage for serde_json::Value {
    fn error_message(&self) -> Option<String> {
        self.get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ErrorMessage for dyn std::error::Error {
    fn error_message(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl ErrorMessage for dyn std::error::Error + Send + Sync {
    fn error_message(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl ErrorMessage for anyhow::Error {
    fn error_message(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn describe(&self) -> String {
        format!("{self:#}")
    }
}

impl ErrorMessage for UtilError {
    fn error_message(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl ErrorMessage for BridgeError {
    fn error_message(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Message for `error`, or the fallback when it has none or it is empty.
pub fn resolve_message<E: ErrorMessage + ?Sized>(error: &E, fallback: &str) -> String {
    error
        .error_message()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Log `error` and show its message.
///
/// With a `target` the message is shown inline as an `error` message;
/// otherwise it is alerted. Returns the text that was shown.
pub fn handle_api_error<E: ErrorMessage + ?Sized>(
    error: &E,
    target: Option<&Rc<dyn Element>>,
    scheduler: &dyn Scheduler,
    dialogs: &dyn Dialogs,
    settings: &UtilsSettings,
) -> String {
    let message = resolve_message(error, &settings.fallback_error_message);
    error!(
        error = %error.describe(),
        message = %message,
        inline = target.is_some(),
        "API Error"
    );

    match target {
        Some(target) => show_message(
            scheduler,
            target,
            &message,
            "error",
            settings.message_auto_hide(),
        ),
        None => dialogs.alert(&message),
    }

    message
}
