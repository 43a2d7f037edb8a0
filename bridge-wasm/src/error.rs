//! Conversions from JavaScript exceptions to bridge errors

use bridge_traits::error::BridgeError;
use wasm_bindgen::{JsCast, JsValue};

/// Convert a thrown JavaScript value into a [`BridgeError`].
///
/// `QuotaExceededError` DOM exceptions map to
/// [`BridgeError::QuotaExceeded`]; everything else becomes
/// [`BridgeError::OperationFailed`] prefixed with `context`.
pub fn js_error(context: &str, err: JsValue) -> BridgeError {
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        let message = format!("{context}: {}", exception.message());
        return if exception.name() == "QuotaExceededError" {
            BridgeError::QuotaExceeded(message)
        } else {
            BridgeError::OperationFailed(format!("{message} ({})", exception.name()))
        };
    }

    let message = if err.is_string() {
        err.as_string().unwrap_or_default()
    } else if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        js_err.message().into()
    } else {
        format!("{err:?}")
    };
    BridgeError::OperationFailed(format!("{context}: {message}"))
}

/// Render any displayable error as a JavaScript string for thrown results.
pub(crate) fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
