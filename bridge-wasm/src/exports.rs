//! JavaScript bindings for the utility bundle
//!
//! Exposes `core_utils::AppUtils` to page scripts as the `AppUtils` class,
//! plus the `initLogging` entry point.

use bridge_traits::file::FileInput;
use core_runtime::logging::{init_logging, LogLevel, LoggingConfig};
use core_runtime::UtilsSettings;
use core_utils::{AppUtils, ErrorMessage};
use serde::Serialize;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::bootstrap::build_wasm_bridges;
use crate::dom::WasmElement;
use crate::error::to_js_error;
use crate::file::WasmFileInput;

/// Rendered by `formatDateTime` for unparseable input.
const INVALID_DATE_TIME: &str = "NaN/NaN/NaN NaN:NaN";

// =============================================================================
// Logging
// =============================================================================

/// Install the panic hook and route `tracing` events to the browser console.
///
/// # Example
///
/// ```javascript
/// initLogging('debug');
/// ```
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging_js(level: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = match level {
        Some(level) => level.parse::<LogLevel>().map_err(to_js_error)?,
        None => LogLevel::Info,
    };
    init_logging(LoggingConfig::default().with_level(level)).map_err(to_js_error)
}

// =============================================================================
// Error values
// =============================================================================

/// A thrown JavaScript value. Only its `message` property is shown.
struct JsErrorValue<'a>(&'a JsValue);

impl ErrorMessage for JsErrorValue<'_> {
    fn error_message(&self) -> Option<String> {
        if self.0.is_undefined() || self.0.is_null() {
            return None;
        }
        js_sys::Reflect::get(self.0, &JsValue::from_str("message"))
            .ok()
            .and_then(|message| message.as_string())
    }

    fn describe(&self) -> String {
        format!("{:?}", self.0)
    }
}

// =============================================================================
// AppUtils
// =============================================================================

/// JavaScript-accessible utility bundle
///
/// # Example
///
/// ```javascript
/// const utils = new AppUtils();
///
/// utils.showLoading(submitButton);
/// try {
///   await save();
///   utils.notify('Đã lưu', 'success');
/// } catch (err) {
///   utils.handleApiError(err, messageBox);
/// } finally {
///   utils.hideLoading(submitButton);
/// }
/// ```
#[wasm_bindgen(js_name = AppUtils)]
pub struct JsAppUtils {
    inner: AppUtils,
}

#[wasm_bindgen(js_class = AppUtils)]
impl JsAppUtils {
    /// Create the bundle over the browser bridges.
    ///
    /// `settings` is an optional, possibly partial, settings object using
    /// camelCase keys (`messageAutoHideMs`, `upload.maxBytes`, ...).
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<JsAppUtils, JsValue> {
        let settings: UtilsSettings = if settings.is_undefined() || settings.is_null() {
            UtilsSettings::default()
        } else {
            serde_wasm_bindgen::from_value(settings).map_err(to_js_error)?
        };

        let config = build_wasm_bridges()
            .map_err(to_js_error)?
            .into_config(settings)
            .map_err(to_js_error)?;

        Ok(Self {
            inner: AppUtils::new(config),
        })
    }

    /// Show `message` in `element` with class `message {kind}`.
    #[wasm_bindgen(js_name = showMessage)]
    pub fn show_message(&self, element: web_sys::Element, message: &str, kind: &str) {
        self.inner
            .show_message(&WasmElement::handle(element), message, kind);
    }

    /// Put `button` in its busy state.
    #[wasm_bindgen(js_name = showLoading)]
    pub fn show_loading(&self, button: web_sys::Element) {
        self.inner.show_loading(&WasmElement::new(button));
    }

    /// Restore `button` from its busy state.
    #[wasm_bindgen(js_name = hideLoading)]
    pub fn hide_loading(&self, button: web_sys::Element) {
        self.inner.hide_loading(&WasmElement::new(button));
    }

    /// Render `input` as `DD/MM/YYYY HH:MM` in local time.
    #[wasm_bindgen(js_name = formatDateTime)]
    pub fn format_date_time(&self, input: &str) -> String {
        self.inner.format_date_time(input).unwrap_or_else(|err| {
            debug!(error = %err, "Unparseable date");
            INVALID_DATE_TIME.to_string()
        })
    }

    /// Preview images picked through `input` inside `preview`.
    #[wasm_bindgen(js_name = handleImagePreview)]
    pub fn handle_image_preview(
        &self,
        input: web_sys::HtmlInputElement,
        preview: web_sys::Element,
    ) {
        let input: Rc<dyn FileInput> = Rc::new(WasmFileInput::new(input));
        self.inner
            .handle_image_preview(input, WasmElement::handle(preview));
    }

    /// Check the required fields of the form with id `form_id`.
    #[wasm_bindgen(js_name = validateForm)]
    pub fn validate_form(&self, form_id: &str) -> bool {
        self.inner.validate_form(form_id)
    }

    /// Resolve to whether a camera is present. Never rejects.
    #[wasm_bindgen(js_name = checkCameraAvailability)]
    pub fn check_camera_availability(&self) -> js_sys::Promise {
        let inner = self.inner.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            let available = inner.check_camera_availability().await.into_value();
            Ok(JsValue::from_bool(available))
        })
    }

    /// Log `error` and show its `message` (or the fallback text), inline in
    /// `element` when given, otherwise in an alert. Returns the shown text.
    #[wasm_bindgen(js_name = handleApiError)]
    pub fn handle_api_error(&self, error: JsValue, element: Option<web_sys::Element>) -> String {
        let target = element.map(WasmElement::handle);
        self.inner
            .handle_api_error(&JsErrorValue(&error), target.as_ref())
    }

    /// Debounce `func` by `wait` milliseconds.
    ///
    /// Returns a plain function; each call restarts the quiet period and the
    /// latest arguments are passed to `func` once it elapses.
    ///
    /// ```javascript
    /// input.addEventListener('input', utils.debounce(runSearch, 300));
    /// ```
    pub fn debounce(
        &self,
        func: js_sys::Function,
        wait: u32,
    ) -> Result<js_sys::Function, JsValue> {
        let debounced = self
            .inner
            .debounce(Duration::from_millis(u64::from(wait)), move |args: js_sys::Array| {
                if let Err(err) = func.apply(&JsValue::NULL, &args) {
                    error!(error = ?err, "Debounced function threw");
                }
            });

        let forward = Closure::<dyn Fn(js_sys::Array)>::new(move |args: js_sys::Array| {
            debounced.call(args)
        })
        .into_js_value();

        js_sys::Function::new_with_args("f", "return (...args) => f(args);")
            .call1(&JsValue::NULL, &forward)?
            .dyn_into::<js_sys::Function>()
    }

    /// Store `value` as JSON under `key`. Failures are logged.
    #[wasm_bindgen(js_name = storageSet)]
    pub fn storage_set(&self, key: &str, value: JsValue) {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(value) {
            Ok(value) => {
                let _ = self.inner.storage().set(key, &value);
            }
            Err(err) => error!(key, error = %err, "Value is not JSON-serializable"),
        }
    }

    /// Read the JSON value under `key`; `null` when absent or unreadable.
    #[wasm_bindgen(js_name = storageGet)]
    pub fn storage_get(&self, key: &str) -> JsValue {
        let Some(value) = self
            .inner
            .storage()
            .get::<serde_json::Value>(key)
            .into_value()
        else {
            return JsValue::NULL;
        };

        value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .unwrap_or_else(|err| {
                error!(key, error = %err, "Failed to convert stored value");
                JsValue::NULL
            })
    }

    /// Delete `key`. Failures are logged.
    #[wasm_bindgen(js_name = storageRemove)]
    pub fn storage_remove(&self, key: &str) {
        let _ = self.inner.storage().remove(key);
    }

    /// Show a toast. `kind` defaults to `info`, `duration` to the configured
    /// notification time in milliseconds.
    pub fn notify(
        &self,
        message: &str,
        kind: Option<String>,
        duration: Option<u32>,
    ) -> Result<(), JsValue> {
        self.inner
            .notify(
                message,
                kind.as_deref().unwrap_or("info"),
                duration.map(|ms| Duration::from_millis(u64::from(ms))),
            )
            .map_err(to_js_error)
    }
}
