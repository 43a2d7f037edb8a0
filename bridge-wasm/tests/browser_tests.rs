#![cfg(target_arch = "wasm32")]
//! Browser tests for the wasm bridges
//!
//! These run against a real DOM and `localStorage` through
//! `wasm-bindgen-test`.

use bridge_traits::dom::{Document, Element};
use bridge_traits::error::BridgeError;
use bridge_traits::timer::Scheduler;
use bridge_wasm::{
    js_error, JsAppUtils, WasmDocument, WasmElement, WasmLocalStorage, WasmScheduler,
};
use core_runtime::config::FieldColors;
use core_utils::validation::validate_form;
use core_utils::JsonStorage;
use gloo_timers::future::TimeoutFuture;
use serde_json::{json, Value};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> WasmDocument {
    WasmDocument::new().unwrap()
}

/// Attach `html` inside a fresh container and return the container.
fn mount(html: &str) -> web_sys::Element {
    let doc = document();
    let container = doc.document().create_element("div").unwrap();
    container.set_inner_html(html);
    doc.document().body().unwrap().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn test_element_text_class_and_display() {
    let container = mount(r#"<div id="msg-test"></div>"#);
    let element = document().element_by_id("msg-test").unwrap();

    element.set_text("Saved");
    element.set_class_name("message success");
    element.set_style("display", "block");

    let raw = container.query_selector("#msg-test").unwrap().unwrap();
    assert_eq!(raw.text_content().as_deref(), Some("Saved"));
    assert_eq!(raw.class_name(), "message success");
    let html = raw.dyn_into::<web_sys::HtmlElement>().unwrap();
    assert_eq!(html.style().get_property_value("display").unwrap(), "block");
    container.remove();
}

#[wasm_bindgen_test]
fn test_create_append_and_remove() {
    let doc = document();
    let toast = doc.create_element("div").unwrap();
    toast.set_class_name("notification wasm-test-toast");

    doc.append_to_body(toast.as_ref()).unwrap();
    assert_eq!(doc.query_selector_all(".wasm-test-toast").len(), 1);

    toast.remove();
    assert!(doc.query_selector_all(".wasm-test-toast").is_empty());
}

#[wasm_bindgen_test]
fn test_validate_form_against_real_inputs() {
    let container = mount(
        r#"<form id="wasm-form">
             <input id="wasm-name" required value="Lan">
             <textarea id="wasm-note" required>   </textarea>
             <input id="wasm-optional">
           </form>"#,
    );

    assert!(!validate_form(&document(), "wasm-form", &FieldColors::default()));

    let note = container.query_selector("#wasm-note").unwrap().unwrap();
    let note = note.dyn_into::<web_sys::HtmlElement>().unwrap();
    assert_eq!(
        note.style().get_property_value("border-color").unwrap(),
        "rgb(220, 53, 69)"
    );
    container.remove();
}

#[wasm_bindgen_test]
fn test_disabled_toggle() {
    let container = mount(r#"<button id="wasm-button">Go</button>"#);
    let button = WasmElement::new(container.query_selector("#wasm-button").unwrap().unwrap());

    button.set_disabled(true);
    assert!(button.element().has_attribute("disabled"));
    button.set_disabled(false);
    assert!(!button.element().has_attribute("disabled"));
    container.remove();
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let storage = JsonStorage::new(Rc::new(WasmLocalStorage::new().unwrap()));

    let _ = storage.set("wasm-test-key", &json!({"a": 1}));
    assert_eq!(
        storage.get::<Value>("wasm-test-key").into_value(),
        Some(json!({"a": 1}))
    );

    let _ = storage.remove("wasm-test-key");
    assert_eq!(storage.get::<Value>("wasm-test-key").into_value(), None);
}

#[wasm_bindgen_test]
async fn test_scheduler_fires_and_clears() {
    let scheduler = WasmScheduler::new();
    let fired = Rc::new(Cell::new(0));

    let counter = fired.clone();
    scheduler.set_timeout(
        Duration::from_millis(10),
        Box::new(move || counter.set(counter.get() + 1)),
    );
    let counter = fired.clone();
    let cancelled = scheduler.set_timeout(
        Duration::from_millis(10),
        Box::new(move || counter.set(counter.get() + 100)),
    );
    scheduler.clear_timeout(cancelled);

    TimeoutFuture::new(50).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
fn test_quota_exception_maps_to_quota_exceeded() {
    let exception =
        web_sys::DomException::new_with_message_and_name("storage full", "QuotaExceededError")
            .unwrap();

    let err = js_error("set_item", exception.into());
    assert!(matches!(err, BridgeError::QuotaExceeded(_)));
}

#[wasm_bindgen_test]
async fn test_debounce_returns_callable_function() {
    let utils = JsAppUtils::new(JsValue::UNDEFINED).unwrap();
    let record = js_sys::Function::new_with_args(
        "value",
        "globalThis.__debounceCalls = (globalThis.__debounceCalls || []).concat([value]);",
    );

    let debounced = utils.debounce(record, 20).unwrap();
    assert_eq!(debounced.js_typeof(), JsValue::from_str("function"));
    debounced.call1(&JsValue::NULL, &JsValue::from_str("a")).unwrap();
    debounced.call1(&JsValue::NULL, &JsValue::from_str("ab")).unwrap();

    TimeoutFuture::new(80).await;
    let calls = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("__debounceCalls"))
        .unwrap();
    let calls = js_sys::Array::from(&calls);
    assert_eq!(calls.length(), 1);
    assert_eq!(calls.get(0).as_string().as_deref(), Some("ab"));
}
