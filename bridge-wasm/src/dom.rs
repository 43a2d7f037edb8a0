//! DOM bridges backed by `web_sys::Document` and `web_sys::Element`.

use bridge_traits::{
    dialog::Dialogs,
    dom::{Document, Element},
    error::{BridgeError, Result as BridgeResult},
};
use std::any::Any;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsCast;

use crate::error::js_error;

fn window() -> BridgeResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| BridgeError::NotAvailable("window".into()))
}

fn collect_elements(list: web_sys::NodeList) -> Vec<Rc<dyn Element>> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|element| Rc::new(WasmElement::new(element)) as Rc<dyn Element>)
        .collect()
}

/// Browser element handle.
#[derive(Clone)]
pub struct WasmElement {
    element: web_sys::Element,
}

impl WasmElement {
    /// Wrap a `web_sys::Element`.
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// The wrapped element.
    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }

    /// Wrap `element` as a shared bridge element.
    pub fn handle(element: web_sys::Element) -> Rc<dyn Element> {
        Rc::new(Self::new(element))
    }

    fn style(&self) -> Option<web_sys::CssStyleDeclaration> {
        self.element
            .dyn_ref::<web_sys::HtmlElement>()
            .map(web_sys::HtmlElement::style)
    }
}

impl Element for WasmElement {
    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_class_name(&self, class_name: &str) {
        self.element.set_class_name(class_name);
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(style) = self.style() else {
            return;
        };
        if let Err(err) = style.set_property(property, value) {
            warn!(property, error = %js_error("set style", err), "Failed to set style");
        }
    }

    fn set_css_text(&self, css: &str) {
        if let Some(style) = self.style() {
            style.set_css_text(css);
        }
    }

    fn set_inner_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn set_disabled(&self, disabled: bool) {
        if let Err(err) = self
            .element
            .toggle_attribute_with_force("disabled", disabled)
        {
            warn!(error = %js_error("toggle disabled", err), "Failed to toggle disabled");
        }
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.element.dyn_ref::<web_sys::HtmlInputElement>() {
            Some(input.value())
        } else if let Some(area) = self.element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            Some(area.value())
        } else {
            self.element
                .dyn_ref::<web_sys::HtmlSelectElement>()
                .map(web_sys::HtmlSelectElement::value)
        }
    }

    fn query_selector(&self, selectors: &str) -> Option<Rc<dyn Element>> {
        match self.element.query_selector(selectors) {
            Ok(found) => found.map(Self::handle),
            Err(err) => {
                warn!(selectors, error = %js_error("querySelector", err), "Invalid selector");
                None
            }
        }
    }

    fn query_selector_all(&self, selectors: &str) -> Vec<Rc<dyn Element>> {
        match self.element.query_selector_all(selectors) {
            Ok(list) => collect_elements(list),
            Err(err) => {
                warn!(selectors, error = %js_error("querySelectorAll", err), "Invalid selector");
                Vec::new()
            }
        }
    }

    fn remove(&self) {
        self.element.remove();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Browser document bridge.
#[derive(Clone)]
pub struct WasmDocument {
    document: web_sys::Document,
}

impl WasmDocument {
    /// Bind to `window.document`.
    pub fn new() -> BridgeResult<Self> {
        let document = window()?
            .document()
            .ok_or_else(|| BridgeError::NotAvailable("document".into()))?;
        Ok(Self { document })
    }

    /// The wrapped document.
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn unwrap_element<'a>(element: &'a dyn Element) -> BridgeResult<&'a web_sys::Element> {
        element
            .as_any()
            .downcast_ref::<WasmElement>()
            .map(WasmElement::element)
            .ok_or_else(|| BridgeError::OperationFailed("element is not a WasmElement".into()))
    }
}

impl Document for WasmDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn Element>> {
        self.document.get_element_by_id(id).map(WasmElement::handle)
    }

    fn query_selector_all(&self, selectors: &str) -> Vec<Rc<dyn Element>> {
        match self.document.query_selector_all(selectors) {
            Ok(list) => collect_elements(list),
            Err(err) => {
                warn!(selectors, error = %js_error("querySelectorAll", err), "Invalid selector");
                Vec::new()
            }
        }
    }

    fn create_element(&self, tag: &str) -> BridgeResult<Rc<dyn Element>> {
        self.document
            .create_element(tag)
            .map(WasmElement::handle)
            .map_err(|err| js_error("createElement", err))
    }

    fn append_to_body(&self, element: &dyn Element) -> BridgeResult<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| BridgeError::NotAvailable("document.body".into()))?;
        body.append_child(Self::unwrap_element(element)?)
            .map(|_| ())
            .map_err(|err| js_error("body.appendChild", err))
    }

    fn append_to_head(&self, element: &dyn Element) -> BridgeResult<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| BridgeError::NotAvailable("document.head".into()))?;
        head.append_child(Self::unwrap_element(element)?)
            .map(|_| ())
            .map_err(|err| js_error("head.appendChild", err))
    }
}

/// `window.alert` dialogs.
#[derive(Clone)]
pub struct WasmDialogs {
    window: web_sys::Window,
}

impl WasmDialogs {
    /// Bind to the global window.
    pub fn new() -> BridgeResult<Self> {
        Ok(Self { window: window()? })
    }
}

impl Dialogs for WasmDialogs {
    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!(error = %js_error("alert", err), "Alert was blocked");
        }
    }
}
