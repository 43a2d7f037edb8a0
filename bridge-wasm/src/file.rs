//! File input bridge backed by `HtmlInputElement` and `web_sys::File`.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bridge_traits::{
    error::Result as BridgeResult,
    file::{FileInput, PickedFile},
};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::JsFuture;

use crate::error::js_error;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// A file picked in the browser.
#[derive(Clone)]
pub struct WasmFile {
    file: web_sys::File,
}

impl WasmFile {
    /// Wrap a `web_sys::File`.
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }
}

#[async_trait(?Send)]
impl PickedFile for WasmFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn size(&self) -> u64 {
        self.file.size() as u64
    }

    fn mime_type(&self) -> String {
        self.file.type_()
    }

    async fn read_as_data_url(&self) -> BridgeResult<String> {
        let buffer = JsFuture::from(self.file.array_buffer())
            .await
            .map_err(|err| js_error("File.arrayBuffer", err))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

        let mime_type = self.file.type_();
        let mime_type = if mime_type.is_empty() {
            FALLBACK_MIME_TYPE
        } else {
            mime_type.as_str()
        };
        Ok(format!("data:{mime_type};base64,{}", BASE64.encode(bytes)))
    }
}

/// An `<input type="file">` element.
#[derive(Clone)]
pub struct WasmFileInput {
    input: web_sys::HtmlInputElement,
}

impl WasmFileInput {
    /// Wrap a file input element.
    pub fn new(input: web_sys::HtmlInputElement) -> Self {
        Self { input }
    }
}

impl FileInput for WasmFileInput {
    fn files(&self) -> Vec<Rc<dyn PickedFile>> {
        let Some(list) = self.input.files() else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .map(|file| Rc::new(WasmFile::new(file)) as Rc<dyn PickedFile>)
            .collect()
    }

    fn clear(&self) {
        self.input.set_value("");
    }

    /// The listener lives as long as the page.
    fn on_change(&self, handler: Box<dyn Fn()>) {
        let closure = Closure::<dyn Fn()>::new(move || handler());
        if let Err(err) = self
            .input
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(
                error = %js_error("addEventListener", err),
                "Failed to attach change listener"
            );
            return;
        }
        closure.forget();
    }
}
