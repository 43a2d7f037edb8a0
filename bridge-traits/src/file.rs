//! File Selection Abstractions
//!
//! A file input and the files a user picked through it. Reading is async
//! because hosts deliver file contents through the event loop.

use async_trait::async_trait;
use std::rc::Rc;

use crate::error::Result;

/// A file chosen through a file input.
#[async_trait(?Send)]
pub trait PickedFile {
    /// File name without path.
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// MIME type reported by the host, empty when unknown.
    fn mime_type(&self) -> String;

    /// Read the whole file as a `data:` URL.
    async fn read_as_data_url(&self) -> Result<String>;
}

/// An `<input type="file">` element.
pub trait FileInput {
    /// Currently selected files.
    fn files(&self) -> Vec<Rc<dyn PickedFile>>;

    /// Reset the selection (`input.value = ''`).
    fn clear(&self);

    /// Register `handler` for the input's `change` event.
    fn on_change(&self, handler: Box<dyn Fn()>);

    /// First selected file, if any.
    fn first_file(&self) -> Option<Rc<dyn PickedFile>> {
        self.files().into_iter().next()
    }
}
