//! Convenience helpers for wiring all wasm bridge implementations together.
//!
//! Host pages can use [`build_wasm_bridges`] to construct every browser bridge
//! in one call and [`WasmBridgeSet::into_config`] to turn them into a
//! validated [`UtilsConfig`] for `core_utils::AppUtils`.

use std::rc::Rc;

use bridge_traits::{
    dialog::Dialogs, dom::Document, error::Result as BridgeResult, media::MediaDevices,
    storage::KeyValueStore, timer::Scheduler,
};
use core_runtime::{UtilsConfig, UtilsSettings};
use tracing::{debug, info};

use crate::{
    dom::{WasmDialogs, WasmDocument},
    media::WasmMediaDevices,
    storage::WasmLocalStorage,
    timer::WasmScheduler,
};

/// Fully constructed wasm bridge objects ready for injection into the core.
#[derive(Clone)]
pub struct WasmBridgeSet {
    /// `window.document`.
    pub document: Rc<dyn Document>,
    /// `setTimeout`-based scheduler.
    pub scheduler: Rc<dyn Scheduler>,
    /// `window.localStorage`.
    pub storage: Rc<dyn KeyValueStore>,
    /// `window.alert`.
    pub dialogs: Rc<dyn Dialogs>,
    /// `navigator.mediaDevices`, absent outside secure contexts.
    pub media_devices: Option<Rc<dyn MediaDevices>>,
}

impl WasmBridgeSet {
    /// Combine the bridges with `settings` into a validated config.
    pub fn into_config(self, settings: UtilsSettings) -> core_runtime::Result<UtilsConfig> {
        let mut builder = UtilsConfig::builder()
            .settings(settings)
            .document(self.document)
            .scheduler(self.scheduler)
            .storage(self.storage)
            .dialogs(self.dialogs);
        if let Some(media_devices) = self.media_devices {
            builder = builder.media_devices(media_devices);
        }
        builder.build()
    }
}

/// Build the default browser bridge stack.
///
/// The document, storage and dialogs are required; media devices are
/// optional and simply left out when the browser hides them.
pub fn build_wasm_bridges() -> BridgeResult<WasmBridgeSet> {
    let document: Rc<dyn Document> = Rc::new(WasmDocument::new()?);
    let scheduler: Rc<dyn Scheduler> = Rc::new(WasmScheduler::new());
    let storage: Rc<dyn KeyValueStore> = Rc::new(WasmLocalStorage::new()?);
    let dialogs: Rc<dyn Dialogs> = Rc::new(WasmDialogs::new()?);

    let media_devices = match WasmMediaDevices::new() {
        Ok(media) => Some(Rc::new(media) as Rc<dyn MediaDevices>),
        Err(err) => {
            debug!(error = %err, "Media devices unavailable");
            None
        }
    };

    info!(
        media_devices = media_devices.is_some(),
        "Browser bridges initialized"
    );

    Ok(WasmBridgeSet {
        document,
        scheduler,
        storage,
        dialogs,
        media_devices,
    })
}
