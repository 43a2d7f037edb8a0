//! Media device enumeration through `navigator.mediaDevices`.

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result as BridgeResult},
    media::{MediaDeviceInfo, MediaDeviceKind, MediaDevices},
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::js_error;

/// Browser media device enumeration.
#[derive(Clone)]
pub struct WasmMediaDevices {
    devices: web_sys::MediaDevices,
}

impl WasmMediaDevices {
    /// Bind to `navigator.mediaDevices`.
    ///
    /// Fails with [`BridgeError::NotAvailable`] outside secure contexts, where
    /// browsers leave the property undefined.
    pub fn new() -> BridgeResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| BridgeError::NotAvailable("window".into()))?;
        let navigator = window.navigator();
        let value = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("mediaDevices"))
            .map_err(|err| js_error("navigator.mediaDevices", err))?;
        if value.is_undefined() || value.is_null() {
            return Err(BridgeError::NotAvailable("navigator.mediaDevices".into()));
        }
        let devices = value
            .dyn_into::<web_sys::MediaDevices>()
            .map_err(|err| js_error("navigator.mediaDevices", err))?;
        Ok(Self { devices })
    }
}

fn convert_kind(kind: web_sys::MediaDeviceKind) -> Option<MediaDeviceKind> {
    match kind {
        web_sys::MediaDeviceKind::Audioinput => Some(MediaDeviceKind::AudioInput),
        web_sys::MediaDeviceKind::Audiooutput => Some(MediaDeviceKind::AudioOutput),
        web_sys::MediaDeviceKind::Videoinput => Some(MediaDeviceKind::VideoInput),
        _ => None,
    }
}

#[async_trait(?Send)]
impl MediaDevices for WasmMediaDevices {
    async fn enumerate_devices(&self) -> BridgeResult<Vec<MediaDeviceInfo>> {
        let promise = self
            .devices
            .enumerate_devices()
            .map_err(|err| js_error("enumerateDevices", err))?;
        let list = JsFuture::from(promise)
            .await
            .map_err(|err| js_error("enumerateDevices", err))?;

        let devices = js_sys::Array::from(&list)
            .iter()
            .filter_map(|entry| entry.dyn_into::<web_sys::MediaDeviceInfo>().ok())
            .filter_map(|info| {
                convert_kind(info.kind())
                    .map(|kind| MediaDeviceInfo::new(info.device_id(), kind, info.label()))
            })
            .collect();
        Ok(devices)
    }
}
