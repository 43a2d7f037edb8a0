//! Camera detection.

use bridge_traits::{BridgeError, MediaDevices};
use tracing::debug;

use crate::diagnostic::{Diagnostic, Reported};

/// Whether at least one video input is visible to the page.
///
/// Never fails: a missing device API or a failed enumeration yields a
/// degraded `false`.
pub async fn check_camera_availability(media: Option<&dyn MediaDevices>) -> Reported<bool> {
    let Some(media) = media else {
        let missing = BridgeError::NotAvailable("navigator.mediaDevices".to_string());
        return Reported::degraded(false, Diagnostic::report("camera.enumerate", &missing));
    };

    match media.enumerate_devices().await {
        Ok(devices) => {
            let cameras = devices.iter().filter(|device| device.is_video_input()).count();
            debug!(devices = devices.len(), cameras, "Enumerated media devices");
            Reported::ok(cameras > 0)
        }
        Err(e) => Reported::degraded(false, Diagnostic::report("camera.enumerate", &e)),
    }
}
