//! Media Device Enumeration
//!
//! Lists the capture and playback devices the host exposes. Labels may be
//! empty until the user grants a media permission.

use async_trait::async_trait;

use crate::error::Result;

/// Device category as reported by `MediaDeviceInfo.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaDeviceKind {
    AudioInput,
    AudioOutput,
    VideoInput,
}

/// One enumerated media device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDeviceInfo {
    pub device_id: String,
    pub kind: MediaDeviceKind,
    pub label: String,
}

impl MediaDeviceInfo {
    pub fn new(
        device_id: impl Into<String>,
        kind: MediaDeviceKind,
        label: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            kind,
            label: label.into(),
        }
    }

    /// Whether this device is a camera.
    pub fn is_video_input(&self) -> bool {
        self.kind == MediaDeviceKind::VideoInput
    }
}

/// Device enumeration trait (`navigator.mediaDevices`).
///
/// # Example
///
/// ```ignore
/// use bridge_traits::media::MediaDevices;
///
/// async fn camera_count(media: &dyn MediaDevices) -> Result<usize> {
///     let devices = media.enumerate_devices().await?;
///     Ok(devices.iter().filter(|d| d.is_video_input()).count())
/// }
/// ```
#[async_trait(?Send)]
pub trait MediaDevices {
    /// List every media device currently visible to the page.
    async fn enumerate_devices(&self) -> Result<Vec<MediaDeviceInfo>>;
}
