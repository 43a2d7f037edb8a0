//! Image upload preview.
//!
//! Wires a file input so that picking an image validates it against the
//! [`UploadPolicy`], then renders a thumbnail plus name and size into a
//! preview container. Rejected files trigger an alert and clear the input.

use bridge_traits::{Dialogs, Display, Element, FileInput, PickedFile, Scheduler};
use core_runtime::UploadPolicy;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// Why an upload was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    TooLarge { size: u64, max: u64 },
    UnsupportedType(String),
}

impl UploadRejection {
    /// Alert text shown to the user.
    pub fn user_message<'a>(&self, policy: &'a UploadPolicy) -> &'a str {
        match self {
            Self::TooLarge { .. } => &policy.oversize_message,
            Self::UnsupportedType(_) => &policy.unsupported_type_message,
        }
    }
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { size, max } => {
                write!(f, "file is {size} bytes, limit is {max} bytes")
            }
            Self::UnsupportedType(mime) if mime.is_empty() => f.write_str("unknown file type"),
            Self::UnsupportedType(mime) => write!(f, "file type {mime} is not accepted"),
        }
    }
}

/// Check size first, then type.
pub fn check_upload(
    file: &dyn PickedFile,
    policy: &UploadPolicy,
) -> std::result::Result<(), UploadRejection> {
    let size = file.size();
    if policy.is_oversized(size) {
        return Err(UploadRejection::TooLarge {
            size,
            max: policy.max_bytes,
        });
    }

    let mime_type = file.mime_type();
    if !policy.allows_type(&mime_type) {
        return Err(UploadRejection::UnsupportedType(mime_type));
    }

    Ok(())
}

/// Register the preview handler on `input`.
///
/// Only the first selected file is considered. Reading happens on the
/// scheduler's event loop; a failed read is logged and leaves the preview
/// untouched.
pub fn handle_image_preview(
    scheduler: Rc<dyn Scheduler>,
    dialogs: Rc<dyn Dialogs>,
    policy: UploadPolicy,
    input: Rc<dyn FileInput>,
    preview: Rc<dyn Element>,
) {
    let handler_input = Rc::clone(&input);
    input.on_change(Box::new(move || {
        let Some(file) = handler_input.first_file() else {
            return;
        };

        if let Err(rejection) = check_upload(file.as_ref(), &policy) {
            warn!(file = %file.name(), %rejection, "Rejected image upload");
            dialogs.alert(rejection.user_message(&policy));
            handler_input.clear();
            return;
        }

        let preview = Rc::clone(&preview);
        scheduler.spawn_local(Box::pin(async move {
            match file.read_as_data_url().await {
                Ok(data_url) => render_preview(preview.as_ref(), file.as_ref(), &data_url),
                Err(e) => error!(file = %file.name(), error = %e, "Failed to read image"),
            }
        }));
    }));
}

fn render_preview(preview: &dyn Element, file: &dyn PickedFile, data_url: &str) {
    let name = file.name();
    preview.set_inner_html(&format!(
        "<img src=\"{}\" alt=\"Preview\"><p>File: {} ({} KB)</p>",
        escape_html(data_url),
        escape_html(&name),
        format_kilobytes(file.size())
    ));
    preview.set_display(Display::Block);
    debug!(file = %name, "Rendered image preview");
}

/// Size in KiB with two decimals, halves rounded up.
pub fn format_kilobytes(bytes: u64) -> String {
    let hundredths = (u128::from(bytes) * 100 + 512) / 1024;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::testing::{
        FakeElement, FakeFile, FakeFileInput, ManualScheduler, RecordingDialogs,
    };
    use bridge_traits::BridgeError;

    struct Harness {
        scheduler: Rc<ManualScheduler>,
        dialogs: Rc<RecordingDialogs>,
        input: Rc<FakeFileInput>,
        preview: FakeElement,
    }

    fn picked(file: &Rc<FakeFile>) -> Rc<dyn PickedFile> {
        file.clone()
    }

    fn harness() -> Harness {
        let scheduler = Rc::new(ManualScheduler::new());
        let dialogs = Rc::new(RecordingDialogs::new());
        let input = Rc::new(FakeFileInput::new());
        let preview = FakeElement::new("div");

        handle_image_preview(
            scheduler.clone(),
            dialogs.clone(),
            UploadPolicy::default(),
            input.clone(),
            preview.handle(),
        );

        Harness {
            scheduler,
            dialogs,
            input,
            preview,
        }
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let h = harness();
        let file = Rc::new(FakeFile::new("big.jpg", 6 * 1024 * 1024, "image/jpeg"));

        h.input.select(vec![picked(&file)]);
        h.scheduler.run_until_stalled();

        assert_eq!(
            h.dialogs.alerts(),
            vec!["File quá lớn! Vui lòng chọn file nhỏ hơn 5MB".to_string()]
        );
        assert_eq!(h.input.clear_count(), 1);
        assert_eq!(file.reads(), 0);
        assert_eq!(h.preview.inner_html(), "");
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let h = harness();
        let file = Rc::new(FakeFile::new("anim.gif", 1024, "image/gif"));

        h.input.select(vec![picked(&file)]);

        assert_eq!(
            h.dialogs.alerts(),
            vec!["Chỉ chấp nhận file ảnh (JPG, JPEG, PNG)".to_string()]
        );
        assert_eq!(h.input.clear_count(), 1);
        assert_eq!(file.reads(), 0);
    }

    #[test]
    fn test_size_is_checked_before_type() {
        let file = FakeFile::new("huge.gif", 10 * 1024 * 1024, "image/gif");
        let rejection = check_upload(&file, &UploadPolicy::default()).unwrap_err();

        assert_eq!(
            rejection,
            UploadRejection::TooLarge {
                size: 10 * 1024 * 1024,
                max: 5 * 1024 * 1024
            }
        );
    }

    #[test]
    fn test_file_at_limit_is_accepted() {
        let file = FakeFile::new("edge.png", 5 * 1024 * 1024, "image/png");
        assert!(check_upload(&file, &UploadPolicy::default()).is_ok());
    }

    #[test]
    fn test_valid_image_renders_preview() {
        let h = harness();
        let file = Rc::new(FakeFile::new("cat.png", 2048, "image/png"));

        h.input.select(vec![picked(&file)]);
        h.scheduler.run_until_stalled();

        assert!(h.dialogs.alerts().is_empty());
        assert_eq!(file.reads(), 1);
        assert_eq!(
            h.preview.inner_html(),
            "<img src=\"data:image/png;base64,iVBORw0KGgo=\" alt=\"Preview\"><p>File: cat.png (2.00 KB)</p>"
        );
        assert_eq!(h.preview.style("display").as_deref(), Some("block"));
    }

    #[test]
    fn test_file_name_is_escaped() {
        let h = harness();
        let file = Rc::new(FakeFile::new("<script>x</script>.png", 512, "image/png"));

        h.input.select(vec![picked(&file)]);
        h.scheduler.run_until_stalled();

        let html = h.preview.inner_html();
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;.png (0.50 KB)"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_read_failure_leaves_preview_untouched() {
        let h = harness();
        let file = Rc::new(
            FakeFile::new("cat.jpg", 100, "image/jpeg")
                .failing(BridgeError::OperationFailed("FileReader aborted".into())),
        );

        h.input.select(vec![picked(&file)]);
        h.scheduler.run_until_stalled();

        assert_eq!(file.reads(), 1);
        assert_eq!(h.preview.inner_html(), "");
        assert_eq!(h.preview.style("display"), None);
        assert!(h.dialogs.alerts().is_empty());
    }

    #[test]
    fn test_empty_selection_does_nothing() {
        let h = harness();

        h.input.select(Vec::new());
        h.scheduler.run_until_stalled();

        assert!(h.dialogs.alerts().is_empty());
        assert_eq!(h.input.clear_count(), 0);
        assert_eq!(h.preview.inner_html(), "");
    }

    #[test]
    fn test_only_first_file_is_used() {
        let h = harness();
        let first = Rc::new(FakeFile::new("first.jpg", 1024, "image/jpeg"));
        let second = Rc::new(FakeFile::new("second.gif", 1024, "image/gif"));

        h.input.select(vec![picked(&first), picked(&second)]);
        h.scheduler.run_until_stalled();

        assert!(h.dialogs.alerts().is_empty());
        assert_eq!(first.reads(), 1);
        assert_eq!(second.reads(), 0);
        assert!(h.preview.inner_html().contains("first.jpg (1.00 KB)"));
    }

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_kilobytes(0), "0.00");
        assert_eq!(format_kilobytes(1536), "1.50");
        assert_eq!(format_kilobytes(5 * 1024 * 1024), "5120.00");
    }

    #[test]
    fn test_format_kilobytes_rounds_halves_up() {
        assert_eq!(format_kilobytes(128), "0.13");
        assert_eq!(format_kilobytes(640), "0.63");
        assert_eq!(format_kilobytes(1023), "1.00");
    }
}
