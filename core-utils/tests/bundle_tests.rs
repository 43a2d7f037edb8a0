//! End-to-end checks of the utility bundle against in-memory bridges.

use bridge_traits::testing::{
    FakeDocument, FakeElement, FakeFile, FakeFileInput, ManualScheduler, MemoryStore,
    RecordingDialogs, StaticMediaDevices,
};
use bridge_traits::{BridgeError, FileInput, MediaDeviceInfo, MediaDeviceKind, PickedFile};
use core_runtime::{UtilsConfig, UtilsSettings};
use core_utils::AppUtils;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Page {
    utils: AppUtils,
    document: Rc<FakeDocument>,
    scheduler: Rc<ManualScheduler>,
    store: Rc<MemoryStore>,
    dialogs: Rc<RecordingDialogs>,
}

fn page_with(media: Option<StaticMediaDevices>) -> Page {
    let document = Rc::new(FakeDocument::new());
    let scheduler = Rc::new(ManualScheduler::new());
    let store = Rc::new(MemoryStore::new());
    let dialogs = Rc::new(RecordingDialogs::new());

    let mut builder = UtilsConfig::builder()
        .document(document.clone())
        .scheduler(scheduler.clone())
        .storage(store.clone())
        .dialogs(dialogs.clone())
        .settings(UtilsSettings::default());
    if let Some(media) = media {
        builder = builder.media_devices(Rc::new(media));
    }

    Page {
        utils: AppUtils::new(builder.build().unwrap()),
        document,
        scheduler,
        store,
        dialogs,
    }
}

fn page() -> Page {
    page_with(None)
}

#[test]
fn test_format_date_time() {
    let page = page();
    assert_eq!(
        page.utils.format_date_time("2024-03-05T09:07:00").unwrap(),
        "05/03/2024 09:07"
    );
}

#[test]
fn test_debounce_burst() {
    let page = page();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let save = page
        .utils
        .debounce(Duration::from_millis(200), move |n: u32| sink.borrow_mut().push(n));

    for n in 1..=5 {
        save.call(n);
        page.scheduler.advance(Duration::from_millis(30));
    }
    page.scheduler.advance(Duration::from_millis(200));

    assert_eq!(*calls.borrow(), vec![5]);
}

#[test]
fn test_storage_round_trip() {
    let page = page();
    let storage = page.utils.storage();

    let _ = storage.set("k", &json!({"a": 1}));
    assert_eq!(storage.get::<Value>("k").into_value(), Some(json!({"a": 1})));
    assert_eq!(storage.get::<Value>("missing").into_value(), None);

    let _ = storage.remove("k");
    assert_eq!(storage.get::<Value>("k").into_value(), None);
    assert!(page.store.is_empty());
}

#[test]
fn test_validate_form() {
    let page = page();
    let filled = FakeElement::new("input").with_value("an@example.com");
    let empty = FakeElement::new("input").with_value("");
    let form = FakeElement::new("form")
        .with_child("[required]", filled.clone())
        .with_child("[required]", empty.clone());
    page.document.insert("login", form);

    assert!(!page.utils.validate_form("login"));
    assert_eq!(empty.style("border-color").as_deref(), Some("#dc3545"));
    assert_eq!(filled.style("border-color").as_deref(), Some("#e0e0e0"));
}

#[tokio::test]
async fn test_camera_check_degrades_on_failure() {
    let page = page_with(Some(StaticMediaDevices::failing(
        BridgeError::OperationFailed("NotAllowedError".to_string()),
    )));

    let reported = page.utils.check_camera_availability().await;
    assert!(!reported.value());
    assert!(reported.is_degraded());
}

#[tokio::test]
async fn test_camera_check_finds_camera() {
    let page = page_with(Some(StaticMediaDevices::new(vec![MediaDeviceInfo::new(
        "cam",
        MediaDeviceKind::VideoInput,
        "",
    )])));

    assert!(*page.utils.check_camera_availability().await.value());
}

#[test]
fn test_oversized_upload() {
    let page = page();
    let input = Rc::new(FakeFileInput::new());
    let preview = FakeElement::new("div");
    let file = Rc::new(FakeFile::new("photo.jpg", 6 * 1024 * 1024, "image/jpeg"));

    let dyn_input: Rc<dyn FileInput> = input.clone();
    page.utils.handle_image_preview(dyn_input, preview.handle());
    let picked: Rc<dyn PickedFile> = file.clone();
    input.select(vec![picked]);
    page.scheduler.run_until_stalled();

    assert_eq!(page.dialogs.alerts().len(), 1);
    assert_eq!(input.clear_count(), 1);
    assert_eq!(file.reads(), 0);
    assert_eq!(preview.inner_html(), "");
}

#[test]
fn test_notification_uses_configured_duration() {
    let page = page();
    page.utils.notify("Saved", "success", None).unwrap();
    assert_eq!(page.document.body_children().len(), 1);

    page.scheduler.advance(Duration::from_millis(3000 + 300));
    assert!(page.document.body_children().is_empty());
}

#[test]
fn test_api_error_without_target_alerts() {
    let page = page();
    let shown = page
        .utils
        .handle_api_error(&json!({"message": "Không tìm thấy"}), None);

    assert_eq!(shown, "Không tìm thấy");
    assert_eq!(page.dialogs.alerts(), vec!["Không tìm thấy".to_string()]);
}

#[test]
fn test_loading_round_trip() {
    let page = page();
    let label = FakeElement::new("span");
    let spinner = FakeElement::new("span");
    let button = FakeElement::new("button")
        .with_child(".btn-text", label.clone())
        .with_child(".btn-loading", spinner.clone());

    page.utils.show_loading(&button);
    assert!(button.is_disabled());
    page.utils.hide_loading(&button);
    assert!(!button.is_disabled());
    assert_eq!(spinner.style("display").as_deref(), Some("none"));
}

#[test]
fn test_page_startup() {
    let page = page();
    let banner = FakeElement::new("div");
    page.document.register(".alert", banner.clone());

    page.utils.install_animation_styles().unwrap();
    assert_eq!(page.utils.auto_dismiss_alerts(), 1);
    assert_eq!(page.document.head_children().len(), 1);

    page.scheduler.advance(Duration::from_millis(5300));
    assert!(!banner.is_attached());
}
