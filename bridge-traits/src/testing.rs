//! In-memory host fakes.
//!
//! Enabled with the `testing` feature so downstream crates can exercise their
//! logic natively without a browser. Every fake records what was done to it
//! and exposes plain accessors for assertions.

use async_trait::async_trait;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::dialog::Dialogs;
use crate::dom::{Document, Element};
use crate::error::{BridgeError, Result};
use crate::file::{FileInput, PickedFile};
use crate::media::{MediaDeviceInfo, MediaDevices};
use crate::storage::KeyValueStore;
use crate::timer::{Scheduler, TimerId};

// ============================================================================
// Document
// ============================================================================

#[derive(Default)]
struct ElementState {
    tag: String,
    text: String,
    class_name: String,
    styles: HashMap<String, String>,
    css_text: String,
    inner_html: String,
    disabled: bool,
    value: Option<String>,
    children: Vec<(String, FakeElement)>,
    attached: bool,
}

/// Shared-state element handle. Clones observe the same element.
#[derive(Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        let element = Self::default();
        element.state.borrow_mut().tag = tag.to_string();
        element
    }

    /// Builder form of [`set_value`](Self::set_value).
    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Register `child` as the match for `selector` in child queries.
    pub fn with_child(self, selector: &str, child: FakeElement) -> Self {
        self.add_child(selector, child);
        self
    }

    pub fn add_child(&self, selector: &str, child: FakeElement) {
        self.state
            .borrow_mut()
            .children
            .push((selector.to_string(), child));
    }

    pub fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = Some(value.to_string());
    }

    /// Wrap a clone of this handle as a bridge element.
    pub fn handle(&self) -> Rc<dyn Element> {
        Rc::new(self.clone())
    }

    pub fn tag(&self) -> String {
        self.state.borrow().tag.clone()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn class_name(&self) -> String {
        self.state.borrow().class_name.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn css_text(&self) -> String {
        self.state.borrow().css_text.clone()
    }

    pub fn inner_html(&self) -> String {
        self.state.borrow().inner_html.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }

    fn same_as(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Element for FakeElement {
    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }

    fn set_class_name(&self, class_name: &str) {
        self.state.borrow_mut().class_name = class_name.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn set_css_text(&self, css: &str) {
        let mut state = self.state.borrow_mut();
        state.css_text = css.to_string();
        state.styles.clear();
        for declaration in css.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                state
                    .styles
                    .insert(property.trim().to_string(), value.trim().to_string());
            }
        }
    }

    fn set_inner_html(&self, html: &str) {
        self.state.borrow_mut().inner_html = html.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn value(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    fn query_selector(&self, selectors: &str) -> Option<Rc<dyn Element>> {
        self.query_selector_all(selectors).into_iter().next()
    }

    fn query_selector_all(&self, selectors: &str) -> Vec<Rc<dyn Element>> {
        self.state
            .borrow()
            .children
            .iter()
            .filter(|(selector, _)| selector == selectors)
            .map(|(_, child)| child.handle())
            .collect()
    }

    fn remove(&self) {
        self.state.borrow_mut().attached = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Document with an id registry, a selector registry, `<head>` and `<body>`.
#[derive(Default)]
pub struct FakeDocument {
    by_id: RefCell<HashMap<String, FakeElement>>,
    by_selector: RefCell<Vec<(String, FakeElement)>>,
    body: RefCell<Vec<FakeElement>>,
    head: RefCell<Vec<FakeElement>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `element` reachable through `element_by_id(id)`.
    pub fn insert(&self, id: &str, element: FakeElement) {
        self.by_id.borrow_mut().insert(id.to_string(), element);
    }

    /// Make `element` a match for document-wide `selector` queries.
    pub fn register(&self, selector: &str, element: FakeElement) {
        element.state.borrow_mut().attached = true;
        self.by_selector
            .borrow_mut()
            .push((selector.to_string(), element));
    }

    /// Elements currently attached to `<body>`.
    pub fn body_children(&self) -> Vec<FakeElement> {
        self.body
            .borrow()
            .iter()
            .filter(|element| element.is_attached())
            .cloned()
            .collect()
    }

    /// Elements currently attached to `<head>`.
    pub fn head_children(&self) -> Vec<FakeElement> {
        self.head
            .borrow()
            .iter()
            .filter(|element| element.is_attached())
            .cloned()
            .collect()
    }

    fn attach(list: &RefCell<Vec<FakeElement>>, element: &dyn Element) -> Result<()> {
        let fake = element
            .as_any()
            .downcast_ref::<FakeElement>()
            .ok_or_else(|| BridgeError::OperationFailed("element from another document".into()))?;
        fake.state.borrow_mut().attached = true;
        let mut list = list.borrow_mut();
        if !list.iter().any(|existing| existing.same_as(fake)) {
            list.push(fake.clone());
        }
        Ok(())
    }
}

impl Document for FakeDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn Element>> {
        self.by_id.borrow().get(id).map(FakeElement::handle)
    }

    fn query_selector_all(&self, selectors: &str) -> Vec<Rc<dyn Element>> {
        self.by_selector
            .borrow()
            .iter()
            .filter(|(selector, element)| selector == selectors && element.is_attached())
            .map(|(_, element)| element.handle())
            .collect()
    }

    fn create_element(&self, tag: &str) -> Result<Rc<dyn Element>> {
        Ok(FakeElement::new(tag).handle())
    }

    fn append_to_body(&self, element: &dyn Element) -> Result<()> {
        Self::attach(&self.body, element)
    }

    fn append_to_head(&self, element: &dyn Element) -> Result<()> {
        Self::attach(&self.head, element)
    }
}

// ============================================================================
// Storage
// ============================================================================

/// `HashMap`-backed key-value store with an optional byte quota.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would push keys plus values over `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: RefCell::default(),
            quota_bytes: Some(bytes),
        }
    }

    /// Raw stored text, bypassing JSON handling.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Store raw text, bypassing JSON handling and the quota.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota_bytes {
            let used: usize = self
                .items
                .borrow()
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(BridgeError::QuotaExceeded(format!(
                    "writing {key} needs {} bytes, {} of {quota} in use",
                    key.len() + value.len(),
                    used
                )));
            }
        }
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// ============================================================================
// Scheduler
// ============================================================================

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Virtual-clock scheduler.
///
/// Time only moves through [`advance`](Self::advance); due timers fire in
/// deadline order (ties by creation order) and spawned futures are polled
/// on a `LocalPool` after every timer.
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<PendingTimer>>,
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
}

impl ManualScheduler {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            now: Cell::new(Duration::ZERO),
            next_id: Cell::new(1),
            timers: RefCell::default(),
            pool: RefCell::new(pool),
            spawner,
        }
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Move the clock forward by `by`, firing every timer that falls due,
    /// including timers scheduled by callbacks along the way.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let position = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.id))
                    .map(|(index, _)| index);
                position.map(|index| timers.remove(index))
            };
            let Some(timer) = next else {
                break;
            };
            self.now.set(timer.due);
            (timer.callback)();
            self.run_until_stalled();
        }
        self.now.set(target);
        self.run_until_stalled();
    }

    /// Poll spawned futures until none can make progress.
    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.timers.borrow_mut().push(PendingTimer {
            id,
            due: self.now.get() + delay,
            callback,
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.timers.borrow_mut().retain(|timer| timer.id != id);
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("ManualScheduler pool is alive for the scheduler's lifetime");
    }
}

// ============================================================================
// Files
// ============================================================================

/// Picked file with a canned read result and a read counter.
pub struct FakeFile {
    name: String,
    size: u64,
    mime_type: String,
    contents: Result<String>,
    reads: Cell<usize>,
}

impl FakeFile {
    pub fn new(name: &str, size: u64, mime_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
            contents: Ok(format!("data:{mime_type};base64,iVBORw0KGgo=")),
            reads: Cell::new(0),
        }
    }

    /// Make every read fail with `error`.
    pub fn failing(mut self, error: BridgeError) -> Self {
        self.contents = Err(error);
        self
    }

    /// How many times the file was read.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

#[async_trait(?Send)]
impl PickedFile for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    async fn read_as_data_url(&self) -> Result<String> {
        self.reads.set(self.reads.get() + 1);
        self.contents.clone()
    }
}

/// File input whose selection is driven by [`select`](Self::select).
#[derive(Default)]
pub struct FakeFileInput {
    files: RefCell<Vec<Rc<dyn PickedFile>>>,
    clears: Cell<usize>,
    handlers: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl FakeFileInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection and fire the change handlers.
    pub fn select(&self, files: Vec<Rc<dyn PickedFile>>) {
        *self.files.borrow_mut() = files;
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }

    /// How many times the input was reset.
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl FileInput for FakeFileInput {
    fn files(&self) -> Vec<Rc<dyn PickedFile>> {
        self.files.borrow().clone()
    }

    fn clear(&self) {
        self.files.borrow_mut().clear();
        self.clears.set(self.clears.get() + 1);
    }

    fn on_change(&self, handler: Box<dyn Fn()>) {
        self.handlers.borrow_mut().push(Rc::from(handler));
    }
}

// ============================================================================
// Dialogs and media
// ============================================================================

/// Records every alert instead of blocking.
#[derive(Default)]
pub struct RecordingDialogs {
    alerts: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Media devices returning a fixed enumeration result.
pub struct StaticMediaDevices {
    result: Result<Vec<MediaDeviceInfo>>,
    calls: Cell<usize>,
}

impl StaticMediaDevices {
    pub fn new(devices: Vec<MediaDeviceInfo>) -> Self {
        Self {
            result: Ok(devices),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: BridgeError) -> Self {
        Self {
            result: Err(error),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl MediaDevices for StaticMediaDevices {
    async fn enumerate_devices(&self) -> Result<Vec<MediaDeviceInfo>> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaDeviceKind;

    #[test]
    fn test_manual_scheduler_fires_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("late", 300), ("early", 100), ("middle", 200)] {
            let fired = fired.clone();
            scheduler.set_timeout(
                Duration::from_millis(delay),
                Box::new(move || fired.borrow_mut().push(label)),
            );
        }

        scheduler.advance(Duration::from_millis(150));
        assert_eq!(*fired.borrow(), vec!["early"]);

        scheduler.advance(Duration::from_millis(500));
        assert_eq!(*fired.borrow(), vec!["early", "middle", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(650));
    }

    #[test]
    fn test_manual_scheduler_runs_timers_scheduled_by_callbacks() {
        let scheduler = Rc::new(ManualScheduler::new());
        let fired = Rc::new(Cell::new(false));

        let inner_scheduler = scheduler.clone();
        let inner_fired = fired.clone();
        scheduler.set_timeout(
            Duration::from_millis(100),
            Box::new(move || {
                inner_scheduler.set_timeout(
                    Duration::from_millis(50),
                    Box::new(move || inner_fired.set(true)),
                );
            }),
        );

        scheduler.advance(Duration::from_millis(149));
        assert!(!fired.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
    }

    #[test]
    fn test_manual_scheduler_clear_timeout() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let id = scheduler.set_timeout(Duration::from_millis(10), Box::new(move || flag.set(true)));
        scheduler.clear_timeout(id);
        scheduler.advance(Duration::from_millis(20));

        assert!(!fired.get());
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_memory_store_quota() {
        let store = MemoryStore::with_quota(10);
        store.set_item("a", "1234").unwrap();

        let err = store.set_item("b", "123456789").unwrap_err();
        assert!(matches!(err, BridgeError::QuotaExceeded(_)));

        // Overwriting an existing key only counts the new value.
        store.set_item("a", "12345678").unwrap();
        assert_eq!(store.raw("a").as_deref(), Some("12345678"));
    }

    #[test]
    fn test_fake_document_body_tracks_removal() {
        let document = FakeDocument::new();
        let element = document.create_element("div").unwrap();

        document.append_to_body(element.as_ref()).unwrap();
        assert_eq!(document.body_children().len(), 1);

        element.remove();
        assert!(document.body_children().is_empty());
    }

    #[test]
    fn test_fake_element_css_text_populates_styles() {
        let element = FakeElement::new("div");
        element.set_css_text("position: fixed; top: 20px;\n  z-index: 10000;");

        assert_eq!(element.style("position").as_deref(), Some("fixed"));
        assert_eq!(element.style("z-index").as_deref(), Some("10000"));
    }

    #[tokio::test]
    async fn test_static_media_devices_counts_calls() {
        let media = StaticMediaDevices::new(vec![MediaDeviceInfo::new(
            "cam",
            MediaDeviceKind::VideoInput,
            "",
        )]);

        let devices = media.enumerate_devices().await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(media.calls(), 1);
    }
}
