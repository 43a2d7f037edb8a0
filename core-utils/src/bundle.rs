//! The utility bundle.
//!
//! [`AppUtils`] owns a [`UtilsConfig`] and exposes every helper with the
//! configured bridges and settings already applied. It is cheap to clone;
//! clones share the bridges.

use bridge_traits::{Element, FileInput};
use core_runtime::{UtilsConfig, UtilsSettings};
use std::rc::Rc;
use std::time::Duration;
use tracing::info;

use crate::api_error::{self, ErrorMessage};
use crate::debounce::Debounced;
use crate::diagnostic::Reported;
use crate::error::Result;
use crate::notify::NotificationKind;
use crate::storage::JsonStorage;
use crate::{camera, datetime, loading, message, notify, page, preview, validation};

#[derive(Clone)]
pub struct AppUtils {
    config: UtilsConfig,
    storage: JsonStorage,
}

impl AppUtils {
    pub fn new(config: UtilsConfig) -> Self {
        let storage = JsonStorage::new(Rc::clone(&config.storage));
        info!(
            camera_detection = config.media_devices.is_some(),
            "Utility bundle ready"
        );
        Self { config, storage }
    }

    pub fn settings(&self) -> &UtilsSettings {
        &self.config.settings
    }

    pub fn config(&self) -> &UtilsConfig {
        &self.config
    }

    /// JSON storage over the configured key-value store.
    pub fn storage(&self) -> &JsonStorage {
        &self.storage
    }

    /// Show an inline message in `target` and hide it after the configured delay.
    pub fn show_message(&self, target: &Rc<dyn Element>, text: &str, kind: &str) {
        message::show_message(
            self.config.scheduler.as_ref(),
            target,
            text,
            kind,
            self.config.settings.message_auto_hide(),
        );
    }

    /// Show a toast. `duration` defaults to the configured notification time.
    pub fn notify(&self, text: &str, kind: &str, duration: Option<Duration>) -> Result<()> {
        notify::notify(
            self.config.document.as_ref(),
            &self.config.scheduler,
            &self.config.settings,
            text,
            &NotificationKind::parse(kind),
            duration.unwrap_or_else(|| self.config.settings.notification_duration()),
        )
    }

    pub fn show_loading(&self, button: &dyn Element) {
        loading::show_loading(button);
    }

    pub fn hide_loading(&self, button: &dyn Element) {
        loading::hide_loading(button);
    }

    /// `DD/MM/YYYY HH:MM` in local time.
    pub fn format_date_time(&self, input: &str) -> Result<String> {
        datetime::format_date_time(input)
    }

    /// Wire `input` to render image previews into `preview`.
    pub fn handle_image_preview(&self, input: Rc<dyn FileInput>, preview: Rc<dyn Element>) {
        preview::handle_image_preview(
            Rc::clone(&self.config.scheduler),
            Rc::clone(&self.config.dialogs),
            self.config.settings.upload.clone(),
            input,
            preview,
        );
    }

    /// Check the required fields of the form with id `form_id`.
    pub fn validate_form(&self, form_id: &str) -> bool {
        validation::validate_form(
            self.config.document.as_ref(),
            form_id,
            &self.config.settings.field_colors,
        )
    }

    pub async fn check_camera_availability(&self) -> Reported<bool> {
        camera::check_camera_availability(self.config.media_devices.as_deref()).await
    }

    /// Log and display `error`, inline in `target` when given.
    pub fn handle_api_error<E: ErrorMessage + ?Sized>(
        &self,
        error: &E,
        target: Option<&Rc<dyn Element>>,
    ) -> String {
        api_error::handle_api_error(
            error,
            target,
            self.config.scheduler.as_ref(),
            self.config.dialogs.as_ref(),
            &self.config.settings,
        )
    }

    /// Debounce `callback` on the configured scheduler.
    pub fn debounce<A: 'static>(
        &self,
        wait: Duration,
        callback: impl Fn(A) + 'static,
    ) -> Debounced<A> {
        Debounced::new(Rc::clone(&self.config.scheduler), wait, callback)
    }

    /// Add the notification keyframes to the document.
    pub fn install_animation_styles(&self) -> Result<()> {
        notify::install_animation_styles(self.config.document.as_ref())
    }

    /// Schedule fade-out for every `.alert` banner on the page.
    pub fn auto_dismiss_alerts(&self) -> usize {
        page::auto_dismiss_alerts(
            self.config.document.as_ref(),
            &self.config.scheduler,
            self.config.settings.alert_auto_dismiss(),
            self.config.settings.notification_exit(),
        )
    }
}

impl std::fmt::Debug for AppUtils {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppUtils")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
