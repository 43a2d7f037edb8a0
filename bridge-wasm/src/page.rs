//! One-time page enhancements.

use bridge_traits::timer::Scheduler;
use core_runtime::UtilsSettings;
use core_utils::{notify::install_animation_styles, page::auto_dismiss_alerts};
use std::rc::Rc;
use tracing::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::WasmDocument;
use crate::error::to_js_error;
use crate::timer::WasmScheduler;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Run the page startup enhancements.
///
/// Call once the DOM is loaded: installs the notification keyframes, makes
/// in-page anchor links scroll smoothly and schedules `.alert` banners to fade
/// out.
#[wasm_bindgen(js_name = installPageEnhancements)]
pub fn install_page_enhancements() -> Result<(), JsValue> {
    let document = WasmDocument::new().map_err(to_js_error)?;
    let settings = UtilsSettings::default();

    install_animation_styles(&document).map_err(to_js_error)?;
    let anchors = install_smooth_scroll(document.document());

    // Pending alert timers hold the scheduler alive.
    let scheduler: Rc<dyn Scheduler> = Rc::new(WasmScheduler::new());
    let alerts = auto_dismiss_alerts(
        &document,
        &scheduler,
        settings.alert_auto_dismiss(),
        settings.notification_exit(),
    );

    info!(anchors, alerts, "App initialized");
    Ok(())
}

fn install_smooth_scroll(document: &web_sys::Document) -> usize {
    let Ok(anchors) = document.query_selector_all(ANCHOR_SELECTOR) else {
        return 0;
    };

    let mut installed = 0;
    for node in (0..anchors.length()).filter_map(|index| anchors.get(index)) {
        let Ok(anchor) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };

        let target_document = document.clone();
        let source = anchor.clone();
        let on_click = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector.
            if let Ok(Some(target)) = target_document.query_selector(&href) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });

        if anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            on_click.forget();
            installed += 1;
        }
    }
    installed
}
