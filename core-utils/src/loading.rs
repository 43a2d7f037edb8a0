//! Button busy state.
//!
//! Buttons carry two children: a `.btn-text` label and a `.btn-loading`
//! spinner. Busy buttons show the spinner and are disabled.

use bridge_traits::{Display, Element};

const LABEL_SELECTOR: &str = ".btn-text";
const SPINNER_SELECTOR: &str = ".btn-loading";

/// Swap the label for the spinner and disable the button.
pub fn show_loading(button: &dyn Element) {
    set_busy(button, true);
}

/// Restore the label and enable the button.
pub fn hide_loading(button: &dyn Element) {
    set_busy(button, false);
}

fn set_busy(button: &dyn Element, busy: bool) {
    // Buttons without both children only toggle `disabled`.
    if let (Some(label), Some(spinner)) = (
        button.query_selector(LABEL_SELECTOR),
        button.query_selector(SPINNER_SELECTOR),
    ) {
        if busy {
            label.set_display(Display::None);
            spinner.set_display(Display::InlineFlex);
        } else {
            label.set_display(Display::Inline);
            spinner.set_display(Display::None);
        }
    }
    button.set_disabled(busy);
}
