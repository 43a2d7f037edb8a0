//! Inline status messages.

use bridge_traits::{Display, Element, Scheduler};
use std::rc::Rc;
use std::time::Duration;

/// Show `text` in `target` with class `message {kind}`, then hide it after
/// `auto_hide`.
///
/// A hide scheduled by an earlier call is not cancelled, so a message shown
/// shortly after another one disappears when the earlier timer fires.
pub fn show_message(
    scheduler: &dyn Scheduler,
    target: &Rc<dyn Element>,
    text: &str,
    kind: &str,
    auto_hide: Duration,
) {
    target.set_text(text);
    target.set_class_name(&format!("message {kind}"));
    target.set_display(Display::Block);

    let target = Rc::clone(target);
    scheduler.set_timeout(
        auto_hide,
        Box::new(move || target.set_display(Display::None)),
    );
}
