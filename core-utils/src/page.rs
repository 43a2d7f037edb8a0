//! Page-level enhancements run once at startup.

use bridge_traits::{Document, Scheduler};
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

const ALERT_SELECTOR: &str = ".alert";

/// Fade out every `.alert` banner after `delay`, removing it `fade` later.
///
/// Returns how many banners were scheduled.
pub fn auto_dismiss_alerts(
    document: &dyn Document,
    scheduler: &Rc<dyn Scheduler>,
    delay: Duration,
    fade: Duration,
) -> usize {
    let alerts = document.query_selector_all(ALERT_SELECTOR);
    let count = alerts.len();

    for alert in alerts {
        let fade_scheduler = Rc::clone(scheduler);
        scheduler.set_timeout(
            delay,
            Box::new(move || {
                alert.set_style("opacity", "0");
                fade_scheduler.set_timeout(fade, Box::new(move || alert.remove()));
            }),
        );
    }

    debug!(count, "Scheduled alert auto-dismiss");
    count
}
