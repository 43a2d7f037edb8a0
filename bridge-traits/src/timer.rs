//! Deferred Work Abstraction
//!
//! The page runs on a single cooperative event loop. Timers and spawned
//! futures are the only way to defer work; both resume on that loop.

use futures::future::LocalBoxFuture;
use std::time::Duration;

/// Handle for a pending timeout, valid until it fires or is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Event-loop scheduler (`setTimeout`/`clearTimeout` plus local spawning).
///
/// # Example
///
/// ```ignore
/// use bridge_traits::timer::Scheduler;
/// use std::time::Duration;
///
/// fn later(scheduler: &dyn Scheduler) {
///     scheduler.set_timeout(Duration::from_millis(300), Box::new(|| {
///         tracing::info!("tick");
///     }));
/// }
/// ```
pub trait Scheduler {
    /// Run `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Cancel a pending timeout. Unknown or already fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);

    /// Drive `task` to completion on the event loop without blocking.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}
