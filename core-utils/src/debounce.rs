//! Trailing-edge debounce.

use bridge_traits::{Scheduler, TimerId};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A debounced callback.
///
/// Each [`call`](Self::call) cancels the pending invocation and schedules a
/// new one `wait` later, so the callback runs once per burst with the
/// arguments of the last call. Clones share the same pending timer.
pub struct Debounced<A> {
    scheduler: Rc<dyn Scheduler>,
    callback: Rc<dyn Fn(A)>,
    wait: Duration,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
            callback: Rc::clone(&self.callback),
            wait: self.wait,
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        wait: Duration,
        callback: impl Fn(A) + 'static,
    ) -> Self {
        Self {
            scheduler,
            callback: Rc::new(callback),
            wait,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Restart the quiet period with `args`.
    pub fn call(&self, args: A) {
        if let Some(id) = self.pending.take() {
            self.scheduler.clear_timeout(id);
        }

        let callback = Rc::clone(&self.callback);
        let pending = Rc::clone(&self.pending);
        let id = self.scheduler.set_timeout(
            self.wait,
            Box::new(move || {
                pending.set(None);
                callback(args);
            }),
        );
        self.pending.set(Some(id));
    }

    /// Whether an invocation is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

/// Shorthand for [`Debounced::new`].
pub fn debounce<A: 'static>(
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    callback: impl Fn(A) + 'static,
) -> Debounced<A> {
    Debounced::new(scheduler, wait, callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::testing::ManualScheduler;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |query: String| sink.borrow_mut().push(query))
    }

    #[test]
    fn test_burst_invokes_once_with_last_args() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (calls, callback) = recorder();
        let search = debounce(scheduler.clone(), Duration::from_millis(200), callback);

        for query in ["h", "he", "hel", "hell", "hello"] {
            search.call(query.to_string());
            assert_eq!(scheduler.pending_timers(), 1);
            scheduler.advance(Duration::from_millis(40));
        }
        assert!(calls.borrow().is_empty());
        assert!(search.is_pending());

        scheduler.advance(Duration::from_millis(200));
        assert_eq!(*calls.borrow(), vec!["hello".to_string()]);
        assert!(!search.is_pending());
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_separate_bursts_invoke_separately() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (calls, callback) = recorder();
        let search = debounce(scheduler.clone(), Duration::from_millis(200), callback);

        search.call("first".to_string());
        scheduler.advance(Duration::from_millis(250));
        search.call("second".to_string());
        scheduler.advance(Duration::from_millis(250));

        assert_eq!(
            *calls.borrow(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_clones_share_pending_timer() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (calls, callback) = recorder();
        let search = debounce(scheduler.clone(), Duration::from_millis(100), callback);
        let other = search.clone();

        search.call("a".to_string());
        other.call("b".to_string());
        scheduler.advance(Duration::from_millis(100));

        assert_eq!(*calls.borrow(), vec!["b".to_string()]);
        assert_eq!(other.wait(), Duration::from_millis(100));
    }
}
