//! Event-loop scheduler backed by `setTimeout`.

use bridge_traits::timer::{Scheduler, TimerId};
use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Running,
    Done,
}

struct Entry {
    // Dropping a `Timeout` cancels it.
    _timeout: Timeout,
    state: Rc<Cell<TimerState>>,
}

/// `setTimeout`/`clearTimeout` scheduler.
///
/// A `Timeout` must outlive its own callback, so finished entries are only
/// dropped on the next `set_timeout` or `clear_timeout` call.
#[derive(Default)]
pub struct WasmScheduler {
    next_id: Cell<u64>,
    timers: RefCell<HashMap<u64, Entry>>,
}

impl WasmScheduler {
    /// Create a scheduler with no pending timers.
    pub fn new() -> Self {
        Self::default()
    }

    fn purge_finished(&self) {
        self.timers
            .borrow_mut()
            .retain(|_, entry| entry.state.get() != TimerState::Done);
    }
}

fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for WasmScheduler {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        self.purge_finished();

        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let state = Rc::new(Cell::new(TimerState::Pending));
        let timer_state = Rc::clone(&state);
        let timeout = Timeout::new(delay_millis(delay), move || {
            timer_state.set(TimerState::Running);
            callback();
            timer_state.set(TimerState::Done);
        });

        self.timers.borrow_mut().insert(
            id,
            Entry {
                _timeout: timeout,
                state,
            },
        );
        TimerId(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        self.purge_finished();

        let mut timers = self.timers.borrow_mut();
        // A running callback may clear its own id; its entry goes on purge.
        if matches!(timers.get(&id.0), Some(entry) if entry.state.get() == TimerState::Pending) {
            timers.remove(&id.0);
        }
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
