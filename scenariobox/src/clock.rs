//! Virtual-time scheduler.
//!
//! [`ManualClock`] only moves when told to. Tasks fire in deadline order (ties
//! in scheduling order) and each one observes `now()` equal to its own
//! deadline, so timelines recorded against it are exact.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::scheduler::{Scheduler, Task};

/// Handle to a task scheduled on a [`ManualClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualTimer(u64);

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), Task>,
}

/// Cloneable handle to one shared virtual clock.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualClock")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks waiting to fire.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.borrow().queue.keys().next().map(|(at, _)| *at)
    }

    /// Move time forward by `by`, firing every task due on the way.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        self.advance_to(target)
    }

    /// Move time forward to `target` (never backwards). Tasks scheduled while
    /// advancing fire too if they fall due before `target`.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        while let Some(task) = self.pop_due(target) {
            // The borrow is released here; the task may schedule or cancel.
            task();
            fired += 1;
        }
        let mut state = self.state.borrow_mut();
        if target > state.now {
            state.now = target;
        }
        fired
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let key = *state.queue.keys().next()?;
        if key.0 > target {
            return None;
        }
        state.now = state.now.max(key.0);
        state.queue.remove(&key)
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, task: Task) -> ManualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now.saturating_add(delay);
        state.queue.insert((deadline, id), task);
        ManualTimer(id)
    }

    fn cancel(&self, handle: ManualTimer) {
        self.state
            .borrow_mut()
            .queue
            .retain(|(_, id), _| *id != handle.0);
    }
}
