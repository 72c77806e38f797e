//! One-shot timer abstraction.
//!
//! A [`SequenceRevealer`](crate::SequenceRevealer) never sleeps on its own. It
//! hands a [`Task`] to a [`Scheduler`] together with a delay, keeps the returned
//! handle, and cancels it when stopped or re-armed. The landing page plugs in
//! browser `setTimeout`, tests plug in [`ManualClock`](crate::ManualClock).

use std::time::Duration;

/// Deferred callback. Runs at most once, on the scheduler's thread.
pub type Task = Box<dyn FnOnce()>;

/// Single-threaded one-shot timer.
///
/// Implementations must never run a task synchronously from inside
/// [`schedule`](Self::schedule); the revealer arms its next timer while it
/// still holds its own state.
pub trait Scheduler {
    /// Token identifying a scheduled task.
    type Handle;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Drop a task that has not run yet. Cancelling a task that already ran
    /// must be harmless.
    fn cancel(&self, handle: Self::Handle);
}
