use std::time::Duration;

use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};
use scenariobox::{Scheduler, Task};

/// `setTimeout` on the page's window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    /// `None` when the browser refused the timer; the sequence then stalls on
    /// its current entry.
    type Handle = Option<TimeoutHandle>;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => Some(handle),
            Err(err) => {
                web_sys::console::warn_2(&"[scenario] failed to arm timer:".into(), &err);
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}
