//! Real-time playback on a tokio runtime.
//!
//! The async counterpart of [`SequenceRevealer`](crate::SequenceRevealer): the
//! revealer is owned by the future, one `sleep_until` stands in for the single
//! pending timer, and a `watch` channel is the stop signal. The stop branch is
//! polled first, so once stop is observed no further advance happens.

use std::ops::ControlFlow;

use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::revealer::{RevealEvent, RevealKind, Revealer};

/// Summary of a finished playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    /// Events delivered, including the initial start event.
    pub events: usize,
    /// Completed wrap-arounds.
    pub wraps: usize,
}

/// Drive `revealer` in real time until `stop` turns `true`, its sender is
/// dropped, or `on_event` returns [`ControlFlow::Break`].
///
/// The revealer is halted on return; its last index stays readable.
pub async fn play<T, F>(
    revealer: &mut Revealer<T>,
    mut stop: watch::Receiver<bool>,
    mut on_event: F,
) -> Playback
where
    F: FnMut(&Revealer<T>, RevealEvent) -> ControlFlow<()>,
{
    let mut summary = Playback { events: 0, wraps: 0 };

    // Deadlines chain off each other, so slow callbacks or late wakeups do
    // not push the schedule back.
    let mut deadline = Instant::now();
    let Some(first) = revealer.start() else {
        debug!("empty scenario list, nothing to play");
        return summary;
    };
    summary.events += 1;
    if on_event(revealer, first).is_break() {
        revealer.halt();
        return summary;
    }

    'outer: while let Some(delay) = revealer.delay() {
        if *stop.borrow_and_update() {
            break;
        }
        deadline += delay;
        let sleep = sleep_until(deadline);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                biased;
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow_and_update() {
                        break 'outer;
                    }
                }
                () = &mut sleep => break,
            }
        }

        let Some(event) = revealer.advance() else {
            break;
        };
        summary.events += 1;
        if event.kind == RevealKind::Wrap {
            summary.wraps += 1;
        }
        if on_event(revealer, event).is_break() {
            break;
        }
    }

    revealer.halt();
    debug!(events = summary.events, wraps = summary.wraps, "playback finished");
    summary
}
