//! Deterministic reveal timeline.
//!
//! Runs a real [`SequenceRevealer`] on a [`ManualClock`] and records when each
//! reveal happens, so the schedule a deck will follow can be printed or
//! asserted without waiting for it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use crate::clock::ManualClock;
use crate::entry::Entry;
use crate::revealer::{RevealKind, revealed_range};
use crate::sequence::SequenceRevealer;
use crate::timing::Timing;

/// One reveal event at a point in virtual time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub at_ms: u64,
    pub index: usize,
    pub kind: RevealKind,
    /// Number of entries visible after this event (`index + 1`).
    pub revealed: usize,
}

/// Reveal events for a list of `len` entries from `t = 0` up to and including
/// `horizon`. Empty for `len == 0`.
pub fn timeline(len: usize, timing: Timing, horizon: Duration) -> Vec<Frame> {
    let clock = ManualClock::new();
    let frames = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&frames);
    let now = clock.clone();
    let entries = (0..len).map(|_| Entry::of((), ())).collect();
    let handle = SequenceRevealer::new(entries, timing).start(clock.clone(), move |event| {
        sink.borrow_mut().push(Frame {
            at_ms: u64::try_from(now.now().as_millis()).unwrap_or(u64::MAX),
            index: event.index,
            kind: event.kind,
            revealed: revealed_range(Some(event.index), len).len(),
        });
    });

    clock.advance(horizon);
    handle.stop();

    frames.borrow().clone()
}
