//! The reveal state machine.
//!
//! ```text
//!             start (n > 0)
//!   Idle ─────────────────────► Revealing(0)
//!                                   │  step
//!                                   ▼
//!                               Revealing(1) ─ … ─► Revealing(n-1)
//!                                   ▲                    │
//!                                   └──── wrap ──────────┘
//!   any ── halt ──► Idle (last index kept)
//! ```
//!
//! [`Revealer`] holds no timer. Whoever drives it asks for [`Revealer::delay`],
//! waits that long, then calls [`Revealer::advance`].

use std::ops::Range;
use std::time::Duration;

use serde::Serialize;
use tracing::trace;

use crate::entry::{Entry, Markup};
use crate::timing::Timing;

/// Where the machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started, stopped, or nothing to reveal.
    Idle,
    /// Entry `i` is the most recently revealed one.
    Revealing(usize),
}

/// Why an index became current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealKind {
    /// First reveal after start or after the entry list was replaced.
    Start,
    /// `i -> i + 1`.
    Step,
    /// `n - 1 -> 0`; every entry but the first goes back to hidden.
    Wrap,
}

/// Notification sent to observers after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealEvent {
    pub index: usize,
    pub kind: RevealKind,
}

/// Visual state of a single entry relative to the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Not revealed yet in this pass.
    Hidden,
    /// The entry that owns the latest reveal transition.
    Entering,
    /// Revealed earlier in this pass.
    Settled,
}

impl Visibility {
    pub fn is_revealed(&self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

/// Visibility of entry `index` when `current` is the latest revealed index.
pub fn visibility(index: usize, current: Option<usize>) -> Visibility {
    match current {
        Some(current) if index < current => Visibility::Settled,
        Some(current) if index == current => Visibility::Entering,
        _ => Visibility::Hidden,
    }
}

/// Indices that are revealed: `0..=current`, clipped to `len`.
pub fn revealed_range(current: Option<usize>, len: usize) -> Range<usize> {
    match current {
        Some(current) => 0..(current + 1).min(len),
        None => 0..0,
    }
}

/// Pure reveal state machine over a fixed entry list.
#[derive(Debug, Clone)]
pub struct Revealer<T = Markup> {
    entries: Vec<Entry<T>>,
    timing: Timing,
    current: Option<usize>,
    running: bool,
}

impl<T> Revealer<T> {
    /// New machine in [`Phase::Idle`]. Nothing is revealed until [`start`](Self::start).
    pub fn new(entries: Vec<Entry<T>>, timing: Timing) -> Self {
        Self {
            entries,
            timing,
            current: None,
            running: false,
        }
    }

    /// Reveal entry 0. Returns `None` (and stays idle) for an empty list.
    /// Starting a running machine restarts it from 0.
    pub fn start(&mut self) -> Option<RevealEvent> {
        if self.entries.is_empty() {
            self.running = false;
            self.current = None;
            return None;
        }
        self.running = true;
        self.current = Some(0);
        Some(RevealEvent {
            index: 0,
            kind: RevealKind::Start,
        })
    }

    /// Move to the next index, wrapping after the last one.
    /// Returns `None` when idle.
    pub fn advance(&mut self) -> Option<RevealEvent> {
        if !self.running {
            return None;
        }
        let current = self.current?;
        let len = self.entries.len();
        let next = (current + 1) % len;
        let kind = if next == 0 {
            RevealKind::Wrap
        } else {
            RevealKind::Step
        };
        trace!(from = current, to = next, ?kind, "advance");
        self.current = Some(next);
        Some(RevealEvent { index: next, kind })
    }

    /// Swap the entry list and restart from index 0.
    /// An empty list leaves the machine idle with nothing revealed.
    pub fn replace(&mut self, entries: Vec<Entry<T>>) -> Option<RevealEvent> {
        self.entries = entries;
        self.start()
    }

    /// Stop advancing. The last reached index stays readable.
    pub fn halt(&mut self) {
        self.running = false;
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.current) {
            (true, Some(index)) => Phase::Revealing(index),
            _ => Phase::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Most recently revealed index, also after a halt.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// How long to wait before the next [`advance`](Self::advance).
    pub fn delay(&self) -> Option<Duration> {
        match self.phase() {
            Phase::Revealing(index) => Some(self.timing.delay_after(index, self.entries.len())),
            Phase::Idle => None,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn revealed(&self) -> Range<usize> {
        revealed_range(self.current, self.entries.len())
    }

    pub fn visibility(&self, index: usize) -> Visibility {
        visibility(index, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(n: usize) -> Revealer<()> {
        let entries = (0..n).map(|_| Entry::of((), ())).collect();
        Revealer::new(entries, Timing::from_millis(1000, 3000).unwrap())
    }

    #[test]
    fn idle_until_started() {
        let mut m = machine(3);
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.delay(), None);
        assert_eq!(m.advance(), None);
        assert_eq!(m.revealed(), 0..0);
    }

    #[test]
    fn walks_then_wraps() {
        let mut m = machine(3);
        assert_eq!(
            m.start(),
            Some(RevealEvent {
                index: 0,
                kind: RevealKind::Start
            })
        );
        assert_eq!(m.delay(), Some(Duration::from_millis(1000)));
        assert_eq!(m.advance().map(|e| e.kind), Some(RevealKind::Step));
        assert_eq!(m.advance().map(|e| (e.index, e.kind)), Some((2, RevealKind::Step)));
        assert_eq!(m.revealed(), 0..3);
        assert_eq!(m.delay(), Some(Duration::from_millis(3000)));
        assert_eq!(m.advance().map(|e| (e.index, e.kind)), Some((0, RevealKind::Wrap)));
        assert_eq!(m.revealed(), 0..1);
    }

    #[test]
    fn empty_list_never_runs() {
        let mut m = machine(0);
        assert_eq!(m.start(), None);
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.current(), None);
        assert_eq!(m.advance(), None);
    }

    #[test]
    fn single_entry_wraps_onto_itself() {
        let mut m = machine(1);
        m.start();
        assert_eq!(m.delay(), Some(Duration::from_millis(3000)));
        assert_eq!(m.advance().map(|e| (e.index, e.kind)), Some((0, RevealKind::Wrap)));
    }

    #[test]
    fn halt_keeps_last_index() {
        let mut m = machine(4);
        m.start();
        m.advance();
        m.halt();
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.current(), Some(1));
        assert_eq!(m.advance(), None);
        assert_eq!(m.delay(), None);
    }

    #[test]
    fn replace_restarts_from_zero() {
        let mut m = machine(4);
        m.start();
        m.advance();
        m.advance();
        let event = m.replace(vec![Entry::of((), ()), Entry::of((), ())]);
        assert_eq!(event.map(|e| (e.index, e.kind)), Some((0, RevealKind::Start)));
        assert_eq!(m.len(), 2);
        assert_eq!(m.phase(), Phase::Revealing(0));

        assert_eq!(m.replace(Vec::new()), None);
        assert_eq!(m.phase(), Phase::Idle);
        assert_eq!(m.current(), None);
    }

    #[test]
    fn visibility_projection() {
        assert_eq!(visibility(0, None), Visibility::Hidden);
        assert_eq!(visibility(0, Some(2)), Visibility::Settled);
        assert_eq!(visibility(2, Some(2)), Visibility::Entering);
        assert_eq!(visibility(3, Some(2)), Visibility::Hidden);
        assert!(Visibility::Entering.is_revealed());
        assert!(!Visibility::Hidden.is_revealed());
    }

    #[test]
    fn revealed_range_is_clipped() {
        assert_eq!(revealed_range(Some(1), 4), 0..2);
        assert_eq!(revealed_range(Some(9), 4), 0..4);
        assert_eq!(revealed_range(None, 4), 0..0);
    }
}
