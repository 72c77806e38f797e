//! A [`Revealer`] wired to a [`Scheduler`] and an observer.
//!
//! Exactly one task is pending while running: every tick advances, re-arms,
//! then notifies. Each armed task carries a generation number; stopping,
//! replacing or re-arming bumps it, so a task that slipped past cancellation
//! finds a newer generation and does nothing.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use crate::entry::{Entry, Markup};
use crate::error::Result;
use crate::revealer::{Phase, RevealEvent, Revealer, Visibility};
use crate::scheduler::{Scheduler, Task};
use crate::timing::Timing;

type Observer = Box<dyn FnMut(RevealEvent)>;

/// Entry list plus timing, ready to [`start`](Self::start).
#[derive(Debug, Clone)]
pub struct SequenceRevealer<T = Markup> {
    entries: Vec<Entry<T>>,
    timing: Timing,
}

impl<T: 'static> SequenceRevealer<T> {
    pub fn new(entries: Vec<Entry<T>>, timing: Timing) -> Self {
        Self { entries, timing }
    }

    /// Validate raw millisecond delays. Non-positive values fail with
    /// [`RevealError::InvalidConfiguration`](crate::RevealError::InvalidConfiguration).
    pub fn from_millis(entries: Vec<Entry<T>>, step_ms: i64, wrap_ms: i64) -> Result<Self> {
        Ok(Self::new(entries, Timing::from_millis(step_ms, wrap_ms)?))
    }

    /// Reveal entry 0 now and keep advancing on `scheduler` until stopped.
    ///
    /// `observer` receives the initial [`RevealKind::Start`](crate::RevealKind::Start)
    /// event synchronously, then one event per tick. With an empty entry list
    /// nothing is scheduled and the observer is never called.
    pub fn start<S, F>(self, scheduler: S, observer: F) -> RunningHandle<T, S>
    where
        S: Scheduler + 'static,
        F: FnMut(RevealEvent) + 'static,
    {
        let mut machine = Revealer::new(self.entries, self.timing);
        let first = machine.start();

        let shared = Rc::new(Shared {
            state: RefCell::new(State {
                machine,
                pending: None,
                generation: 0,
            }),
            scheduler,
            observer: RefCell::new(Box::new(observer)),
        });

        match first {
            Some(event) => {
                debug!(
                    entries = shared.state.borrow().machine.len(),
                    "scenario revealer started"
                );
                Shared::arm(&shared);
                shared.notify(event);
            }
            None => debug!("empty scenario list, revealer stays idle"),
        }

        RunningHandle { shared }
    }
}

struct State<T, H> {
    machine: Revealer<T>,
    pending: Option<H>,
    generation: u64,
}

struct Shared<T, S: Scheduler> {
    state: RefCell<State<T, S::Handle>>,
    scheduler: S,
    observer: RefCell<Observer>,
}

impl<T: 'static, S: Scheduler + 'static> Shared<T, S> {
    /// Replace any pending task with one for the machine's current delay.
    fn arm(this: &Rc<Self>) {
        let mut state = this.state.borrow_mut();
        if let Some(handle) = state.pending.take() {
            this.scheduler.cancel(handle);
        }
        state.generation += 1;
        let Some(delay) = state.machine.delay() else {
            return;
        };
        let generation = state.generation;
        let weak: Weak<Self> = Rc::downgrade(this);
        let task: Task = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                Shared::fire(&shared, generation);
            }
        });
        trace!(?delay, generation, "armed next reveal");
        state.pending = Some(this.scheduler.schedule(delay, task));
    }

    fn fire(this: &Rc<Self>, generation: u64) {
        let event = {
            let mut state = this.state.borrow_mut();
            if state.generation != generation {
                trace!(generation, current = state.generation, "stale reveal ignored");
                return;
            }
            state.pending = None;
            state.machine.advance()
        };
        if let Some(event) = event {
            Shared::arm(this);
            this.notify(event);
        }
    }

    /// Cancel the pending task and invalidate any task already in flight.
    fn disarm(&self, state: &mut State<T, S::Handle>) {
        state.generation += 1;
        if let Some(handle) = state.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn notify(&self, event: RevealEvent) {
        match self.observer.try_borrow_mut() {
            Ok(mut observer) => observer(event),
            Err(_) => warn!(index = event.index, "observer re-entered, reveal event dropped"),
        }
    }
}

/// Live revealer. Dropping it stops the sequence.
pub struct RunningHandle<T, S: Scheduler> {
    shared: Rc<Shared<T, S>>,
}

impl<T: 'static, S: Scheduler + 'static> RunningHandle<T, S> {
    /// Cancel the pending advance. Idempotent; the current index is kept.
    pub fn stop(&self) {
        let mut state = self.shared.state.borrow_mut();
        let was_running = state.machine.is_running();
        self.shared.disarm(&mut state);
        state.machine.halt();
        if was_running {
            debug!(index = ?state.machine.current(), "scenario revealer stopped");
        }
    }

    /// Swap in a new entry list and restart timing from index 0.
    /// An empty list leaves the revealer idle.
    pub fn replace(&self, entries: Vec<Entry<T>>) {
        let event = {
            let mut state = self.shared.state.borrow_mut();
            self.shared.disarm(&mut state);
            state.machine.replace(entries)
        };
        match event {
            Some(event) => {
                debug!("scenario list replaced, restarting from 0");
                Shared::arm(&self.shared);
                self.shared.notify(event);
            }
            None => debug!("scenario list replaced with an empty one, revealer idle"),
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.state.borrow().machine.is_running()
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.borrow().machine.phase()
    }

    pub fn current(&self) -> Option<usize> {
        self.shared.state.borrow().machine.current()
    }

    pub fn len(&self) -> usize {
        self.shared.state.borrow().machine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn timing(&self) -> Timing {
        self.shared.state.borrow().machine.timing()
    }

    pub fn revealed(&self) -> Range<usize> {
        self.shared.state.borrow().machine.revealed()
    }

    pub fn visibility(&self, index: usize) -> Visibility {
        self.shared.state.borrow().machine.visibility(index)
    }

    /// Read the entry list without cloning it.
    pub fn with_entries<R>(&self, f: impl FnOnce(&[Entry<T>]) -> R) -> R {
        f(self.shared.state.borrow().machine.entries())
    }
}

impl<T, S: Scheduler> Drop for RunningHandle<T, S> {
    fn drop(&mut self) {
        // Same as stop(), without the 'static bounds Drop cannot carry.
        if let Ok(mut state) = self.shared.state.try_borrow_mut() {
            state.generation += 1;
            if let Some(handle) = state.pending.take() {
                self.shared.scheduler.cancel(handle);
            }
            state.machine.halt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::revealer::RevealKind;
    use std::time::Duration;

    fn entries(n: usize) -> Vec<Entry<()>> {
        (0..n).map(|_| Entry::of((), ())).collect()
    }

    fn recorder() -> (Rc<RefCell<Vec<RevealEvent>>>, impl FnMut(RevealEvent) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |event| sink.borrow_mut().push(event))
    }

    #[test]
    fn start_reveals_first_entry_and_arms_one_timer() {
        let clock = ManualClock::new();
        let (log, observer) = recorder();
        let handle = SequenceRevealer::new(entries(3), Timing::default()).start(clock.clone(), observer);

        assert_eq!(handle.current(), Some(0));
        assert_eq!(clock.pending(), 1);
        assert_eq!(log.borrow()[0].kind, RevealKind::Start);
    }

    #[test]
    fn exactly_one_timer_pending_while_running() {
        let clock = ManualClock::new();
        let handle = SequenceRevealer::new(entries(4), Timing::from_millis(10, 30).unwrap())
            .start(clock.clone(), |_| {});
        for _ in 0..20 {
            clock.advance(Duration::from_millis(10));
            assert_eq!(clock.pending(), 1);
        }
        handle.stop();
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn from_millis_rejects_bad_delays() {
        assert!(SequenceRevealer::from_millis(entries(2), 0, 5000).is_err());
        assert!(SequenceRevealer::from_millis(entries(2), 2000, -1).is_err());
        assert!(SequenceRevealer::from_millis(entries(2), 2000, 5000).is_ok());
    }

    #[test]
    fn dropping_the_handle_cancels_the_timer() {
        let clock = ManualClock::new();
        let (log, observer) = recorder();
        let handle = SequenceRevealer::new(entries(2), Timing::default()).start(clock.clone(), observer);
        drop(handle);
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(60));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn observer_may_stop_the_revealer() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<RunningHandle<(), ManualClock>>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let handle = SequenceRevealer::new(entries(5), Timing::from_millis(100, 500).unwrap()).start(
            clock.clone(),
            move |event| {
                if event.index == 2 {
                    if let Some(handle) = inner.borrow().as_ref() {
                        handle.stop();
                    }
                }
            },
        );
        *slot.borrow_mut() = Some(handle);

        clock.advance(Duration::from_secs(10));
        let slot = slot.borrow();
        let handle = slot.as_ref().unwrap();
        assert_eq!(handle.current(), Some(2));
        assert!(!handle.is_running());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn observer_may_replace_the_entries() {
        let clock = ManualClock::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let slot: Rc<RefCell<Option<RunningHandle<(), ManualClock>>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let sink = Rc::clone(&seen);
        let handle = SequenceRevealer::new(entries(5), Timing::from_millis(100, 500).unwrap()).start(
            clock.clone(),
            move |event: RevealEvent| {
                sink.borrow_mut().push(event);
                if event.index == 2 && event.kind == RevealKind::Step {
                    if let Some(handle) = inner.borrow().as_ref() {
                        handle.replace(entries(2));
                    }
                }
            },
        );
        *slot.borrow_mut() = Some(handle);

        // Replaced at 200ms: the restart's Start event reaches nobody, since
        // the observer is still running.
        clock.advance(Duration::from_millis(250));
        {
            let slot = slot.borrow();
            let handle = slot.as_ref().unwrap();
            assert_eq!(handle.current(), Some(0));
            assert_eq!(handle.len(), 2);
            assert!(handle.is_running());
        }
        let indices: Vec<usize> = seen.borrow().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        // Timing restarted at the replace: next step 100ms later, over the new list.
        clock.advance(Duration::from_millis(50));
        assert_eq!(
            seen.borrow().last().copied(),
            Some(RevealEvent {
                index: 1,
                kind: RevealKind::Step
            })
        );
        assert_eq!(clock.pending(), 1);
    }
}
