//! # scenariobox
//!
//! **Timed scenario revealer** - reveals an ordered list of scenario entries one
//! at a time on a timer, keeps the full list on screen for a longer pause, then
//! wraps back to the first entry and plays again.
//!
//! The HelmInspect landing page uses it twice ("Why" and "How" sections) to
//! replay small terminal stories. The crate keeps the timing logic free of any
//! rendering concern so it can be driven by browser timers, a tokio runtime, or
//! a virtual clock in tests.
//!
//! ## Layers
//!
//! - [`Revealer`] - the pure state machine (`Idle` / `Revealing(i)`)
//! - [`Scheduler`] - the injectable one-shot timer primitive
//! - [`SequenceRevealer`] / [`RunningHandle`] - a revealer wired to a scheduler
//!   and an observer callback
//! - [`ManualClock`] - a virtual-time scheduler
//! - [`Deck`] - scenario lists loaded from TOML/JSON, plus built-in decks
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use scenariobox::{Entry, ManualClock, SequenceRevealer, Timing};
//!
//! let entries = vec![
//!     Entry::new("helm install", "Installation succeeded."),
//!     Entry::new("kubectl edit cm", "Manually patching the ConfigMap."),
//! ];
//! let timing = Timing::from_millis(1000, 3000).unwrap();
//!
//! let clock = ManualClock::new();
//! let handle = SequenceRevealer::new(entries, timing)
//!     .start(clock.clone(), |event| println!("revealed {}", event.index));
//!
//! clock.advance(Duration::from_millis(1000));
//! assert_eq!(handle.current(), Some(1));
//!
//! handle.stop();
//! clock.advance(Duration::from_secs(60));
//! assert_eq!(handle.current(), Some(1));
//! ```
//!
//! ---
//!
//! Developed by the Qreater team (c)2025

pub mod clock;
pub mod deck;
pub mod entry;
pub mod error;
pub mod revealer;
pub mod scheduler;
pub mod sequence;
pub mod timeline;
pub mod timing;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod output;
#[cfg(feature = "cli")]
pub mod playback;

pub use clock::{ManualClock, ManualTimer};
pub use deck::Deck;
pub use entry::{Entry, Markup, Segment, Tone};
pub use error::{Result, RevealError};
pub use revealer::{Phase, RevealEvent, RevealKind, Revealer, Visibility, revealed_range, visibility};
pub use scheduler::{Scheduler, Task};
pub use sequence::{RunningHandle, SequenceRevealer};
pub use timeline::{Frame, timeline};
pub use timing::{DEFAULT_STEP_DELAY, DEFAULT_WRAP_DELAY, Timing};
