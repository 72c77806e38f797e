//! Step and wrap delays.

use std::time::Duration;

use crate::error::{Result, RevealError};

/// Pause between two reveals inside one pass.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(2000);

/// Pause after the last reveal before the cycle restarts.
pub const DEFAULT_WRAP_DELAY: Duration = Duration::from_millis(5000);

/// Validated pair of delays. Both are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    step: Duration,
    wrap: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP_DELAY,
            wrap: DEFAULT_WRAP_DELAY,
        }
    }
}

impl Timing {
    pub fn new(step: Duration, wrap: Duration) -> Result<Self> {
        if step.is_zero() {
            return Err(RevealError::InvalidConfiguration {
                field: "step_delay_ms",
                value: 0,
            });
        }
        if wrap.is_zero() {
            return Err(RevealError::InvalidConfiguration {
                field: "wrap_delay_ms",
                value: 0,
            });
        }
        Ok(Self { step, wrap })
    }

    /// Build from signed millisecond values as they come from props or deck
    /// files. Anything `<= 0` is rejected.
    pub fn from_millis(step_ms: i64, wrap_ms: i64) -> Result<Self> {
        let step = positive_millis("step_delay_ms", step_ms)?;
        let wrap = positive_millis("wrap_delay_ms", wrap_ms)?;
        Ok(Self { step, wrap })
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn wrap(&self) -> Duration {
        self.wrap
    }

    /// Length of one full cycle over `len` entries: `(len - 1) * step + wrap`.
    /// Zero for an empty list, which never cycles.
    pub fn period(&self, len: usize) -> Duration {
        if len == 0 {
            return Duration::ZERO;
        }
        let steps = u32::try_from(len - 1).unwrap_or(u32::MAX);
        self.step.saturating_mul(steps).saturating_add(self.wrap)
    }

    /// Delay before leaving `index` in a list of `len` entries.
    pub fn delay_after(&self, index: usize, len: usize) -> Duration {
        if index + 1 >= len { self.wrap } else { self.step }
    }
}

fn positive_millis(field: &'static str, value: i64) -> Result<Duration> {
    match u64::try_from(value) {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(RevealError::InvalidConfiguration { field, value }),
    }
}
