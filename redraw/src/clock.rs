//! Time source abstraction for budgeted redraw.

/// Monotonic microsecond clock consulted between queue entries.
pub trait Clock {
    fn now_us(&self) -> u64;
}

/// Clock that never advances.
///
/// Under it a time-budgeted drain always sees zero elapsed time and so
/// never stops early; useful where no platform timer is wired up yet.
#[derive(Default)]
pub struct NullClock;

impl Clock for NullClock {
    #[inline]
    fn now_us(&self) -> u64 {
        0
    }
}
