use crate::hrtime::HrTime;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

lazy_static! {
    /// Zero point of the monotonic clock, fixed on first use.
    static ref CLOCK_ANCHOR: Instant = Instant::now();
}

/// Source of monotonic readings for the tracker.
pub trait Clock {
    /// Current reading, relative to this clock's zero point.
    fn now(&self) -> HrTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> HrTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> HrTime {
        (**self).now()
    }
}

/// Process-wide monotonic clock backed by `Instant`.
/// Unaffected by wall-clock adjustments.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> HrTime {
        HrTime::from(CLOCK_ANCHOR.elapsed())
    }
}

/// Clock that only moves when told to.
/// Clones share the same reading, so a test can keep one handle and hand
/// the other to a tracker.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    reading: Arc<Mutex<HrTime>>,
}

impl ManualClock {
    /// Clock reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock reading `reading`
    pub fn starting_at(reading: HrTime) -> Self {
        ManualClock {
            reading: Arc::new(Mutex::new(reading)),
        }
    }

    /// Jump to `reading`, backwards included
    pub fn set(&self, reading: HrTime) {
        *self.reading.lock() = reading;
    }

    /// Move forward by `by`
    pub fn advance(&self, by: Duration) {
        let mut reading = self.reading.lock();
        *reading = *reading + HrTime::from(by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> HrTime {
        *self.reading.lock()
    }
}
