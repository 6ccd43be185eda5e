use crate::clock::{Clock, MonotonicClock};
use crate::history::Statistics;
use crate::hrtime::HrTime;
use crate::tracker::IntervalTracker;
use crate::units::Measurement;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to a tracker behind a lock.
///
/// Recording a duration and evicting old ones happen under one lock, so
/// readers on other threads never see a history longer than its capacity.
/// This does not make overlapping `start`/`end` pairs safe: there is still a
/// single mark. Completion callbacks run while the lock is held and must not
/// call back into the same handle.
pub struct SharedTracker<A = (), C = MonotonicClock> {
    inner: Arc<Mutex<IntervalTracker<A, C>>>,
}

impl<A, C> Clone for SharedTracker<A, C> {
    fn clone(&self) -> Self {
        SharedTracker {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, C: Clock> SharedTracker<A, C> {
    /// Wrap a tracker for shared use
    pub fn new(tracker: IntervalTracker<A, C>) -> Self {
        SharedTracker {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Lock and `start`
    pub fn start(&self) {
        self.inner.lock().start();
    }

    /// Lock and `end_with`; the callback runs under the lock
    pub fn end_with(&self, args: &A) -> Measurement {
        self.inner.lock().end_with(args)
    }

    /// Lock and `avg`
    pub fn avg(&self) -> HrTime {
        self.inner.lock().avg()
    }

    /// Lock and `stat`
    pub fn stat(&self) -> Statistics {
        self.inner.lock().stat()
    }

    /// Copy of the retained durations, oldest first
    pub fn history_snapshot(&self) -> Vec<HrTime> {
        self.inner.lock().history().to_vec()
    }

    /// Run `f` with exclusive access to the tracker
    pub fn with<R>(&self, f: impl FnOnce(&mut IntervalTracker<A, C>) -> R) -> R {
        let mut tracker = self.inner.lock();
        f(&mut *tracker)
    }
}

impl<A: Default, C: Clock> SharedTracker<A, C> {
    /// Lock and `end`
    pub fn end(&self) -> Measurement {
        self.inner.lock().end()
    }
}

impl<A, C: Clock> From<IntervalTracker<A, C>> for SharedTracker<A, C> {
    fn from(tracker: IntervalTracker<A, C>) -> Self {
        SharedTracker::new(tracker)
    }
}
