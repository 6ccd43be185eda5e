//! Scope timing on top of `IntervalTracker`

use crate::clock::Clock;
use crate::tracker::IntervalTracker;
use crate::units::Measurement;

/// Timing guard that ends its measurement on drop
pub struct TimingGuard<'a, A, C: Clock> {
    tracker: &'a mut IntervalTracker<A, C>,
    label: &'static str,
    args: A,
    done: bool,
}

impl<'a, A, C: Clock> TimingGuard<'a, A, C> {
    fn new(tracker: &'a mut IntervalTracker<A, C>, label: &'static str, args: A) -> Self {
        tracker.start();
        Self {
            tracker,
            label,
            args,
            done: false,
        }
    }

    /// End the measurement now and return it
    pub fn finish(mut self) -> Measurement {
        self.complete()
    }

    fn complete(&mut self) -> Measurement {
        self.done = true;
        let measurement = self.tracker.end_with(&self.args);
        tracing::debug!(label = self.label, elapsed = %measurement, "[Perf] scope finished");
        measurement
    }
}

impl<A, C: Clock> Drop for TimingGuard<'_, A, C> {
    fn drop(&mut self) {
        if !self.done {
            self.complete();
        }
    }
}

impl<A, C: Clock> IntervalTracker<A, C> {
    /// Start the timer and return a guard that calls `end_with(&args)` when
    /// it goes out of scope.
    pub fn time_scope(&mut self, label: &'static str, args: A) -> TimingGuard<'_, A, C> {
        TimingGuard::new(self, label, args)
    }
}
