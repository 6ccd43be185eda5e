use crate::clock::{Clock, MonotonicClock};
use crate::config::TrackerOptions;
use crate::error::TrackerError;
use crate::history::{History, Statistics};
use crate::hrtime::HrTime;
use crate::units::{convert, Measurement, TimeUnit};
use std::fmt;
use std::sync::Arc;

/// Completion callback: `(measurement, tracker, end arguments)`.
pub type OnComplete<A, C> = Arc<dyn Fn(&Measurement, &IntervalTracker<A, C>, &A) + Send + Sync>;

/// Times intervals between `start` and `end` and keeps a rolling history.
///
/// One tracker models one sequential timer: there is a single active mark,
/// so overlapping `start`/`end` pairs overwrite each other. Use one tracker
/// per concurrent operation.
///
/// `A` is the type of the arguments passed through `end_with` to the
/// completion callback.
pub struct IntervalTracker<A = (), C = MonotonicClock> {
    options: TrackerOptions,
    clock: C,
    mark: Option<HrTime>,
    history: History,
    on_complete: Option<OnComplete<A, C>>,
}

impl IntervalTracker<(), MonotonicClock> {
    /// Create a tracker on the process monotonic clock.
    pub fn new(options: TrackerOptions) -> Self {
        IntervalTracker::with_clock(options, MonotonicClock)
    }
}

impl<A, C: Clock> IntervalTracker<A, C> {
    /// Create a tracker reading from `clock`.
    /// With history disabled the timer starts immediately.
    pub fn with_clock(options: TrackerOptions, clock: C) -> Self {
        let history = History::with_capacity(options.values_max);
        let mut tracker = IntervalTracker {
            options,
            clock,
            mark: None,
            history,
            on_complete: None,
        };
        if !tracker.history.is_enabled() {
            tracker.start();
        }
        tracker
    }

    /// Register the callback run synchronously at the end of every measurement.
    /// Panics inside the callback propagate to the caller of `end`.
    pub fn with_on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Measurement, &IntervalTracker<A, C>, &A) + Send + Sync + 'static,
    {
        self.on_complete = Some(Arc::new(callback));
        self
    }

    /// Capture the current clock reading, replacing any previous mark.
    pub fn start(&mut self) {
        let now = self.clock.now();
        tracing::debug!(secs = now.secs(), nanos = now.nanos(), "Timer started");
        self.mark = Some(now);
    }

    /// Finish a measurement without checking that `start` was called.
    ///
    /// Without a mark the clock's zero reading is used, so the result is the
    /// time since the clock epoch.
    pub fn end_with(&mut self, args: &A) -> Measurement {
        let mark = match self.mark {
            Some(mark) => mark,
            None => {
                tracing::warn!("end called before start, measuring from clock zero");
                HrTime::ZERO
            }
        };
        self.finish(mark, args)
    }

    /// Strict form of `end_with`: fails if `start` was never called.
    pub fn try_end_with(&mut self, args: &A) -> Result<Measurement, TrackerError> {
        let mark = self.mark.ok_or_else(TrackerError::missing_start)?;
        Ok(self.finish(mark, args))
    }

    fn finish(&mut self, mark: HrTime, args: &A) -> Measurement {
        let elapsed = self.elapsed_since(mark);
        self.history.push(elapsed);

        let measurement = convert(elapsed, self.options.units);
        tracing::trace!(
            secs = elapsed.secs(),
            nanos = elapsed.nanos(),
            units = %self.options.units,
            history_len = self.history.len(),
            "Timer ended"
        );

        if let Some(callback) = self.on_complete.clone() {
            callback(&measurement, &*self, args);
        }
        measurement
    }

    fn elapsed_since(&self, mark: HrTime) -> HrTime {
        let now = self.clock.now();
        now.checked_sub(mark).unwrap_or_else(|| {
            tracing::warn!(
                now = %now,
                mark = %mark,
                "Clock reading precedes timer mark, reporting zero"
            );
            HrTime::ZERO
        })
    }

    /// Mean of the retained durations, zero when empty
    pub fn avg(&self) -> HrTime {
        self.history.average()
    }

    /// Min, max and mean of the retained durations
    pub fn stat(&self) -> Statistics {
        self.history.statistics()
    }

    /// Retained durations
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Options the tracker was built with
    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// Representation returned by `end`
    pub fn units(&self) -> TimeUnit {
        self.options.units
    }

    /// Reading captured by the latest `start`, if any
    pub fn mark(&self) -> Option<HrTime> {
        self.mark
    }

    /// Whether `start` has run, explicitly or at construction
    pub fn is_started(&self) -> bool {
        self.mark.is_some()
    }

    /// Clock the tracker reads from
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<A: Default, C: Clock> IntervalTracker<A, C> {
    /// `end_with` using default arguments.
    pub fn end(&mut self) -> Measurement {
        self.end_with(&A::default())
    }

    /// `try_end_with` using default arguments.
    pub fn try_end(&mut self) -> Result<Measurement, TrackerError> {
        self.try_end_with(&A::default())
    }
}

impl<A, C: fmt::Debug> fmt::Debug for IntervalTracker<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTracker")
            .field("options", &self.options)
            .field("clock", &self.clock)
            .field("mark", &self.mark)
            .field("history", &self.history)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
