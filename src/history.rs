use crate::hrtime::HrTime;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Upper bound on the slots reserved up front; the rest grow on push.
const MAX_PREALLOCATED: usize = 1024;

/// Summary of the durations currently held in a `History`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub min: HrTime,
    pub max: HrTime,
    pub avg: HrTime,
}

/// Bounded FIFO of recent durations.
/// Never holds more than `capacity` entries; capacity 0 retains nothing.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HrTime>,
    capacity: usize,
}

impl History {
    /// Empty history holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED)),
            capacity,
        }
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// False when capacity is 0 and nothing is retained
    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HrTime> + '_ {
        self.entries.iter()
    }

    /// Copy of the entries, oldest first
    pub fn to_vec(&self) -> Vec<HrTime> {
        self.entries.iter().copied().collect()
    }

    /// Append a duration, evicting from the front until it fits.
    /// Returns how many entries were evicted.
    pub fn push(&mut self, duration: HrTime) -> usize {
        if !self.is_enabled() {
            return 0;
        }
        self.entries.push_back(duration);
        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            tracing::debug!(evicted = evicted, capacity = self.capacity, "History evicted oldest entries");
        }
        evicted
    }

    /// Drop every retained entry, keeping the capacity
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Mean duration, accumulated in whole nanoseconds. Zero when empty.
    pub fn average(&self) -> HrTime {
        if self.entries.is_empty() {
            return HrTime::ZERO;
        }
        let total: u128 = self.entries.iter().map(HrTime::as_nanos).sum();
        HrTime::from_nanos(total / self.entries.len() as u128)
    }

    /// Min, max and mean in one pass. All zero when empty.
    pub fn statistics(&self) -> Statistics {
        let mut iter = self.entries.iter().copied();
        let first = match iter.next() {
            Some(first) => first,
            None => return Statistics::default(),
        };

        let mut min = first;
        let mut max = first;
        let mut total = first.as_nanos();
        for duration in iter {
            min = min.min(duration);
            max = max.max(duration);
            total += duration.as_nanos();
        }

        Statistics {
            min,
            max,
            avg: HrTime::from_nanos(total / self.entries.len() as u128),
        }
    }
}
