use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::time::Duration;

pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Elapsed time as whole seconds plus a nanosecond remainder.
/// `nanos` is always in `[0, NANOS_PER_SEC)`.
/// Serialises as the pair `[secs, nanos]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(u64, u32)", into = "(u64, u32)")]
pub struct HrTime {
    secs: u64,
    nanos: u32,
}

impl HrTime {
    pub const ZERO: HrTime = HrTime { secs: 0, nanos: 0 };

    /// Build a duration, carrying any excess nanoseconds into the seconds.
    pub fn new(secs: u64, nanos: u32) -> Self {
        let carry = (nanos / NANOS_PER_SEC) as u64;
        HrTime {
            secs: secs.saturating_add(carry),
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    /// Saturates at `u64::MAX` seconds.
    pub fn from_nanos(total: u128) -> Self {
        let per_sec = NANOS_PER_SEC as u128;
        let secs = u64::try_from(total / per_sec).unwrap_or(u64::MAX);
        HrTime {
            secs,
            nanos: (total % per_sec) as u32,
        }
    }

    /// Whole seconds
    pub fn secs(&self) -> u64 {
        self.secs
    }

    /// Nanosecond remainder, below one second
    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Total length in nanoseconds
    pub fn as_nanos(&self) -> u128 {
        self.secs as u128 * NANOS_PER_SEC as u128 + self.nanos as u128
    }

    /// True for the zero duration
    pub fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    /// `self - earlier`, borrowing a second when the nanoseconds underflow.
    /// Returns None when `earlier` is later than `self`.
    pub fn checked_sub(self, earlier: HrTime) -> Option<HrTime> {
        let mut secs = self.secs.checked_sub(earlier.secs)?;
        let nanos = if self.nanos >= earlier.nanos {
            self.nanos - earlier.nanos
        } else {
            secs = secs.checked_sub(1)?;
            self.nanos + NANOS_PER_SEC - earlier.nanos
        };
        Some(HrTime { secs, nanos })
    }

    /// `checked_sub`, clamped to zero
    pub fn saturating_sub(self, earlier: HrTime) -> HrTime {
        self.checked_sub(earlier).unwrap_or(HrTime::ZERO)
    }

    /// Sum with carry; None on seconds overflow
    pub fn checked_add(self, other: HrTime) -> Option<HrTime> {
        let mut secs = self.secs.checked_add(other.secs)?;
        let mut nanos = self.nanos + other.nanos;
        if nanos >= NANOS_PER_SEC {
            nanos -= NANOS_PER_SEC;
            secs = secs.checked_add(1)?;
        }
        Some(HrTime { secs, nanos })
    }
}

impl Add for HrTime {
    type Output = HrTime;

    /// Saturates instead of overflowing.
    fn add(self, other: HrTime) -> HrTime {
        self.checked_add(other).unwrap_or(HrTime {
            secs: u64::MAX,
            nanos: NANOS_PER_SEC - 1,
        })
    }
}

impl From<Duration> for HrTime {
    fn from(d: Duration) -> Self {
        HrTime {
            secs: d.as_secs(),
            nanos: d.subsec_nanos(),
        }
    }
}

impl From<HrTime> for Duration {
    fn from(t: HrTime) -> Self {
        Duration::new(t.secs, t.nanos)
    }
}

impl From<(u64, u32)> for HrTime {
    fn from((secs, nanos): (u64, u32)) -> Self {
        HrTime::new(secs, nanos)
    }
}

impl From<HrTime> for (u64, u32) {
    fn from(t: HrTime) -> Self {
        (t.secs, t.nanos)
    }
}

impl fmt::Display for HrTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}s", self.secs, self.nanos)
    }
}
