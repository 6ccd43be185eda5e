use crate::error::TrackerError;
use crate::hrtime::HrTime;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const NANOS_PER_MILLI: f64 = 1e6;
const NANOS_PER_SEC: f64 = 1e9;

/// Output representation for a completed measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeUnit {
    /// The raw `(secs, nanos)` pair
    HrTime,
    Nanoseconds,
    #[default]
    Milliseconds,
    Seconds,
    /// Human-readable text
    String,
    /// Every representation at once. Also the fallback for unknown names.
    All,
}

impl TimeUnit {
    /// Canonical unit name
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::HrTime => "hrtime",
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::String => "string",
            TimeUnit::All => "all",
        }
    }

    /// Parse a unit name. Unrecognised names fall back to `All`.
    pub fn parse_lenient(name: &str) -> TimeUnit {
        match name {
            "hrtime" => TimeUnit::HrTime,
            "nanoseconds" => TimeUnit::Nanoseconds,
            "milliseconds" => TimeUnit::Milliseconds,
            "seconds" => TimeUnit::Seconds,
            "string" => TimeUnit::String,
            "all" => TimeUnit::All,
            other => {
                tracing::debug!(unit = other, "Unrecognised time unit, using all");
                TimeUnit::All
            }
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Infallible;

    /// Never fails; see `parse_lenient`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TimeUnit::parse_lenient(s))
    }
}

impl From<String> for TimeUnit {
    fn from(name: String) -> Self {
        TimeUnit::parse_lenient(&name)
    }
}

impl From<TimeUnit> for String {
    fn from(unit: TimeUnit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every representation of one duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBundle {
    pub hrtime: HrTime,
    pub nanoseconds: u128,
    pub milliseconds: f64,
    pub seconds: f64,
    pub text: String,
}

/// A duration converted into a `TimeUnit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Measurement {
    HrTime(HrTime),
    Nanoseconds(u128),
    Milliseconds(f64),
    Seconds(f64),
    Text(String),
    All(MeasurementBundle),
}

impl Measurement {
    /// Unit this value was converted to
    pub fn unit(&self) -> TimeUnit {
        match self {
            Measurement::HrTime(_) => TimeUnit::HrTime,
            Measurement::Nanoseconds(_) => TimeUnit::Nanoseconds,
            Measurement::Milliseconds(_) => TimeUnit::Milliseconds,
            Measurement::Seconds(_) => TimeUnit::Seconds,
            Measurement::Text(_) => TimeUnit::String,
            Measurement::All(_) => TimeUnit::All,
        }
    }

    /// Serialize the bare value (number, string, pair or object) as JSON
    pub fn to_json(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::HrTime(t) => write!(f, "[{}, {}]", t.secs(), t.nanos()),
            Measurement::Nanoseconds(n) => write!(f, "{}ns", n),
            Measurement::Milliseconds(ms) => write!(f, "{}ms", ms),
            Measurement::Seconds(s) => write!(f, "{}s", s),
            Measurement::Text(text) => f.write_str(text),
            Measurement::All(bundle) => write!(f, "{}", bundle.text),
        }
    }
}

/// Fractional milliseconds
pub fn to_milliseconds(duration: HrTime) -> f64 {
    duration.as_nanos() as f64 / NANOS_PER_MILLI
}

/// Fractional seconds
pub fn to_seconds(duration: HrTime) -> f64 {
    duration.as_nanos() as f64 / NANOS_PER_SEC
}

/// Human-readable rendering.
///
/// Above 1000 seconds this prints thousands of seconds to three decimals
/// followed by "sec". Otherwise it prints `{secs}.{nanos} msec` with the
/// nanoseconds unpadded; the "msec" label and the unpadded remainder are kept
/// as-is for compatibility with existing consumers of this text.
pub fn format_human(duration: HrTime) -> String {
    if duration.secs() > 1000 {
        format!("{:.3} sec", duration.secs() as f64 / 1000.0)
    } else {
        format!("{}.{} msec", duration.secs(), duration.nanos())
    }
}

/// Every representation of `duration`
pub fn bundle(duration: HrTime) -> MeasurementBundle {
    MeasurementBundle {
        hrtime: duration,
        nanoseconds: duration.as_nanos(),
        milliseconds: to_milliseconds(duration),
        seconds: to_seconds(duration),
        text: format_human(duration),
    }
}

/// Convert a raw duration into the requested representation.
pub fn convert(duration: HrTime, unit: TimeUnit) -> Measurement {
    match unit {
        TimeUnit::HrTime => Measurement::HrTime(duration),
        TimeUnit::Nanoseconds => Measurement::Nanoseconds(duration.as_nanos()),
        TimeUnit::Milliseconds => Measurement::Milliseconds(to_milliseconds(duration)),
        TimeUnit::Seconds => Measurement::Seconds(to_seconds(duration)),
        TimeUnit::String => Measurement::Text(format_human(duration)),
        TimeUnit::All => Measurement::All(bundle(duration)),
    }
}
