pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod hrtime;
pub mod logging;
pub mod perf;
pub mod shared;
pub mod tracker;
pub mod units;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::TrackerOptions;
pub use error::TrackerError;
pub use history::{History, Statistics};
pub use hrtime::HrTime;
pub use perf::TimingGuard;
pub use shared::SharedTracker;
pub use tracker::{IntervalTracker, OnComplete};
pub use units::{convert, Measurement, MeasurementBundle, TimeUnit};

// Unit tests that need crate-internal paths
#[cfg(test)]
#[path = "../tests/hrtime_test.rs"]
mod hrtime_test;
#[cfg(test)]
#[path = "../tests/history_test.rs"]
mod history_test;
#[cfg(test)]
#[path = "../tests/units_test.rs"]
mod units_test;
#[cfg(test)]
#[path = "../tests/error_handling_test.rs"]
mod error_handling_test;
