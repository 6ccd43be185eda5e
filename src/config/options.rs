use crate::error::TrackerError;
use crate::units::TimeUnit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the TOML options file
pub const CONFIG_PATH_ENV: &str = "INTERVAL_TRACKER_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "interval-tracker.toml";

/// Construction options for an `IntervalTracker`.
/// Fixed once the tracker is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerOptions {
    /// History capacity. 0 disables history and auto-starts the timer.
    pub values_max: usize,
    /// Representation returned by `end`
    pub units: TimeUnit,
}

impl TrackerOptions {
    /// Options with the given capacity and units
    pub fn new(values_max: usize, units: TimeUnit) -> Self {
        TrackerOptions { values_max, units }
    }

    /// Replace the history capacity
    pub fn with_values_max(mut self, values_max: usize) -> Self {
        self.values_max = values_max;
        self
    }

    /// Replace the output units
    pub fn with_units(mut self, units: TimeUnit) -> Self {
        self.units = units;
        self
    }
}

/// `INTERVAL_TRACKER_CONFIG` if set, else `interval-tracker.toml`
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Parse options from TOML text
pub fn options_from_toml_str(content: &str) -> Result<TrackerOptions, TrackerError> {
    Ok(toml::from_str::<TrackerOptions>(content)?)
}

/// Read options from a TOML file, failing on missing or malformed files.
pub fn read_options(path: &Path) -> Result<TrackerOptions, TrackerError> {
    let content = fs::read_to_string(path)
        .map_err(|e| TrackerError::from(e).with_context(path.display().to_string()))?;
    options_from_toml_str(&content).map_err(|e| e.with_context(path.display().to_string()))
}

/// Read options from a TOML file, using defaults if it can't be loaded.
pub fn load_options(path: &Path) -> TrackerOptions {
    match read_options(path) {
        Ok(options) => {
            tracing::info!(path = %path.display(), "Loaded tracker options");
            options
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Using default tracker options");
            TrackerOptions::default()
        }
    }
}
