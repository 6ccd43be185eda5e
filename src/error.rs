use serde::{Deserialize, Serialize};

/// Unified error type for the tracker.
/// Fallible functions return Result<T, TrackerError> instead of String errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("[{stage}] {message}{}", context_suffix(.context))]
pub struct TrackerError {
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
}

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(context) => format!(" (context: {})", context),
        None => String::new(),
    }
}

impl TrackerError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        TrackerError {
            message: message.into(),
            stage: stage.to_string(),
            context: None,
        }
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The error raised by the strict end path when no timer was started
    pub fn missing_start() -> Self {
        TrackerError::new("end called before start", "end")
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::new(format!("I/O error: {}", err), "io")
    }
}

impl From<toml::de::Error> for TrackerError {
    fn from(err: toml::de::Error) -> Self {
        TrackerError::new(format!("TOML error: {}", err), "config_parse")
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::new(format!("JSON error: {}", err), "json_serialize")
    }
}
