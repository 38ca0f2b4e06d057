//! Error types for the fitness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input field was absent (e.g. no weight for a calorie calculation)
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// An input carried a value the calculation cannot handle (e.g. gender for BMR)
    #[error("Unsupported value for {field}: {value}")]
    UnsupportedValue { field: &'static str, value: String },

    /// A numeric input was outside its valid range (e.g. non-positive duration)
    #[error("Invalid range for {field}: {value}")]
    InvalidRange { field: &'static str, value: f64 },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn unsupported(field: &'static str, value: impl Into<String>) -> Self {
        Error::UnsupportedValue {
            field,
            value: value.into(),
        }
    }

    /// Reject non-positive (or NaN) quantities
    pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
        if value > 0.0 {
            Ok(value)
        } else {
            Err(Error::InvalidRange { field, value })
        }
    }
}
