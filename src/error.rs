//! Structured error types for gaugegrid.

/// All errors that can occur while computing or emitting a grid layout.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A container dimension is zero, negative or not finite.
    #[error("Invalid argument: {name} must be a finite number greater than 0, got {value}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A loosely typed request field could not be parsed as a number.
    #[error("Parse error: {name} is not a number: {value:?}")]
    Parse {
        /// Name of the offending field.
        name: &'static str,
        /// The raw input.
        value: String,
    },

    /// JSON serialization error.
    #[error("JSON serialization: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
