// ============================================================
// Layer 3 — Dataset Errors
// ============================================================
// Typed errors for the library layers. The application and CLI
// layers wrap these in anyhow with extra context.

use thiserror::Error;

/// Errors that can occur while building or transforming an intent dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required companion option is missing or options disagree.
    #[error("configuration error: {0}")]
    Config(String),

    /// A split / field the operation needs is not in the dataset.
    #[error("split or field not found: {0}")]
    MissingSplit(String),

    /// No preprocessor registered under this name.
    #[error("unknown preprocessor: {0}")]
    UnknownPreprocessor(String),

    /// A transform returned a batch of a different size than it received.
    #[error("preprocessor '{name}' returned {got} items for a batch of {expected}")]
    TransformLength {
        name:     String,
        expected: usize,
        got:      usize,
    },

    /// Split proportion outside (0, 1).
    #[error("invalid split proportion: {0} (must be in (0, 1))")]
    InvalidProportion(f64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DatasetError {
    /// Creates a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    /// Creates a missing split error.
    pub fn missing_split(name: impl Into<String>) -> Self {
        Self::MissingSplit(name.into())
    }

    /// Creates an unknown preprocessor error.
    pub fn unknown_preprocessor(name: impl Into<String>) -> Self {
        Self::UnknownPreprocessor(name.into())
    }

    /// True for errors caused by the options rather than the data
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidProportion(_))
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
