//! Error types for gareq.
//!
//! Builder mutations never fail. Errors only come from the edges: parsing
//! wire strings into typed enums, loading configuration, and rendering JSON.

use thiserror::Error;

/// The main error type for gareq operations.
#[derive(Debug, Error)]
pub enum GaError {
    /// A string did not name a known operator.
    #[error("Invalid operator: '{0}'. Expected: AND or OR")]
    InvalidOperator(String),

    /// A string did not name a known value of the given kind.
    #[error("Invalid {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    /// A string did not name a filter clause collection.
    #[error(
        "Invalid filter clause collection: '{0}'. \
         Expected: dimensionFilterClauses or metricFilterClauses"
    )]
    InvalidClauseKind(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be decoded.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GaError {
    /// Create an invalid value error for the named kind.
    pub fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid operator error.
    pub fn operator(value: impl Into<String>) -> Self {
        Self::InvalidOperator(value.into())
    }
}

/// Result type alias for gareq operations.
pub type GaResult<T> = Result<T, GaError>;
