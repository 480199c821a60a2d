//! Error types for tsp-anneal.
//!
//! Every failure is a hard stop: it signals a defect in the instance or the
//! run configuration, never a transient condition.

use thiserror::Error;

/// Result type alias for tsp-anneal operations.
pub type AnnealResult<T> = Result<T, AnnealError>;

/// Unified error type for instance loading, configuration and solving.
#[derive(Debug, Error)]
pub enum AnnealError {
    /// The city list cannot form a tour.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A numeric parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Cooling schedule identifier not recognized.
    #[error("unknown cooling schedule '{0}'")]
    UnknownSchedule(String),

    /// Instance file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
