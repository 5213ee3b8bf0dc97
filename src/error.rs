//! Error types for vecino.

use thiserror::Error;

/// Errors that can occur during index construction or search.
///
/// Everything here is an input-validation failure: construction and
/// queries are deterministic given their inputs, so there is nothing
/// transient to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Invalid construction parameters (empty subset, zero tables,
    /// code width out of range). Fatal to that index instance; the
    /// caller must rebuild with valid parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Vector length disagrees with the index or with the other
    /// operand. Raised per call; the caller may skip or abort that
    /// single comparison.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
