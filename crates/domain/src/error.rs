//! Unified error types for the domain layer
//!
//! Provides a common error type for board construction and value parsing,
//! so adapters never have to fall back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., wrong board dimensions)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A board coordinate outside 0..8
    #[error("Square out of range: ({row}, {col})")]
    OutOfRange { row: i64, col: i64 },
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a value is structurally wrong:
    /// - A board with a row count other than 8
    /// - A rank with a column count other than 8
    ///
    /// # Example
    /// ```ignore
    /// if rows.len() != BOARD_SIZE {
    ///     return Err(DomainError::validation("board must have 8 rows"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an out-of-range coordinate error
    pub fn out_of_range(row: i64, col: i64) -> Self {
        Self::OutOfRange { row, col }
    }
}
