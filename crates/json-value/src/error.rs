//! Error types for value operations

use thiserror::Error;

use crate::value::Kind;

/// Error raised by typed accessors and structural mutators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonValueError {
    /// An operation required one kind but the value held another
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The kind the operation required
        expected: Kind,
        /// The kind the value actually held
        actual: Kind,
    },
}

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, JsonValueError>;
