//! Errors raised by vector operations.

use thiserror::Error;

/// Errors that can occur in vector and dyadic algebra.
///
/// Every failure is immediate: an operation either returns a well-formed
/// expression or one of these, never a partial result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// An operand has the wrong kind for the operation.
    #[error("{0}")]
    Type(String),

    /// An operand has the right kind but an invalid value.
    #[error("{0}")]
    Value(String),

    /// Two coordinate systems share no orientation root, so a vector cannot
    /// be re-expressed from one into the other.
    #[error("no connecting path between coordinate systems {from} and {to}")]
    Disconnected {
        /// Source system name.
        from: String,
        /// Target system name.
        to: String,
    },
}

impl VectorError {
    /// Returns true for operand-kind errors.
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        matches!(self, VectorError::Type(_))
    }

    /// Returns true for invalid-value errors, including disconnected systems.
    #[must_use]
    pub fn is_value_error(&self) -> bool {
        matches!(self, VectorError::Value(_) | VectorError::Disconnected { .. })
    }
}

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
