//! Free-function forms of the vector products.

use vectis_core::Expr;

use crate::error::{Result, VectorError};
use crate::quantity::Quantity;
use crate::vector::Vector;

/// Unwraps two vector operands.
pub(crate) fn vectors(lhs: Quantity, rhs: Quantity) -> Result<(Vector, Vector)> {
    match (lhs, rhs) {
        (Quantity::Vector(a), Quantity::Vector(b)) => Ok((a, b)),
        (a, b) => Err(VectorError::Type(format!(
            "Arguments must be the vectors, got a {} and a {}",
            a.kind(),
            b.kind()
        ))),
    }
}

/// The cross product of two vectors.
///
/// # Errors
///
/// Returns a type error unless both operands are vectors, and propagates
/// failures of [`Vector::cross`].
pub fn cross(lhs: impl Into<Quantity>, rhs: impl Into<Quantity>) -> Result<Vector> {
    let (a, b) = vectors(lhs.into(), rhs.into())?;
    a.cross(&b)
}

/// The dot product of two vectors.
///
/// # Errors
///
/// Returns a type error unless both operands are vectors, and propagates
/// failures of [`Vector::dot`].
pub fn dot(lhs: impl Into<Quantity>, rhs: impl Into<Quantity>) -> Result<Expr> {
    let (a, b) = vectors(lhs.into(), rhs.into())?;
    a.dot(&b)
}
