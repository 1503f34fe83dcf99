//! Unevaluated products.
//!
//! [`Cross`] and [`Dot`] hold their operands without computing anything, so
//! products can be built and printed before paying for frame
//! reconciliation. `doit` evaluates them.

use std::fmt;

use vectis_core::Expr;

use crate::error::Result;
use crate::functions;
use crate::quantity::Quantity;
use crate::vector::Vector;

/// An unevaluated cross product.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cross {
    lhs: Vector,
    rhs: Vector,
}

impl Cross {
    /// Creates `Cross(lhs, rhs)`.
    ///
    /// # Errors
    ///
    /// Returns a type error unless both operands are vectors.
    pub fn new(lhs: impl Into<Quantity>, rhs: impl Into<Quantity>) -> Result<Self> {
        let (lhs, rhs) = functions::vectors(lhs.into(), rhs.into())?;
        Ok(Self { lhs, rhs })
    }

    /// Creates `Cross(lhs, rhs)` from operands already known to be vectors.
    #[must_use]
    pub fn from_vectors(lhs: Vector, rhs: Vector) -> Self {
        Self { lhs, rhs }
    }

    /// The left operand.
    #[must_use]
    pub fn lhs(&self) -> &Vector {
        &self.lhs
    }

    /// The right operand.
    #[must_use]
    pub fn rhs(&self) -> &Vector {
        &self.rhs
    }

    /// Evaluates the product.
    ///
    /// # Errors
    ///
    /// Propagates failures of [`functions::cross`].
    pub fn doit(&self) -> Result<Vector> {
        functions::cross(&self.lhs, &self.rhs)
    }
}

impl fmt::Display for Cross {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cross({}, {})", self.lhs, self.rhs)
    }
}

/// An unevaluated dot product.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dot {
    lhs: Vector,
    rhs: Vector,
}

impl Dot {
    /// Creates `Dot(lhs, rhs)`.
    ///
    /// # Errors
    ///
    /// Returns a type error unless both operands are vectors.
    pub fn new(lhs: impl Into<Quantity>, rhs: impl Into<Quantity>) -> Result<Self> {
        let (lhs, rhs) = functions::vectors(lhs.into(), rhs.into())?;
        Ok(Self { lhs, rhs })
    }

    /// Creates `Dot(lhs, rhs)` from operands already known to be vectors.
    #[must_use]
    pub fn from_vectors(lhs: Vector, rhs: Vector) -> Self {
        Self { lhs, rhs }
    }

    /// The left operand.
    #[must_use]
    pub fn lhs(&self) -> &Vector {
        &self.lhs
    }

    /// The right operand.
    #[must_use]
    pub fn rhs(&self) -> &Vector {
        &self.rhs
    }

    /// Evaluates the product.
    ///
    /// # Errors
    ///
    /// Propagates failures of [`functions::dot`].
    pub fn doit(&self) -> Result<Expr> {
        functions::dot(&self.lhs, &self.rhs)
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dot({}, {})", self.lhs, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::CoordSysVectors;
    use vectis_core::CoordSys3D;

    #[test]
    fn test_display_is_unevaluated() {
        let c = CoordSys3D::new("C");
        let m = Cross::from_vectors(c.i(), c.j());
        assert_eq!(m.to_string(), "Cross(C.i, C.j)");
        assert_eq!(Dot::from_vectors(c.i(), c.i()).to_string(), "Dot(C.i, C.i)");
    }

    #[test]
    fn test_doit() {
        let c = CoordSys3D::new("C");
        assert_eq!(Cross::new(c.i(), c.j()).unwrap().doit().unwrap(), c.k());
        assert_eq!(Dot::new(c.i(), c.i()).unwrap().doit().unwrap(), Expr::one());
    }

    #[test]
    fn test_rejects_non_vectors() {
        let c = CoordSys3D::new("C");
        assert!(Cross::new(c.i(), Expr::one()).unwrap_err().is_type_error());
        assert!(Dot::new(c.i().outer(&c.j()), c.i())
            .unwrap_err()
            .is_type_error());
    }
}
