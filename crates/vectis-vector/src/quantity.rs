//! Dynamically-typed operands.
//!
//! The typed products on [`Vector`] cover every well-formed combination. When
//! the kind of an operand is only known at runtime, wrap it in a [`Quantity`]
//! and use the `*_quantity` entry points, which report ill-kinded operands as
//! type errors.

use std::fmt;

use vectis_core::Expr;

use crate::del::{Del, DirectionalDerivative};
use crate::dyadic::Dyadic;
use crate::error::{Result, VectorError};
use crate::vector::Vector;

/// A scalar, vector, dyadic or the del operator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// A scalar expression.
    Scalar(Expr),
    /// A vector.
    Vector(Vector),
    /// A dyadic.
    Dyadic(Dyadic),
    /// The del operator.
    Del(Del),
}

impl Quantity {
    /// A short name for the operand kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Quantity::Scalar(_) => "scalar",
            Quantity::Vector(_) => "vector",
            Quantity::Dyadic(_) => "dyadic",
            Quantity::Del(_) => "del operator",
        }
    }

    /// Returns the vector, if this is one.
    #[must_use]
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Quantity::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Scalar(e) => write!(f, "{e}"),
            Quantity::Vector(v) => write!(f, "{v}"),
            Quantity::Dyadic(d) => write!(f, "{d}"),
            Quantity::Del(d) => write!(f, "{d}"),
        }
    }
}

impl From<Expr> for Quantity {
    fn from(e: Expr) -> Self {
        Quantity::Scalar(e)
    }
}

impl From<Vector> for Quantity {
    fn from(v: Vector) -> Self {
        Quantity::Vector(v)
    }
}

impl From<&Vector> for Quantity {
    fn from(v: &Vector) -> Self {
        Quantity::Vector(v.clone())
    }
}

impl From<Dyadic> for Quantity {
    fn from(d: Dyadic) -> Self {
        Quantity::Dyadic(d)
    }
}

impl From<Del> for Quantity {
    fn from(d: Del) -> Self {
        Quantity::Del(d)
    }
}

/// Result of a dot product whose right operand kind is known only at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DotProduct {
    /// `vector · vector`.
    Scalar(Expr),
    /// `vector · dyadic`.
    Vector(Vector),
    /// `vector · del`.
    Operator(DirectionalDerivative),
}

/// Result of a cross product whose right operand kind is known only at
/// runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossProduct {
    /// `vector × vector`.
    Vector(Vector),
    /// `vector × dyadic`.
    Dyadic(Dyadic),
}

impl Vector {
    /// Dot product with a dynamically-typed operand.
    ///
    /// # Errors
    ///
    /// Returns a type error for a scalar operand, and propagates failures of
    /// the typed products.
    pub fn dot_quantity(&self, other: &Quantity) -> Result<DotProduct> {
        match other {
            Quantity::Vector(v) => self.dot(v).map(DotProduct::Scalar),
            Quantity::Dyadic(d) => self.dot_dyadic(d).map(DotProduct::Vector),
            Quantity::Del(del) => Ok(DotProduct::Operator(self.directional_derivative(del))),
            Quantity::Scalar(_) => Err(VectorError::Type(format!(
                "{other} is not a vector, dyadic or del operator"
            ))),
        }
    }

    /// Cross product with a dynamically-typed operand.
    ///
    /// # Errors
    ///
    /// Returns a type error for a scalar or del operand.
    pub fn cross_quantity(&self, other: &Quantity) -> Result<CrossProduct> {
        match other {
            Quantity::Vector(v) => self.cross(v).map(CrossProduct::Vector),
            Quantity::Dyadic(d) => self.cross_dyadic(d).map(CrossProduct::Dyadic),
            Quantity::Scalar(_) | Quantity::Del(_) => {
                Err(VectorError::Type(format!("{other} is not a vector")))
            }
        }
    }

    /// Outer product with a dynamically-typed operand.
    ///
    /// # Errors
    ///
    /// Returns a type error unless `other` is a vector.
    pub fn outer_quantity(&self, other: &Quantity) -> Result<Dyadic> {
        match other {
            Quantity::Vector(v) => Ok(self.outer(v)),
            _ => Err(VectorError::Type("Invalid operand for outer product".into())),
        }
    }
}

/// Divides `numerator` by `denominator`.
///
/// A vector may be divided by a nonzero scalar. Dividing by a vector is
/// undefined, and dyadics and del take no part in division.
///
/// # Errors
///
/// Returns a type error for undefined combinations and a value error for a
/// literal zero divisor.
pub fn divide(numerator: &Quantity, denominator: &Quantity) -> Result<Quantity> {
    match (numerator, denominator) {
        (Quantity::Vector(_), Quantity::Vector(_)) => {
            Err(VectorError::Type("Cannot divide two vectors".into()))
        }
        (Quantity::Scalar(_), Quantity::Vector(_)) => {
            Err(VectorError::Type("Invalid division involving a vector".into()))
        }
        (Quantity::Vector(v), Quantity::Scalar(s)) => v.checked_div(s).map(Quantity::Vector),
        (Quantity::Scalar(a), Quantity::Scalar(b)) => {
            if b.is_zero() {
                return Err(VectorError::Value("Cannot divide by zero".into()));
            }
            Ok(Quantity::Scalar(a / b))
        }
        (lhs, rhs) => Err(VectorError::Type(format!(
            "cannot divide a {} by a {}",
            lhs.kind(),
            rhs.kind()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::CoordSysVectors;
    use vectis_core::CoordSys3D;

    #[test]
    fn test_dot_dispatch() {
        let c = CoordSys3D::new("C");
        let v = c.i() * 2;
        assert_eq!(
            v.dot_quantity(&c.i().into()).unwrap(),
            DotProduct::Scalar(Expr::integer(2))
        );
        let d = c.i().outer(&c.j());
        assert_eq!(
            v.dot_quantity(&d.into()).unwrap(),
            DotProduct::Vector(c.j() * 2)
        );
        assert!(matches!(
            v.dot_quantity(&Del.into()).unwrap(),
            DotProduct::Operator(_)
        ));
        let err = v.dot_quantity(&Expr::symbol("a").into()).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.to_string(), "a is not a vector, dyadic or del operator");
    }

    #[test]
    fn test_cross_dispatch() {
        let c = CoordSys3D::new("C");
        assert_eq!(
            c.i().cross_quantity(&c.j().into()).unwrap(),
            CrossProduct::Vector(c.k())
        );
        assert!(c.i().cross_quantity(&Del.into()).unwrap_err().is_type_error());
        assert!(c
            .i()
            .cross_quantity(&Expr::one().into())
            .unwrap_err()
            .is_type_error());
    }

    #[test]
    fn test_outer_dispatch() {
        let c = CoordSys3D::new("C");
        assert!(c.i().outer_quantity(&c.j().into()).is_ok());
        let err = c.i().outer_quantity(&Expr::one().into()).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_divide() {
        let c = CoordSys3D::new("C");
        let v: Quantity = (c.i() * 4).into();
        let two: Quantity = Expr::integer(2).into();
        let zero: Quantity = Expr::zero().into();

        assert_eq!(divide(&v, &two).unwrap(), Quantity::Vector(c.i() * 2));
        assert!(divide(&v, &zero).unwrap_err().is_value_error());
        assert!(divide(&v, &v).unwrap_err().is_type_error());
        assert!(divide(&two, &v).unwrap_err().is_type_error());
        assert_eq!(
            divide(&two, &two).unwrap(),
            Quantity::Scalar(Expr::one())
        );
        assert!(divide(&two, &zero).unwrap_err().is_value_error());
        let d: Quantity = c.i().outer(&c.i()).into();
        assert!(divide(&d, &two).unwrap_err().is_type_error());
    }
}
