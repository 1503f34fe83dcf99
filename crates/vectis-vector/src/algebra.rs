//! Products and derived quantities of vectors.
//!
//! Dot and cross products reconcile coordinate systems through
//! [`express`]: a dot product re-expresses both operands into the system of
//! its right operand, and a cross product splits its right operand per system
//! and expands one determinant per system.

use std::collections::BTreeMap;
use std::ops::{BitAnd, BitOr, BitXor};

use smallvec::SmallVec;
use tracing::{debug, trace};
use vectis_core::{CoordSys3D, Expr, Matrix};

use crate::basis::CoordSysVectors;
use crate::dyadic::{BaseDyadic, Dyadic};
use crate::error::{Result, VectorError};
use crate::express::express;
use crate::vector::Vector;

impl Vector {
    /// The scalar (inner) product `self · other`.
    ///
    /// # Errors
    ///
    /// Fails if `self` cannot be re-expressed into `other`'s system.
    pub fn dot(&self, other: &Vector) -> Result<Expr> {
        let Some(system) = other.system() else {
            return Ok(Expr::zero());
        };
        if self.is_zero() {
            return Ok(Expr::zero());
        }
        if self.system().as_ref() != Some(&system) {
            debug!(system = %system, "dot product across coordinate systems");
        }
        let lhs = express(self, &system)?;
        let rhs = express(other, &system)?;
        Ok(Expr::add_all(
            system
                .base_vectors()
                .iter()
                .map(|base| lhs.coefficient(base) * rhs.coefficient(base)),
        ))
    }

    /// The product `self · dyadic`, a vector.
    ///
    /// Each term `c (l|r)` contributes `(l · self) c r`.
    ///
    /// # Errors
    ///
    /// Fails if a left factor cannot be related to `self`'s systems.
    pub fn dot_dyadic(&self, dyadic: &Dyadic) -> Result<Vector> {
        if self.is_zero() {
            return Ok(Vector::zero());
        }
        dyadic
            .terms()
            .try_fold(Vector::zero(), |acc, (left, coeff, right)| {
                let projected = Vector::from(left.clone()).dot(self)?;
                Ok(acc + Vector::scaled(right.clone(), projected * coeff))
            })
    }

    /// The cross product `self × other`.
    ///
    /// # Errors
    ///
    /// Fails if `self` cannot be re-expressed into one of `other`'s systems.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.is_zero() || other.is_zero() {
            return Ok(Vector::zero());
        }
        other
            .separate()
            .into_iter()
            .try_fold(Vector::zero(), |acc, (system, part)| {
                trace!(system = %system, "cross product determinant");
                Ok(acc + cross_in(self, &part, &system)?)
            })
    }

    /// The product `self × dyadic`, a dyadic.
    ///
    /// Each term `c (l|r)` contributes `c (self × l)|r`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying cross products.
    pub fn cross_dyadic(&self, dyadic: &Dyadic) -> Result<Dyadic> {
        if self.is_zero() {
            return Ok(Dyadic::zero());
        }
        dyadic
            .terms()
            .try_fold(Dyadic::zero(), |acc, (left, coeff, right)| {
                let crossed = self.cross(&Vector::from(left.clone()))?;
                Ok(acc + crossed.outer(&Vector::from(right.clone())).scale(coeff))
            })
    }

    /// The outer product `self | other`.
    ///
    /// Every pair of components contributes one term, so the result is
    /// bilinear in its operands.
    #[must_use]
    pub fn outer(&self, other: &Vector) -> Dyadic {
        if self.is_zero() || other.is_zero() {
            return Dyadic::zero();
        }
        let rhs = other.components();
        let terms = self.components().into_iter().flat_map(|(left, lc)| {
            rhs.iter().map(move |(right, rc)| {
                (BaseDyadic::new(left.clone(), right.clone()), &lc * rc)
            })
        });
        terms.fold(Dyadic::zero(), |acc, (bd, coeff)| {
            acc + Dyadic::from_components(BTreeMap::from([(bd, coeff)]))
        })
    }

    /// The vector projection of `other` onto `self`.
    ///
    /// Projection onto the zero vector is the zero vector.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying dot products.
    pub fn projection(&self, other: &Vector) -> Result<Vector> {
        if self.is_zero() {
            return Ok(Vector::zero());
        }
        Ok(self.scale(&self.scalar_projection(other)?))
    }

    /// The scalar projection `(self · other) / (self · self)`.
    ///
    /// Projection onto the zero vector is zero.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying dot products.
    pub fn scalar_projection(&self, other: &Vector) -> Result<Expr> {
        if self.is_zero() {
            return Ok(Expr::zero());
        }
        Ok(self.dot(other)? / self.dot(self)?)
    }

    /// The magnitude `sqrt(self · self)`.
    ///
    /// # Errors
    ///
    /// Fails if the components of `self` cannot be reconciled.
    pub fn magnitude(&self) -> Result<Expr> {
        Ok(self.dot(self)?.sqrt())
    }

    /// The unit vector along `self`.
    ///
    /// # Errors
    ///
    /// Returns a value error for the zero vector.
    pub fn normalize(&self) -> Result<Vector> {
        self.checked_div(&self.magnitude()?)
    }

    /// The column of components of `self` along `system`'s axes.
    ///
    /// # Errors
    ///
    /// Fails if `self` cannot be re-expressed into `system`.
    pub fn to_matrix(&self, system: &CoordSys3D) -> Result<Matrix> {
        let entries = system
            .base_vectors()
            .into_iter()
            .map(|base| self.dot(&Vector::from(base)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix::column(entries))
    }

    /// Divides every coefficient by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns a value error if `divisor` is literally zero.
    pub fn checked_div(&self, divisor: &Expr) -> Result<Vector> {
        if divisor.is_zero() {
            return Err(VectorError::Value("Cannot divide a vector by zero".into()));
        }
        Ok(self.scale(&divisor.clone().recip()))
    }
}

/// `u & v` is the dot product.
impl BitAnd for &Vector {
    type Output = Result<Expr>;

    fn bitand(self, rhs: &Vector) -> Result<Expr> {
        self.dot(rhs)
    }
}

impl BitAnd for Vector {
    type Output = Result<Expr>;

    fn bitand(self, rhs: Vector) -> Result<Expr> {
        self.dot(&rhs)
    }
}

/// `u ^ v` is the cross product.
impl BitXor for &Vector {
    type Output = Result<Vector>;

    fn bitxor(self, rhs: &Vector) -> Result<Vector> {
        self.cross(rhs)
    }
}

impl BitXor for Vector {
    type Output = Result<Vector>;

    fn bitxor(self, rhs: Vector) -> Result<Vector> {
        self.cross(&rhs)
    }
}

/// `u | v` is the outer product.
impl BitOr for &Vector {
    type Output = Dyadic;

    fn bitor(self, rhs: &Vector) -> Dyadic {
        self.outer(rhs)
    }
}

impl BitOr for Vector {
    type Output = Dyadic;

    fn bitor(self, rhs: Vector) -> Dyadic {
        self.outer(&rhs)
    }
}

/// Expands the determinant with rows `(i, j, k)`, `lhs · e` and `rhs · e`
/// along its first row.
fn cross_in(lhs: &Vector, rhs: &Vector, system: &CoordSys3D) -> Result<Vector> {
    let basis = system.base_vectors().map(Vector::from);
    let a = basis
        .iter()
        .map(|e| lhs.dot(e))
        .collect::<Result<SmallVec<[Expr; 3]>>>()?;
    let b = basis
        .iter()
        .map(|e| rhs.dot(e))
        .collect::<Result<SmallVec<[Expr; 3]>>>()?;
    let [i, j, k] = basis;
    Ok(i * (&a[1] * &b[2] - &a[2] * &b[1])
        + j * (&a[2] * &b[0] - &a[0] * &b[2])
        + k * (&a[0] * &b[1] - &a[1] * &b[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectis_core::Axis;

    #[test]
    fn test_dot_basis() {
        let c = CoordSys3D::new("C");
        assert_eq!(c.i().dot(&c.i()).unwrap(), Expr::one());
        assert_eq!(c.i().dot(&c.j()).unwrap(), Expr::zero());
        assert_eq!(Vector::zero().dot(&c.k()).unwrap(), Expr::zero());
        assert_eq!(c.k().dot(&Vector::zero()).unwrap(), Expr::zero());
    }

    #[test]
    fn test_dot_symbolic() {
        let r = CoordSys3D::new("R");
        let v1 = r.i() + r.j() + r.k();
        let v2 = r.x() * r.i() + r.y() * r.j() + r.z() * r.k();
        assert_eq!(v1.dot(&v2).unwrap(), r.x() + r.y() + r.z());
    }

    #[test]
    fn test_dot_across_frames() {
        let n = CoordSys3D::new("N");
        let q = Expr::symbol("q");
        let a = n.orient_new_axis("A", q.clone(), Axis::Z);
        assert_eq!(a.i().dot(&n.i()).unwrap(), q.clone().cos());
        assert_eq!(a.i().dot(&n.j()).unwrap(), q.clone().sin());
        assert_eq!(n.i().dot(&a.j()).unwrap(), -q.sin());
    }

    #[test]
    fn test_cross_basis() {
        let c = CoordSys3D::new("C");
        assert_eq!(c.i().cross(&c.j()).unwrap(), c.k());
        assert_eq!(c.j().cross(&c.k()).unwrap(), c.i());
        assert_eq!(c.k().cross(&c.i()).unwrap(), c.j());
        assert_eq!(c.j().cross(&c.i()).unwrap(), -c.k());
        assert!(c.i().cross(&c.i()).unwrap().is_zero());
    }

    #[test]
    fn test_cross_symbolic() {
        let r = CoordSys3D::new("R");
        let v1 = r.i() + r.j() + r.k();
        let v2 = r.x() * r.i() + r.y() * r.j() + r.z() * r.k();
        let expected = (r.z() - r.y()) * r.i() + (r.x() - r.z()) * r.j() + (r.y() - r.x()) * r.k();
        assert_eq!(v1.cross(&v2).unwrap(), expected);
    }

    #[test]
    fn test_outer() {
        let n = CoordSys3D::new("N");
        let [i, j, _] = n.base_vectors();
        assert_eq!(n.i().outer(&n.j()), Dyadic::base(i.clone(), j));
        assert!(n.i().outer(&Vector::zero()).is_zero());
        let d = (n.i() * 2).outer(&(n.i() * 3));
        assert_eq!(d, Dyadic::base(i.clone(), i) * Expr::integer(6));
    }

    #[test]
    fn test_projection() {
        let c = CoordSys3D::new("C");
        let v1 = c.i() + c.j() + c.k();
        let v2 = c.i() * 3 + c.j() * 4;
        let seven_thirds = Expr::rational(7, 3);
        assert_eq!(v1.scalar_projection(&v2).unwrap(), seven_thirds.clone());
        assert_eq!(v1.projection(&v2).unwrap(), v1.scale(&seven_thirds));
        assert!(Vector::zero().projection(&v2).unwrap().is_zero());
        assert_eq!(Vector::zero().scalar_projection(&v2).unwrap(), Expr::zero());
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let c = CoordSys3D::new("C");
        let v = c.i() * 3 + c.j() * 4;
        assert_eq!(v.magnitude().unwrap(), Expr::integer(5));
        assert_eq!(
            v.normalize().unwrap(),
            c.i() * Expr::rational(3, 5) + c.j() * Expr::rational(4, 5)
        );
        assert!(Vector::zero().normalize().unwrap_err().is_value_error());
    }

    #[test]
    fn test_to_matrix() {
        let c = CoordSys3D::new("C");
        let (a, b) = (Expr::symbol("a"), Expr::symbol("b"));
        let v = a.clone() * c.i() + b.clone() * c.j();
        assert_eq!(
            v.to_matrix(&c).unwrap(),
            Matrix::column(vec![a, b, Expr::zero()])
        );
    }

    #[test]
    fn test_checked_div() {
        let c = CoordSys3D::new("C");
        let err = c.i().checked_div(&Expr::zero()).unwrap_err();
        assert!(err.is_value_error());
        assert_eq!(c.i().checked_div(&Expr::integer(2)).unwrap(), c.i() * Expr::rational(1, 2));
    }

    #[test]
    fn test_product_operators() {
        let c = CoordSys3D::new("C");
        let v = c.i() * 3 + c.j() * 4 + c.k() * 5;
        assert_eq!((c.i() & c.i()).unwrap(), Expr::one());
        assert_eq!((&v & &c.j()).unwrap(), Expr::integer(4));
        assert_eq!((&v ^ &c.i()).unwrap(), c.j() * 5 - c.k() * 4);
        assert_eq!((c.i() ^ c.j()).unwrap(), c.k());
        assert!((Vector::zero() | v.clone()).is_zero());
        assert_eq!((c.i() | c.j()).to_string(), "(C.i|C.j)");
        assert_eq!(&v | &c.k(), v.outer(&c.k()));
    }
}
