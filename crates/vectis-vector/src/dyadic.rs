//! Dyadics: formal sums of outer products of base vectors.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use vectis_core::{CoordSys3D, Expr, Matrix};

use crate::basis::{BaseVector, CoordSysVectors};
use crate::error::Result;
use crate::vector::{measure_string, Vector};

/// The outer product `(left|right)` of two base vectors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseDyadic {
    left: BaseVector,
    right: BaseVector,
}

impl BaseDyadic {
    /// Creates `(left|right)`.
    #[must_use]
    pub fn new(left: BaseVector, right: BaseVector) -> Self {
        Self { left, right }
    }

    /// The left vector factor.
    #[must_use]
    pub fn left(&self) -> &BaseVector {
        &self.left
    }

    /// The right vector factor.
    #[must_use]
    pub fn right(&self) -> &BaseVector {
        &self.right
    }
}

impl fmt::Display for BaseDyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.left, self.right)
    }
}

/// A dyadic: coefficients over ordered pairs of base vectors.
///
/// Zero coefficients are never stored; the empty mapping is the zero dyadic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dyadic {
    components: BTreeMap<BaseDyadic, Expr>,
}

impl Dyadic {
    /// The zero dyadic.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a dyadic from its components, dropping zero coefficients.
    #[must_use]
    pub fn from_components(components: BTreeMap<BaseDyadic, Expr>) -> Self {
        Self {
            components: components
                .into_iter()
                .filter(|(_, coeff)| !coeff.is_zero())
                .collect(),
        }
    }

    /// The unit dyadic `(left|right)`.
    #[must_use]
    pub fn base(left: BaseVector, right: BaseVector) -> Self {
        Self::from_components(BTreeMap::from([(BaseDyadic::new(left, right), Expr::one())]))
    }

    /// Returns the component mapping.
    #[must_use]
    pub fn components(&self) -> &BTreeMap<BaseDyadic, Expr> {
        &self.components
    }

    /// Iterates over `(left, coefficient, right)` terms.
    pub fn terms(&self) -> impl Iterator<Item = (&BaseVector, &Expr, &BaseVector)> {
        self.components
            .iter()
            .map(|(bd, coeff)| (bd.left(), coeff, bd.right()))
    }

    /// Returns true for the zero dyadic.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.components.is_empty()
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Expr) -> Self {
        self.map_coefficients(|c| c * factor)
    }

    /// Expands every coefficient.
    #[must_use]
    pub fn expand(&self) -> Self {
        self.map_coefficients(Expr::expand)
    }

    fn map_coefficients(&self, f: impl Fn(&Expr) -> Expr) -> Self {
        Self::from_components(
            self.components
                .iter()
                .map(|(bd, coeff)| (bd.clone(), f(coeff)))
                .collect(),
        )
    }

    /// The dot product `self · vector`, a vector.
    ///
    /// # Errors
    ///
    /// Fails if a right factor cannot be re-expressed into `vector`'s system.
    pub fn dot(&self, vector: &Vector) -> Result<Vector> {
        if vector.is_zero() {
            return Ok(Vector::zero());
        }
        self.terms().try_fold(Vector::zero(), |acc, (left, coeff, right)| {
            let projected = Vector::from(right.clone()).dot(vector)?;
            Ok(acc + Vector::scaled(left.clone(), coeff * &projected))
        })
    }

    /// The 3×3 matrix `M[r][c] = e_r · self · e_c` in `system`.
    ///
    /// # Errors
    ///
    /// Fails if the dyadic cannot be re-expressed into `system`.
    pub fn to_matrix(&self, system: &CoordSys3D) -> Result<Matrix> {
        let basis = system.base_vectors().map(Vector::from);
        let rows = basis
            .iter()
            .map(|row| {
                let left = row.dot_dyadic(self)?;
                basis.iter().map(|col| left.dot(col)).collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix::from_rows(rows))
    }
}

impl fmt::Display for Dyadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let terms: Vec<String> = self
            .components
            .iter()
            .map(|(bd, coeff)| {
                if coeff.is_one() {
                    bd.to_string()
                } else {
                    format!("{}*{bd}", measure_string(coeff))
                }
            })
            .collect();
        f.write_str(&terms.join(" + "))
    }
}

impl From<BaseDyadic> for Dyadic {
    fn from(bd: BaseDyadic) -> Self {
        Self::from_components(BTreeMap::from([(bd, Expr::one())]))
    }
}

impl num_traits::Zero for Dyadic {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.components.is_empty()
    }
}

impl Add for Dyadic {
    type Output = Dyadic;

    fn add(self, rhs: Dyadic) -> Dyadic {
        let mut components = self.components;
        for (bd, coeff) in rhs.components {
            let merged = match components.remove(&bd) {
                Some(prev) => prev + coeff,
                None => coeff,
            };
            components.insert(bd, merged);
        }
        Dyadic::from_components(components)
    }
}

impl Add<&Dyadic> for Dyadic {
    type Output = Dyadic;

    fn add(self, rhs: &Dyadic) -> Dyadic {
        self + rhs.clone()
    }
}

impl Neg for Dyadic {
    type Output = Dyadic;

    fn neg(self) -> Dyadic {
        self.scale(&Expr::integer(-1))
    }
}

impl Sub for Dyadic {
    type Output = Dyadic;

    fn sub(self, rhs: Dyadic) -> Dyadic {
        self + (-rhs)
    }
}

impl Mul<Dyadic> for Expr {
    type Output = Dyadic;

    fn mul(self, rhs: Dyadic) -> Dyadic {
        rhs.scale(&self)
    }
}

impl Mul<Expr> for Dyadic {
    type Output = Dyadic;

    fn mul(self, rhs: Expr) -> Dyadic {
        self.scale(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let n = CoordSys3D::new("N");
        let [i, j, _] = n.base_vectors();
        assert_eq!(Dyadic::base(i.clone(), j.clone()).to_string(), "(N.i|N.j)");
        let d = Dyadic::base(i.clone(), j) * Expr::integer(2) - Dyadic::base(i.clone(), i);
        assert_eq!(d.to_string(), "(-1)*(N.i|N.i) + 2*(N.i|N.j)");
        assert_eq!(Dyadic::zero().to_string(), "0");
    }

    #[test]
    fn test_add_cancels() {
        let n = CoordSys3D::new("N");
        let [i, j, _] = n.base_vectors();
        let d = Dyadic::base(i, j);
        assert!((d.clone() - d).is_zero());
    }

    #[test]
    fn test_dyadic_dot_vector() {
        let n = CoordSys3D::new("N");
        let [i, j, _] = n.base_vectors();
        // (i|j) · j = i
        let d = Dyadic::base(i.clone(), j.clone());
        assert_eq!(d.dot(&n.j()).unwrap(), n.i());
        assert_eq!(d.dot(&n.i()).unwrap(), Vector::zero());
    }

    #[test]
    fn test_to_matrix() {
        let n = CoordSys3D::new("N");
        let [i, j, _] = n.base_vectors();
        let a = Expr::symbol("a");
        let d = a.clone() * Dyadic::base(i, j);
        let m = d.to_matrix(&n).unwrap();
        assert_eq!(m[(0, 1)], a);
        assert_eq!(m[(1, 0)], Expr::zero());
    }
}
