//! Vector expressions.
//!
//! A [`Vector`] is one of four variants, mirroring how the value was built:
//! the zero vector, a bare base vector, one scaled base vector, or a sum.
//! Every constructor goes through [`Vector::from_components`], which prunes
//! zero coefficients and collapses a sum of one term, so structural equality
//! of vectors is equality of their component mappings.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use vectis_core::{CoordSys3D, Expr};

use crate::basis::BaseVector;

/// Mapping from base vector to coefficient. Absent keys mean zero.
pub type Components = BTreeMap<BaseVector, Expr>;

/// A base vector scaled by a coefficient that is neither 0 nor 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorMul {
    base: BaseVector,
    measure: Expr,
}

impl VectorMul {
    /// The base vector involved in the product.
    #[must_use]
    pub fn base_vector(&self) -> &BaseVector {
        &self.base
    }

    /// The scalar coefficient.
    #[must_use]
    pub fn measure_number(&self) -> &Expr {
        &self.measure
    }
}

/// A sum of at least two scaled base vectors, one entry per base vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorAdd {
    components: Components,
}

/// An atom a vector depends on: a base vector, or a symbol or base scalar
/// inside one of its coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FreeSymbol {
    /// A base vector with a nonzero coefficient.
    Vector(BaseVector),
    /// A symbol or base scalar.
    Scalar(Expr),
}

/// A symbolic vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vector {
    /// The additive identity.
    #[default]
    Zero,
    /// A single base vector with coefficient 1.
    Base(BaseVector),
    /// A single base vector with another coefficient.
    Mul(VectorMul),
    /// A sum over several base vectors.
    Add(VectorAdd),
}

impl Vector {
    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Vector::Zero
    }

    /// Builds the normalized vector with the given components.
    #[must_use]
    pub fn from_components(components: Components) -> Self {
        let mut components: Components = components
            .into_iter()
            .filter(|(_, coeff)| !coeff.is_zero())
            .collect();
        match components.len() {
            0 => Vector::Zero,
            1 => {
                let Some((base, measure)) = components.pop_first() else {
                    return Vector::Zero;
                };
                if measure.is_one() {
                    Vector::Base(base)
                } else {
                    Vector::Mul(VectorMul { base, measure })
                }
            }
            _ => Vector::Add(VectorAdd { components }),
        }
    }

    /// Builds `measure * base`.
    #[must_use]
    pub fn scaled(base: BaseVector, measure: Expr) -> Self {
        Self::from_components(Components::from([(base, measure)]))
    }

    /// Returns the component mapping.
    #[must_use]
    pub fn components(&self) -> Components {
        match self {
            Vector::Zero => Components::new(),
            Vector::Base(base) => Components::from([(base.clone(), Expr::one())]),
            Vector::Mul(m) => Components::from([(m.base.clone(), m.measure.clone())]),
            Vector::Add(a) => a.components.clone(),
        }
    }

    /// Returns the coefficient of `base`, zero if absent.
    #[must_use]
    pub fn coefficient(&self, base: &BaseVector) -> Expr {
        match self {
            Vector::Zero => Expr::zero(),
            Vector::Base(b) if b == base => Expr::one(),
            Vector::Mul(m) if m.base == *base => m.measure.clone(),
            Vector::Add(a) => a.components.get(base).cloned().unwrap_or_else(Expr::zero),
            _ => Expr::zero(),
        }
    }

    /// Returns true for the zero vector.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Vector::Zero)
    }

    /// The coordinate system this vector is re-expressed into when it is the
    /// right operand of a dot product: the system of its first component.
    #[must_use]
    pub fn system(&self) -> Option<CoordSys3D> {
        match self {
            Vector::Zero => None,
            Vector::Base(base) => Some(base.system().clone()),
            Vector::Mul(m) => Some(m.base.system().clone()),
            Vector::Add(a) => a.components.keys().next().map(|b| b.system().clone()),
        }
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Expr) -> Self {
        if factor.is_zero() {
            return Vector::Zero;
        }
        self.map_coefficients(|c| c * factor)
    }

    /// Applies `f` to every coefficient and renormalizes.
    #[must_use]
    pub fn map_coefficients(&self, f: impl Fn(&Expr) -> Expr) -> Self {
        Self::from_components(
            self.components()
                .into_iter()
                .map(|(base, coeff)| {
                    let mapped = f(&coeff);
                    (base, mapped)
                })
                .collect(),
        )
    }

    /// Partitions this vector by coordinate system.
    ///
    /// Summing the values reconstructs `self`.
    #[must_use]
    pub fn separate(&self) -> BTreeMap<CoordSys3D, Vector> {
        self.components()
            .into_iter()
            .fold(BTreeMap::new(), |mut parts, (base, measure)| {
                let system = base.system().clone();
                let term = Vector::scaled(base, measure);
                let accumulated = parts.remove(&system).unwrap_or_default() + term;
                parts.insert(system, accumulated);
                parts
            })
    }

    /// The base vectors of `self` together with the free symbols of its
    /// coefficients. The zero vector has none.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<FreeSymbol> {
        self.components()
            .into_iter()
            .flat_map(|(base, coeff)| {
                std::iter::once(FreeSymbol::Vector(base))
                    .chain(coeff.free_symbols().into_iter().map(FreeSymbol::Scalar))
            })
            .collect()
    }

    /// Expands every coefficient.
    #[must_use]
    pub fn expand(&self) -> Self {
        self.map_coefficients(Expr::expand)
    }

    /// Differentiates every coefficient with respect to `var`.
    ///
    /// Base vectors are constant.
    #[must_use]
    pub fn diff(&self, var: &Expr) -> Self {
        self.map_coefficients(|c| c.diff(var))
    }

    /// Substitutes `new` for `old` in every coefficient.
    #[must_use]
    pub fn subs(&self, old: &Expr, new: &Expr) -> Self {
        self.map_coefficients(|c| c.subs(old, new))
    }

    /// Renders this vector for typesetting.
    #[must_use]
    pub fn to_latex(&self) -> String {
        if self.is_zero() {
            return "\\mathbf{\\hat{0}}".to_string();
        }
        self.components()
            .iter()
            .map(|(base, coeff)| {
                if coeff.is_one() {
                    base.latex_form().to_string()
                } else {
                    format!("({coeff}){}", base.latex_form())
                }
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl From<BaseVector> for Vector {
    fn from(base: BaseVector) -> Self {
        Vector::Base(base)
    }
}

/// Prints a coefficient, parenthesized when it is not a plain product.
pub(crate) fn measure_string(measure: &Expr) -> String {
    let printed = measure.to_string();
    if printed.contains(&['(', '-', '+', ' '][..]) {
        format!("({printed})")
    } else {
        printed
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let terms: Vec<String> = self
            .components()
            .iter()
            .map(|(base, coeff)| {
                if coeff.is_one() {
                    base.to_string()
                } else {
                    format!("{}*{base}", measure_string(coeff))
                }
            })
            .collect();
        f.write_str(&terms.join(" + "))
    }
}

// === Arithmetic ===

fn add_components(mut lhs: Components, rhs: Components) -> Components {
    for (base, coeff) in rhs {
        let merged = match lhs.remove(&base) {
            Some(prev) => prev + coeff,
            None => coeff,
        };
        lhs.insert(base, merged);
    }
    lhs
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        Vector::from_components(add_components(self.components(), rhs.components()))
    }
}

impl Add<&Vector> for Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        self + rhs.clone()
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        self.clone() + rhs.clone()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(&Expr::integer(-1))
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(&Expr::integer(-1))
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self + (-rhs)
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        self.clone() + (-rhs)
    }
}

impl Mul<Expr> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Expr) -> Vector {
        self.scale(&rhs)
    }
}

impl Mul<&Expr> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &Expr) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for Expr {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(&self)
    }
}

impl Mul<&Vector> for &Expr {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Mul<i64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i64) -> Vector {
        self.scale(&Expr::integer(rhs))
    }
}

impl Mul<Vector> for i64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(&Expr::integer(self))
    }
}

impl num_traits::Zero for Vector {
    fn zero() -> Self {
        Vector::Zero
    }

    fn is_zero(&self) -> bool {
        matches!(self, Vector::Zero)
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::Zero, |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::CoordSysVectors;

    #[test]
    fn test_variant_collapse() {
        let c = CoordSys3D::new("C");
        let i = c.i();
        assert!(matches!(i.clone() * 1, Vector::Base(_)));
        assert!(matches!(i.clone() * 3, Vector::Mul(_)));
        assert!(matches!(i.clone() * 0, Vector::Zero));
        assert!(matches!(i.clone() + c.j(), Vector::Add(_)));
        assert!(matches!(i.clone() - i.clone(), Vector::Zero));
        assert!(matches!((i.clone() + c.j()) - c.j(), Vector::Base(_)));
    }

    #[test]
    fn test_components_merge() {
        let c = CoordSys3D::new("C");
        let [bi, bj, _] = c.base_vectors();
        let v = c.i() * 2 + c.j() + c.i() * 3;
        assert_eq!(v.coefficient(&bi), Expr::integer(5));
        assert_eq!(v.coefficient(&bj), Expr::one());
        assert_eq!(v.components().len(), 2);
    }

    #[test]
    fn test_display() {
        let c = CoordSys3D::new("C");
        let v = c.i() * 3 + c.j() * 4 + c.k() * 5;
        assert_eq!(v.to_string(), "3*C.i + 4*C.j + 5*C.k");
        assert_eq!((c.j() * 5 + c.k() * -4).to_string(), "5*C.j + (-4)*C.k");
        assert_eq!(Vector::zero().to_string(), "0");
        let r = CoordSys3D::new("R");
        let w = (r.y() * -1 + r.z()) * r.i();
        assert_eq!(w.to_string(), "(R.z - R.y)*R.i");
    }

    #[test]
    fn test_separate() {
        let r1 = CoordSys3D::new("R1");
        let r2 = CoordSys3D::new("R2");
        let v = r1.i() + r2.i();
        let parts = v.separate();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[&r1], r1.i());
        assert_eq!(parts[&r2], r2.i());
        assert_eq!(parts.into_values().sum::<Vector>(), v);
    }

    #[test]
    fn test_diff_and_subs() {
        let c = CoordSys3D::new("C");
        let v = c.x().powi(2) * c.i() + c.y() * c.j();
        assert_eq!(v.diff(&c.x()), c.x() * 2 * c.i());
        assert_eq!(v.subs(&c.y(), &Expr::zero()), c.x().powi(2) * c.i());
    }

    #[test]
    fn test_free_symbols() {
        let c = CoordSys3D::new("C");
        let [bi, bj, _] = c.base_vectors();
        let a = Expr::symbol("a");
        let v = a.clone() * c.i() + c.x() * c.j();
        assert_eq!(
            v.free_symbols(),
            BTreeSet::from([
                FreeSymbol::Vector(bi.clone()),
                FreeSymbol::Vector(bj),
                FreeSymbol::Scalar(a),
                FreeSymbol::Scalar(c.x()),
            ])
        );
        assert_eq!(c.i().free_symbols(), BTreeSet::from([FreeSymbol::Vector(bi)]));
        assert!(Vector::zero().free_symbols().is_empty());
    }

    #[test]
    fn test_latex() {
        let c = CoordSys3D::new("C");
        assert_eq!(c.i().to_latex(), "\\mathbf{\\hat{i}_{C}}");
        assert_eq!(Vector::zero().to_latex(), "\\mathbf{\\hat{0}}");
    }
}
