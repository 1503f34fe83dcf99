//! Partial differentiation of expressions.
//!
//! A derivation D satisfies:
//! - D(a + b) = D(a) + D(b)  (additivity)
//! - D(a · b) = D(a)·b + a·D(b)  (Leibniz rule)
//!
//! [`PartialDerivative`] is the derivation ∂/∂v for a symbol or a coordinate
//! variable v; every other atom is a constant.

use crate::expr::{Expr, Func};

/// A derivation on expressions.
pub trait Derivation<T> {
    /// Computes the derivative of an element.
    fn derive(&self, x: &T) -> T;

    /// Checks if an element is a constant (derivative is zero).
    fn is_constant(&self, x: &T) -> bool;
}

/// The partial derivative with respect to one variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialDerivative {
    var: Expr,
}

impl PartialDerivative {
    /// Creates ∂/∂`var`.
    #[must_use]
    pub fn new(var: Expr) -> Self {
        Self { var }
    }

    /// Returns the differentiation variable.
    #[must_use]
    pub fn var(&self) -> &Expr {
        &self.var
    }
}

impl Derivation<Expr> for PartialDerivative {
    fn derive(&self, x: &Expr) -> Expr {
        if self.is_constant(x) {
            return Expr::zero();
        }
        match x {
            Expr::Number(_) | Expr::Symbol(_) | Expr::Coordinate(_) => {
                if *x == self.var {
                    Expr::one()
                } else {
                    Expr::zero()
                }
            }
            Expr::Add(args) => Expr::add_all(args.iter().map(|a| self.derive(a))),
            Expr::Mul(args) => {
                // Leibniz: sum over i of (D f_i) * prod_{j != i} f_j
                Expr::add_all((0..args.len()).map(|i| {
                    let others = args
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, f)| f.clone());
                    Expr::mul_all(std::iter::once(self.derive(&args[i])).chain(others))
                }))
            }
            Expr::Pow(pair) => {
                let (base, exp) = (&pair.0, &pair.1);
                if self.is_constant(exp) {
                    // d(b^n) = n * b^(n-1) * db
                    let lowered = base.clone().pow(exp - &Expr::one());
                    Expr::mul_all([exp.clone(), lowered, self.derive(base)])
                } else {
                    // d(b^e) = b^e * (de * ln b + e * db / b)
                    let log_term = self.derive(exp) * base.clone().ln();
                    let ratio_term = Expr::mul_all([
                        exp.clone(),
                        self.derive(base),
                        base.clone().recip(),
                    ]);
                    x.clone() * (log_term + ratio_term)
                }
            }
            Expr::Function(func, arg) => {
                let inner = self.derive(arg);
                let arg = (**arg).clone();
                let outer = match func {
                    Func::Sin => arg.cos(),
                    Func::Cos => -arg.sin(),
                    Func::Exp => arg.exp(),
                    Func::Ln => arg.recip(),
                };
                outer * inner
            }
        }
    }

    fn is_constant(&self, x: &Expr) -> bool {
        !x.has(&self.var)
    }
}

impl Expr {
    /// Differentiates with respect to `var`.
    #[must_use]
    pub fn diff(&self, var: &Expr) -> Expr {
        PartialDerivative::new(var.clone()).derive(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    fn y() -> Expr {
        Expr::symbol("y")
    }

    #[test]
    fn test_polynomial() {
        // d/dx (x^3 + 2x) = 3x^2 + 2
        let f = x().powi(3) + x() * 2;
        assert_eq!(f.diff(&x()), x().powi(2) * 3 + 2);
    }

    #[test]
    fn test_product_rule() {
        // d/dx (x*y) = y
        assert_eq!((x() * y()).diff(&x()), y());
        // d/dx (x^2 * y) = 2*x*y
        assert_eq!((x().powi(2) * y()).diff(&x()), x() * y() * 2);
    }

    #[test]
    fn test_chain_rule() {
        // d/dx sin(x^2) = 2*x*cos(x^2)
        let f = x().powi(2).sin();
        assert_eq!(f.diff(&x()), x() * x().powi(2).cos() * 2);
        // d/dx ln(x) = 1/x
        assert_eq!(x().ln().diff(&x()), x().recip());
    }

    #[test]
    fn test_constants() {
        let d = PartialDerivative::new(x());
        assert!(d.is_constant(&y()));
        assert_eq!(d.derive(&(y().sin() + 5)), Expr::zero());
    }

    #[test]
    fn test_sqrt() {
        // d/dx sqrt(x) = 1/2 * x^(-1/2)
        let f = x().sqrt();
        assert_eq!(
            f.diff(&x()),
            x().pow(Expr::rational(-1, 2)) * Expr::rational(1, 2)
        );
    }
}
