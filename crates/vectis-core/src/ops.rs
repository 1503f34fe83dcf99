//! Operator overloads for [`Expr`].
//!
//! Every operator routes through the canonical constructors, so `a + b`
//! and `Expr::add_all([a, b])` are interchangeable.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::expr::Expr;

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::add_all([self, rhs])
    }
}

impl Add<&Expr> for Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Expr {
        Expr::add_all([self, rhs.clone()])
    }
}

impl Add for &Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Expr {
        Expr::add_all([self.clone(), rhs.clone()])
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::add_all([self, -rhs])
    }
}

impl Sub<&Expr> for Expr {
    type Output = Expr;

    fn sub(self, rhs: &Expr) -> Expr {
        Expr::add_all([self, -rhs])
    }
}

impl Sub for &Expr {
    type Output = Expr;

    fn sub(self, rhs: &Expr) -> Expr {
        Expr::add_all([self.clone(), -rhs])
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::mul_all([self, rhs])
    }
}

impl Mul<&Expr> for Expr {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Expr {
        Expr::mul_all([self, rhs.clone()])
    }
}

impl Mul for &Expr {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Expr {
        Expr::mul_all([self.clone(), rhs.clone()])
    }
}

/// Symbolic division: `a / b` is `a * b^-1`.
///
/// No check is made for a zero divisor; `x / 0` stays as `x * 0^-1`.
impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::mul_all([self, rhs.recip()])
    }
}

impl Div<&Expr> for Expr {
    type Output = Expr;

    fn div(self, rhs: &Expr) -> Expr {
        Expr::mul_all([self, rhs.clone().recip()])
    }
}

impl Div for &Expr {
    type Output = Expr;

    fn div(self, rhs: &Expr) -> Expr {
        Expr::mul_all([self.clone(), rhs.clone().recip()])
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::mul_all([Expr::integer(-1), self])
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::mul_all([Expr::integer(-1), self.clone()])
    }
}

impl Add<i64> for Expr {
    type Output = Expr;

    fn add(self, rhs: i64) -> Expr {
        Expr::add_all([self, Expr::integer(rhs)])
    }
}

impl Sub<i64> for Expr {
    type Output = Expr;

    fn sub(self, rhs: i64) -> Expr {
        Expr::add_all([self, Expr::integer(-rhs)])
    }
}

impl Mul<i64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: i64) -> Expr {
        Expr::mul_all([Expr::integer(rhs), self])
    }
}

impl Mul<Expr> for i64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::mul_all([Expr::integer(self), rhs])
    }
}

impl Div<i64> for Expr {
    type Output = Expr;

    fn div(self, rhs: i64) -> Expr {
        self / Expr::integer(rhs)
    }
}

impl Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Expr {
        Expr::add_all(iter)
    }
}

impl<'a> Sum<&'a Expr> for Expr {
    fn sum<I: Iterator<Item = &'a Expr>>(iter: I) -> Expr {
        Expr::add_all(iter.cloned())
    }
}
