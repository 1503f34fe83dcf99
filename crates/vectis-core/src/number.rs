//! Exact rational numbers for expression coefficients.
//!
//! Every numeric leaf of an [`Expr`](crate::Expr) is a [`Number`]. Values are
//! kept in lowest terms with a positive denominator, so structural equality of
//! numbers is numeric equality.

use dashu::base::{Abs, Inverse, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An arbitrary precision rational number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Number(RBig);

impl Number {
    /// Creates the integer `value`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(RBig::from(IBig::from(value)))
    }

    /// Creates `numerator / denominator`, reduced.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let sign = if denominator < 0 { -1 } else { 1 };
        let num = IBig::from(numerator) * IBig::from(sign);
        let den = UBig::from(denominator.unsigned_abs());
        Self(RBig::from_parts(num, den))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the value as an `i64` if it is an integer that fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numerator().try_into().ok()
        } else {
            None
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        DashuSigned::is_positive(&self.0)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn checked_recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }

    /// Raises to an integer power. Returns `None` for `0^n` with `n < 0`.
    #[must_use]
    pub fn checked_powi(&self, exp: i64) -> Option<Self> {
        let magnitude = usize::try_from(exp.unsigned_abs()).ok()?;
        let raised = Self(self.0.pow(magnitude));
        if exp < 0 {
            raised.checked_recip()
        } else {
            Some(raised)
        }
    }

    /// Returns the exact square root if this is the square of a rational.
    #[must_use]
    pub fn exact_sqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        let num = isqrt_exact(&self.numerator())?;
        let den = isqrt_exact(&self.denominator())?;
        let den = UBig::try_from(den).ok()?;
        Some(Self(RBig::from_parts(num, den)))
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

/// Integer square root of a non-negative `n`, if `n` is a perfect square.
fn isqrt_exact(n: &IBig) -> Option<IBig> {
    let two = IBig::from(2);
    if *n < two {
        return Some(n.clone());
    }
    // Newton iteration from above; decreasing until it settles on floor(sqrt(n)).
    let mut x = n.clone();
    loop {
        let y = (&x + n / &x) / &two;
        if y >= x {
            break;
        }
        x = y;
    }
    if &x * &x == *n {
        Some(x)
    } else {
        None
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Number {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({self})")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Number {
        Number(&self.0 + &rhs.0)
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Number {
        Number(&self.0 - &rhs.0)
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Number {
        Number(&self.0 * &rhs.0)
    }
}

impl Div for &Number {
    type Output = Number;

    fn div(self, rhs: Self) -> Number {
        Number(&self.0 / &rhs.0)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Number {
        Number(self.0 + rhs.0)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Number {
        Number(self.0 * rhs.0)
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number(-self.0)
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number(-&self.0)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::new(i64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_and_sign() {
        let r = Number::ratio(4, -6);
        assert_eq!(r, Number::ratio(-2, 3));
        assert!(r.is_negative());
        assert_eq!(r.to_string(), "-2/3");
    }

    #[test]
    fn test_powers() {
        let half = Number::ratio(1, 2);
        assert_eq!(half.checked_powi(3), Some(Number::ratio(1, 8)));
        assert_eq!(half.checked_powi(-2), Some(Number::new(4)));
        assert_eq!(Number::zero().checked_powi(-1), None);
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(Number::new(49).exact_sqrt(), Some(Number::new(7)));
        assert_eq!(Number::ratio(9, 4).exact_sqrt(), Some(Number::ratio(3, 2)));
        assert_eq!(Number::new(50).exact_sqrt(), None);
        assert_eq!(Number::new(-4).exact_sqrt(), None);
        assert_eq!(Number::new(1).exact_sqrt(), Some(Number::one()));
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(Number::new(-12).to_i64(), Some(-12));
        assert_eq!(Number::ratio(1, 3).to_i64(), None);
    }
}
