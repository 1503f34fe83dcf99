//! Canonicalizing constructors.
//!
//! All compound expressions are built here. The constructors apply the same
//! identities an e-graph would saturate with (`x + 0 = x`, `x * 1 = x`,
//! `x * 0 = 0`, `x + x = 2x`, `x * x = x^2`, `(x^a)^n = x^(a n)`), but
//! greedily and in a fixed order, so that the result is a normal form: two
//! expressions built from equal sums of equal products compare equal.

use std::collections::BTreeMap;
use std::sync::Arc;

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::expr::{Expr, Func};
use crate::number::Number;

impl Expr {
    /// Builds the canonical sum of `terms`.
    pub fn add_all<I: IntoIterator<Item = Expr>>(terms: I) -> Expr {
        let mut stack: SmallVec<[Expr; 8]> = terms.into_iter().collect();
        let mut constant = Number::zero();
        let mut collected: BTreeMap<Expr, Number> = BTreeMap::new();

        while let Some(term) = stack.pop() {
            match term {
                Expr::Number(n) => constant = &constant + &n,
                Expr::Add(args) => stack.extend(args.iter().cloned()),
                other => {
                    let (coeff, rest) = other.as_coeff_term();
                    let entry = collected.entry(rest).or_insert_with(Number::zero);
                    *entry = &*entry + &coeff;
                }
            }
        }

        let mut args: Vec<Expr> = Vec::with_capacity(collected.len() + 1);
        if !constant.is_zero() {
            args.push(Expr::Number(constant));
        }
        args.extend(
            collected
                .into_iter()
                .filter(|(_, coeff)| !coeff.is_zero())
                .map(|(term, coeff)| scale_term(coeff, term)),
        );
        args.sort();

        match args.len() {
            0 => Expr::zero(),
            1 => args.swap_remove(0),
            _ => Expr::Add(Arc::from(args)),
        }
    }

    /// Builds the canonical product of `factors`.
    pub fn mul_all<I: IntoIterator<Item = Expr>>(factors: I) -> Expr {
        let mut stack: SmallVec<[Expr; 8]> = factors.into_iter().collect();
        let mut coeff = Number::one();
        let mut powers: BTreeMap<Expr, Expr> = BTreeMap::new();

        while let Some(factor) = stack.pop() {
            match factor {
                Expr::Number(n) => coeff = &coeff * &n,
                Expr::Mul(args) => stack.extend(args.iter().cloned()),
                other => {
                    let (base, exp) = other.as_base_exp();
                    let merged = match powers.remove(&base) {
                        Some(prev) => Expr::add_all([prev, exp]),
                        None => exp,
                    };
                    powers.insert(base, merged);
                }
            }
        }

        if coeff.is_zero() {
            return Expr::zero();
        }

        let mut out: Vec<Expr> = Vec::with_capacity(powers.len());
        let mut needs_refold = false;
        for (base, exp) in powers {
            match base.pow(exp) {
                Expr::Number(n) => coeff = &coeff * &n,
                Expr::Mul(args) => {
                    needs_refold = true;
                    out.extend(args.iter().cloned());
                }
                other => out.push(other),
            }
        }

        // A merged power can itself expand to a product, e.g. sqrt(x*y)^2.
        if needs_refold {
            return Expr::mul_all(std::iter::once(Expr::Number(coeff)).chain(out));
        }
        if coeff.is_zero() {
            return Expr::zero();
        }

        // A numeric coefficient distributes over a lone sum: 2*(x + y) = 2*x + 2*y.
        if !coeff.is_one() && out.len() == 1 {
            if let Expr::Add(terms) = &out[0] {
                let coeff = Expr::Number(coeff);
                return Expr::add_all(
                    terms
                        .iter()
                        .map(|t| Expr::mul_all([coeff.clone(), t.clone()])),
                );
            }
        }

        out.sort();
        if !coeff.is_one() {
            out.insert(0, Expr::Number(coeff));
        }
        match out.len() {
            0 => Expr::one(),
            1 => out.swap_remove(0),
            _ => Expr::Mul(Arc::from(out)),
        }
    }

    /// Builds the canonical power `self^exp`.
    #[must_use]
    pub fn pow(self, exp: impl Into<Expr>) -> Expr {
        let exp = exp.into();
        if exp.is_zero() || self.is_one() {
            return Expr::one();
        }
        if exp.is_one() {
            return self;
        }

        if let (Expr::Number(base), Expr::Number(e)) = (&self, &exp) {
            if let Some(value) = number_pow(base, e) {
                return Expr::Number(value);
            }
        }

        if exp.as_number().is_some_and(Number::is_integer) {
            match &self {
                Expr::Pow(pair) => {
                    let inner = Expr::mul_all([pair.1.clone(), exp]);
                    return pair.0.clone().pow(inner);
                }
                Expr::Mul(args) => {
                    return Expr::mul_all(args.iter().map(|a| a.clone().pow(exp.clone())));
                }
                _ => {}
            }
        }

        if self.is_zero() && exp.as_number().is_some_and(Number::is_positive) {
            return Expr::zero();
        }

        Expr::Pow(Arc::new((self, exp)))
    }

    /// Integer power.
    #[must_use]
    pub fn powi(self, exp: i64) -> Expr {
        self.pow(Expr::integer(exp))
    }

    /// Square root, as the power `1/2`.
    #[must_use]
    pub fn sqrt(self) -> Expr {
        self.pow(Expr::rational(1, 2))
    }

    /// Multiplicative inverse, as the power `-1`.
    #[must_use]
    pub fn recip(self) -> Expr {
        self.pow(Expr::integer(-1))
    }

    /// Applies an elementary function with its exact special values.
    #[must_use]
    pub fn apply(func: Func, arg: Expr) -> Expr {
        match func {
            Func::Sin if arg.is_zero() => return Expr::zero(),
            Func::Cos | Func::Exp if arg.is_zero() => return Expr::one(),
            Func::Ln if arg.is_one() => return Expr::zero(),
            _ => {}
        }
        if let (Func::Exp, Expr::Function(Func::Ln, inner)) = (func, &arg) {
            return (**inner).clone();
        }
        Expr::Function(func, Arc::new(arg))
    }

    /// Sine of this expression.
    #[must_use]
    pub fn sin(self) -> Expr {
        Expr::apply(Func::Sin, self)
    }

    /// Cosine of this expression.
    #[must_use]
    pub fn cos(self) -> Expr {
        Expr::apply(Func::Cos, self)
    }

    /// Exponential of this expression.
    #[must_use]
    pub fn exp(self) -> Expr {
        Expr::apply(Func::Exp, self)
    }

    /// Natural logarithm of this expression.
    #[must_use]
    pub fn ln(self) -> Expr {
        Expr::apply(Func::Ln, self)
    }
}

/// Re-attaches a numeric coefficient to a collected term.
fn scale_term(coeff: Number, term: Expr) -> Expr {
    if coeff.is_one() {
        return term;
    }
    match term {
        Expr::Mul(args) => {
            let mut scaled = Vec::with_capacity(args.len() + 1);
            scaled.push(Expr::Number(coeff));
            scaled.extend(args.iter().cloned());
            Expr::Mul(Arc::from(scaled))
        }
        other => Expr::Mul(Arc::from(vec![Expr::Number(coeff), other])),
    }
}

/// Exact numeric powers: integer exponents, and half-integer exponents of
/// perfect squares. Anything else stays symbolic.
fn number_pow(base: &Number, exp: &Number) -> Option<Number> {
    if let Some(n) = exp.to_i64() {
        return base.checked_powi(n);
    }
    let two = Number::new(2);
    let doubled = exp * &two;
    let n = doubled.to_i64()?;
    base.exact_sqrt()?.checked_powi(n)
}
