//! Scalar expression nodes.
//!
//! An [`Expr`] is an immutable tree whose children are shared through `Arc`.
//! Compound nodes are only ever built through the canonicalizing constructors
//! in [`crate::canonical`], so two mathematically identical expressions in
//! canonical form compare equal structurally.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use num_traits::{One, Zero};

use crate::coordsys::{BaseScalar, CoordSys3D};
use crate::number::Number;

/// A named free symbol.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Elementary functions of one argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Func {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Natural exponential.
    Exp,
    /// Natural logarithm.
    Ln,
}

impl Func {
    /// Returns the printed name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Exp => "exp",
            Func::Ln => "log",
        }
    }
}

/// A symbolic scalar expression.
///
/// Variant order matters: the derived `Ord` puts numbers first, which the
/// canonical constructors rely on when sorting arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr {
    // === Atoms ===
    /// An exact rational number.
    Number(Number),

    /// A free symbol.
    Symbol(Symbol),

    /// A coordinate variable of a coordinate system.
    Coordinate(BaseScalar),

    // === Compound Expressions ===
    /// Sum of expressions.
    ///
    /// Invariant: at least 2 arguments, sorted, at most one number (first),
    /// no nested sums, no two terms differing only by numeric coefficient.
    Add(Arc<[Expr]>),

    /// Product of expressions.
    ///
    /// Invariant: at least 2 arguments, sorted, at most one number (first,
    /// never 0 or 1), no nested products, each base appears once.
    Mul(Arc<[Expr]>),

    /// Power expression `base^exp`.
    Pow(Arc<(Expr, Expr)>),

    /// A function application.
    Function(Func, Arc<Expr>),
}

impl Expr {
    /// The number zero.
    #[must_use]
    pub fn zero() -> Self {
        Expr::Number(Number::zero())
    }

    /// The number one.
    #[must_use]
    pub fn one() -> Self {
        Expr::Number(Number::one())
    }

    /// An integer literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Expr::Number(Number::new(value))
    }

    /// A rational literal `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        Expr::Number(Number::ratio(numerator, denominator))
    }

    /// A free symbol.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::Symbol(_) | Expr::Coordinate(_))
    }

    /// Returns the numeric value if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if this is literally zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Zero::is_zero)
    }

    /// Returns true if this is literally one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(One::is_one)
    }

    /// Returns true if the leading numeric coefficient is negative.
    #[must_use]
    pub fn is_negative_term(&self) -> bool {
        match self {
            Expr::Number(n) => n.is_negative(),
            Expr::Mul(args) => args[0].as_number().is_some_and(Number::is_negative),
            _ => false,
        }
    }

    /// Returns the children of this node.
    #[must_use]
    pub fn args(&self) -> Vec<Expr> {
        match self {
            Expr::Number(_) | Expr::Symbol(_) | Expr::Coordinate(_) => Vec::new(),
            Expr::Add(args) | Expr::Mul(args) => args.to_vec(),
            Expr::Pow(pair) => vec![pair.0.clone(), pair.1.clone()],
            Expr::Function(_, arg) => vec![(**arg).clone()],
        }
    }

    /// Splits into numeric coefficient and remaining term: `3*x*y -> (3, x*y)`.
    #[must_use]
    pub fn as_coeff_term(&self) -> (Number, Expr) {
        match self {
            Expr::Number(n) => (n.clone(), Expr::one()),
            Expr::Mul(args) => match args[0].as_number() {
                Some(n) => {
                    let rest = &args[1..];
                    let term = if rest.len() == 1 {
                        rest[0].clone()
                    } else {
                        Expr::Mul(Arc::from(rest))
                    };
                    (n.clone(), term)
                }
                None => (Number::one(), self.clone()),
            },
            _ => (Number::one(), self.clone()),
        }
    }

    /// Splits into base and exponent: `x^2 -> (x, 2)`, `x -> (x, 1)`.
    #[must_use]
    pub fn as_base_exp(&self) -> (Expr, Expr) {
        match self {
            Expr::Pow(pair) => (pair.0.clone(), pair.1.clone()),
            _ => (self.clone(), Expr::one()),
        }
    }

    /// Returns true if `pattern` occurs anywhere in this expression.
    #[must_use]
    pub fn has(&self, pattern: &Expr) -> bool {
        if self == pattern {
            return true;
        }
        match self {
            Expr::Number(_) | Expr::Symbol(_) | Expr::Coordinate(_) => false,
            Expr::Add(args) | Expr::Mul(args) => args.iter().any(|a| a.has(pattern)),
            Expr::Pow(pair) => pair.0.has(pattern) || pair.1.has(pattern),
            Expr::Function(_, arg) => arg.has(pattern),
        }
    }

    /// Collects the coordinate systems whose base scalars appear here.
    #[must_use]
    pub fn coordinate_systems(&self) -> BTreeSet<CoordSys3D> {
        let mut out = BTreeSet::new();
        self.collect_systems(&mut out);
        out
    }

    /// Collects the symbols and base scalars this expression depends on.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<Expr> {
        let mut out = BTreeSet::new();
        self.collect_free(&mut out);
        out
    }

    fn collect_free(&self, out: &mut BTreeSet<Expr>) {
        match self {
            Expr::Symbol(_) | Expr::Coordinate(_) => {
                out.insert(self.clone());
            }
            Expr::Number(_) => {}
            Expr::Add(args) | Expr::Mul(args) => {
                for arg in args.iter() {
                    arg.collect_free(out);
                }
            }
            Expr::Pow(pair) => {
                pair.0.collect_free(out);
                pair.1.collect_free(out);
            }
            Expr::Function(_, arg) => arg.collect_free(out),
        }
    }

    fn collect_systems(&self, out: &mut BTreeSet<CoordSys3D>) {
        match self {
            Expr::Coordinate(scalar) => {
                out.insert(scalar.system().clone());
            }
            Expr::Number(_) | Expr::Symbol(_) => {}
            Expr::Add(args) | Expr::Mul(args) => {
                for arg in args.iter() {
                    arg.collect_systems(out);
                }
            }
            Expr::Pow(pair) => {
                pair.0.collect_systems(out);
                pair.1.collect_systems(out);
            }
            Expr::Function(_, arg) => arg.collect_systems(out),
        }
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Expr::Number(n)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::integer(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::integer(i64::from(n))
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Expr::Symbol(s)
    }
}

impl From<BaseScalar> for Expr {
    fn from(s: BaseScalar) -> Self {
        Expr::Coordinate(s)
    }
}
