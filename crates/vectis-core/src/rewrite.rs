//! Structural rewrites: expansion and substitution.

use crate::expr::Expr;

impl Expr {
    /// Distributes products over sums and expands positive integer powers
    /// of sums.
    #[must_use]
    pub fn expand(&self) -> Expr {
        match self {
            Expr::Number(_) | Expr::Symbol(_) | Expr::Coordinate(_) => self.clone(),
            Expr::Add(args) => Expr::add_all(args.iter().map(Expr::expand)),
            Expr::Mul(args) => args
                .iter()
                .map(Expr::expand)
                .fold(Expr::one(), |acc, f| distribute(&acc, &f)),
            Expr::Pow(pair) => {
                let base = pair.0.expand();
                let exp = pair.1.expand();
                match (&base, exp.as_number().and_then(|n| n.to_i64())) {
                    (Expr::Add(_), Some(n)) if n > 1 => {
                        (1..n).fold(base.clone(), |acc, _| distribute(&acc, &base))
                    }
                    _ => base.pow(exp),
                }
            }
            Expr::Function(func, arg) => Expr::apply(*func, arg.expand()),
        }
    }

    /// Replaces every occurrence of `old` by `new` and re-canonicalizes.
    #[must_use]
    pub fn subs(&self, old: &Expr, new: &Expr) -> Expr {
        if self == old {
            return new.clone();
        }
        match self {
            Expr::Number(_) | Expr::Symbol(_) | Expr::Coordinate(_) => self.clone(),
            Expr::Add(args) => Expr::add_all(args.iter().map(|a| a.subs(old, new))),
            Expr::Mul(args) => Expr::mul_all(args.iter().map(|a| a.subs(old, new))),
            Expr::Pow(pair) => pair.0.subs(old, new).pow(pair.1.subs(old, new)),
            Expr::Function(func, arg) => Expr::apply(*func, arg.subs(old, new)),
        }
    }
}

/// Multiplies two already-expanded expressions term by term.
fn distribute(lhs: &Expr, rhs: &Expr) -> Expr {
    let left = summands(lhs);
    let right = summands(rhs);
    Expr::add_all(
        left.iter()
            .flat_map(|l| right.iter().map(move |r| l * r)),
    )
}

fn summands(e: &Expr) -> Vec<Expr> {
    match e {
        Expr::Add(args) => args.to_vec(),
        other => vec![other.clone()],
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
    fn test_expand_product() {
        // (x + 1)(x - 1) = x^2 - 1
        let e = (x() + 1) * (x() - 1);
        assert_eq!(e.expand(), x().powi(2) - 1);
    }

    #[test]
    fn test_expand_square() {
        // (x + y)^2 = x^2 + 2xy + y^2
        let e = (x() + y()).powi(2);
        assert_eq!(e.expand(), x().powi(2) + x() * y() * 2 + y().powi(2));
    }

    #[test]
    fn test_expand_nested_function() {
        let e = (x() * (x() + 1)).sin();
        assert_eq!(e.expand(), (x().powi(2) + x()).sin());
    }

    #[test]
    fn test_subs() {
        let q = Expr::symbol("q");
        let e = q.clone().cos() * x() + q.clone().sin();
        assert_eq!(e.subs(&q, &Expr::zero()), x());
    }
}
