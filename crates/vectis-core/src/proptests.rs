//! Property-based tests for canonical expression construction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Expr;

    fn atom() -> impl Strategy<Value = Expr> {
        prop_oneof![
            (-6i64..6i64).prop_map(Expr::integer),
            prop::sample::select(vec!["a", "b", "c"]).prop_map(Expr::symbol),
        ]
    }

    // Small sums of products of atoms.
    fn expr() -> impl Strategy<Value = Expr> {
        atom().prop_recursive(2, 12, 3, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 2..=3).prop_map(Expr::add_all),
                proptest::collection::vec(inner, 2..=3).prop_map(Expr::mul_all),
            ]
        })
    }

    proptest! {
        #[test]
        fn add_commutative(a in expr(), b in expr()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in expr(), b in expr(), c in expr()) {
            prop_assert_eq!((&a + &b) + &c, a + (&b + &c));
        }

        #[test]
        fn mul_commutative(a in expr(), b in expr()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn add_identity(a in expr()) {
            prop_assert_eq!(&a + &Expr::zero(), a.clone());
            prop_assert_eq!(&a * &Expr::one(), a);
        }

        #[test]
        fn additive_inverse(a in expr()) {
            prop_assert_eq!(&a - &a, Expr::zero());
        }

        #[test]
        fn expand_distributes(a in expr(), b in expr(), c in expr()) {
            let lhs = (&a * &(&b + &c)).expand();
            let rhs = (&a * &b + &a * &c).expand();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn derivative_is_linear(a in expr(), b in expr()) {
            let x = Expr::symbol("a");
            let lhs = (&a + &b).diff(&x).expand();
            let rhs = (a.diff(&x) + b.diff(&x)).expand();
            prop_assert_eq!(lhs, rhs);
        }
    }
}
