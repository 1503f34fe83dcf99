//! Property-based tests for vector products.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::basis::CoordSysVectors;
    use crate::express::express;
    use crate::vector::Vector;
    use vectis_core::{CoordSys3D, Expr, Matrix};

    fn coeff() -> impl Strategy<Value = Expr> {
        prop_oneof![
            (-5i64..5i64).prop_map(Expr::integer),
            prop::sample::select(vec!["a", "b", "c"]).prop_map(Expr::symbol),
        ]
    }

    fn vector_in(system: CoordSys3D) -> impl Strategy<Value = Vector> {
        proptest::collection::vec(coeff(), 3).prop_map(move |cs| {
            cs.into_iter()
                .zip([system.i(), system.j(), system.k()])
                .map(|(c, e)| c * e)
                .sum()
        })
    }

    fn vector() -> impl Strategy<Value = Vector> {
        vector_in(CoordSys3D::new("C"))
    }

    /// `N` and a child `A` rotated about `N.k` by the angle with cosine 3/5,
    /// so every direction cosine is an exact rational.
    fn frames() -> (CoordSys3D, CoordSys3D) {
        let n = CoordSys3D::new("N");
        let r = |a, b| Expr::rational(a, b);
        let dcm = Matrix::from_rows(vec![
            vec![r(3, 5), r(-4, 5), Expr::zero()],
            vec![r(4, 5), r(3, 5), Expr::zero()],
            vec![Expr::zero(), Expr::zero(), Expr::one()],
        ]);
        let a = n.orient_new_dcm("A", dcm).expect("3x3");
        (n, a)
    }

    /// Vectors with components along both `N` and `A`.
    fn mixed_vector() -> impl Strategy<Value = Vector> {
        proptest::collection::vec(coeff(), 6).prop_map(|cs| {
            let (n, a) = frames();
            cs.into_iter()
                .zip(n.base_vectors().into_iter().chain(a.base_vectors()))
                .map(|(c, base)| Vector::scaled(base, c))
                .sum()
        })
    }

    proptest! {
        #[test]
        fn dot_symmetric(a in vector(), b in vector()) {
            prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        }

        #[test]
        fn cross_anticommutative(a in vector(), b in vector()) {
            let ab = a.cross(&b).unwrap().expand();
            let ba = (-b.cross(&a).unwrap()).expand();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn cross_self_vanishes(a in vector()) {
            prop_assert!(a.cross(&a).unwrap().expand().is_zero());
        }

        #[test]
        fn outer_bilinear(a in vector(), b in vector(), c in vector()) {
            let lhs = (&a + &b).outer(&c).expand();
            let rhs = (a.outer(&c) + b.outer(&c)).expand();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn outer_homogeneous(s in coeff(), u in vector(), v in vector()) {
            let lhs = (&(&u * &s) | &v).expand();
            let rhs = (&u | &v).scale(&s).expand();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn outer_right_additive(u in vector(), v in vector(), w in vector()) {
            let lhs = (&u | &(&v + &w)).expand();
            let rhs = ((&u | &v) + (&u | &w)).expand();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn dot_symmetric_across_frames(a in mixed_vector(), b in mixed_vector()) {
            let ab = (&a & &b).unwrap().expand();
            let ba = (&b & &a).unwrap().expand();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn cross_anticommutative_across_frames(a in mixed_vector(), b in mixed_vector()) {
            let (n, _) = frames();
            let ab = express(&(&a ^ &b).unwrap(), &n).unwrap().expand();
            let ba = express(&-(&b ^ &a).unwrap(), &n).unwrap().expand();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn separate_partitions(a in vector_in(CoordSys3D::new("P")), b in vector_in(CoordSys3D::new("Q"))) {
            let v = &a + &b;
            let parts = v.separate();
            for (system, part) in &parts {
                prop_assert!(part.components().keys().all(|base| base.system() == system));
            }
            prop_assert_eq!(parts.into_values().sum::<Vector>(), v);
        }

        #[test]
        fn to_matrix_round_trip(a in vector()) {
            let system = CoordSys3D::new("C");
            let column = a.to_matrix(&system).unwrap();
            let rebuilt: Vector = column
                .col(0)
                .into_iter()
                .zip([system.i(), system.j(), system.k()])
                .map(|(c, e)| c * e)
                .sum();
            prop_assert_eq!(rebuilt, a);
        }

        #[test]
        fn zero_absorbs(a in vector()) {
            prop_assert_eq!(a.dot(&Vector::zero()).unwrap(), Expr::zero());
            prop_assert!(a.cross(&Vector::zero()).unwrap().is_zero());
            prop_assert!(Vector::zero().outer(&a).is_zero());
        }
    }
}
