//! Re-expression of vectors between coordinate systems.

use tracing::trace;
use vectis_core::{CoordSys3D, Matrix};

use crate::basis::CoordSysVectors;
use crate::error::{Result, VectorError};
use crate::vector::{Components, Vector};

/// Re-expresses `vector` in the basis of `system`.
///
/// Parts already defined in `system` pass through unchanged; every other
/// part is rotated through the direction cosine matrix between its system
/// and `system`.
///
/// # Errors
///
/// Returns [`VectorError::Disconnected`] if some part of `vector` lives in a
/// system that shares no orientation root with `system`.
pub fn express(vector: &Vector, system: &CoordSys3D) -> Result<Vector> {
    vector
        .separate()
        .into_iter()
        .try_fold(Vector::zero(), |acc, (from, part)| {
            if from == *system {
                return Ok(acc + part);
            }
            let dcm = from
                .dcm_to(system)
                .ok_or_else(|| VectorError::Disconnected {
                    from: from.name().to_string(),
                    to: system.name().to_string(),
                })?;
            trace!(from = %from, to = %system, "re-expressing vector through DCM");

            let column = Matrix::column(
                from.base_vectors()
                    .iter()
                    .map(|base| part.coefficient(base))
                    .collect(),
            );
            let rotated = dcm.mul(&column).ok_or_else(|| {
                VectorError::Value(format!("malformed orientation between {from} and {system}"))
            })?;

            let components: Components = system
                .base_vectors()
                .into_iter()
                .zip(rotated.col(0))
                .collect();
            Ok(acc + Vector::from_components(components))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectis_core::{Axis, Expr};

    #[test]
    fn test_same_system_is_identity() {
        let c = CoordSys3D::new("C");
        let v = c.i() * 3 + c.k();
        assert_eq!(express(&v, &c).unwrap(), v);
        assert_eq!(express(&Vector::zero(), &c).unwrap(), Vector::zero());
    }

    #[test]
    fn test_rotation_about_z() {
        let n = CoordSys3D::new("N");
        let q = Expr::symbol("q");
        let a = n.orient_new_axis("A", q.clone(), Axis::Z);

        // N.i = cos(q) A.i - sin(q) A.j
        let expressed = express(&n.i(), &a).unwrap();
        assert_eq!(expressed, q.clone().cos() * a.i() - q.clone().sin() * a.j());

        // A.i = cos(q) N.i + sin(q) N.j
        let back = express(&a.i(), &n).unwrap();
        assert_eq!(back, q.clone().cos() * n.i() + q.sin() * n.j());

        // The rotation axis is shared.
        assert_eq!(express(&a.k(), &n).unwrap(), n.k());
    }

    #[test]
    fn test_disconnected_systems() {
        let n = CoordSys3D::new("N");
        let m = CoordSys3D::new("M");
        let err = express(&n.i(), &m).unwrap_err();
        assert!(err.is_value_error());
        assert_eq!(
            err,
            VectorError::Disconnected {
                from: "N".into(),
                to: "M".into()
            }
        );
    }
}
