//! Base vectors of coordinate systems.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use vectis_core::CoordSys3D;

use crate::error::{Result, VectorError};
use crate::vector::Vector;

/// A named unit vector along one axis of one coordinate system.
///
/// Identity is the triple (system, index, name); the display forms ride
/// along. Ordering sorts by system, then axis, which is the order vectors
/// print in.
#[derive(Clone)]
pub struct BaseVector {
    name: Arc<str>,
    index: usize,
    system: CoordSys3D,
    pretty_form: Arc<str>,
    latex_form: Arc<str>,
}

impl BaseVector {
    /// Creates a base vector.
    ///
    /// # Errors
    ///
    /// Returns a value error if `index` is not 0, 1 or 2.
    pub fn new(
        name: &str,
        index: usize,
        system: &CoordSys3D,
        pretty_form: &str,
        latex_form: &str,
    ) -> Result<Self> {
        if index > 2 {
            return Err(VectorError::Value(format!(
                "index must be 0, 1 or 2, got {index}"
            )));
        }
        Ok(Self {
            name: Arc::from(name),
            index,
            system: system.clone(),
            pretty_form: Arc::from(pretty_form),
            latex_form: Arc::from(latex_form),
        })
    }

    /// The base vector `index` of `system`, named from its configuration.
    fn of(system: &CoordSys3D, index: usize) -> Self {
        let short = &system.config().vector_names[index];
        let sys = system.name();
        Self {
            name: Arc::from(format!("{sys}.{short}")),
            index,
            system: system.clone(),
            pretty_form: Arc::from(format!("{short}_{sys}")),
            latex_form: Arc::from(format!("\\mathbf{{\\hat{{{short}}}_{{{sys}}}}}")),
        }
    }

    /// Returns the name, e.g. `C.i`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the axis index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the owning coordinate system.
    #[must_use]
    pub fn system(&self) -> &CoordSys3D {
        &self.system
    }

    /// Returns the pretty form, e.g. `i_C`.
    #[must_use]
    pub fn pretty_form(&self) -> &str {
        &self.pretty_form
    }

    /// Returns the LaTeX form, e.g. `\mathbf{\hat{i}_{C}}`.
    #[must_use]
    pub fn latex_form(&self) -> &str {
        &self.latex_form
    }

    fn key(&self) -> (&CoordSys3D, usize, &str) {
        (&self.system, self.index, &self.name)
    }
}

impl PartialEq for BaseVector {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BaseVector {}

impl Hash for BaseVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for BaseVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaseVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Debug for BaseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BaseVector({})", self.name)
    }
}

impl fmt::Display for BaseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Base vectors of a [`CoordSys3D`].
pub trait CoordSysVectors {
    /// The three base vectors in axis order.
    fn base_vectors(&self) -> [BaseVector; 3];

    /// The first base vector as a [`Vector`].
    fn i(&self) -> Vector;

    /// The second base vector as a [`Vector`].
    fn j(&self) -> Vector;

    /// The third base vector as a [`Vector`].
    fn k(&self) -> Vector;
}

impl CoordSysVectors for CoordSys3D {
    fn base_vectors(&self) -> [BaseVector; 3] {
        [0, 1, 2].map(|index| BaseVector::of(self, index))
    }

    fn i(&self) -> Vector {
        Vector::Base(BaseVector::of(self, 0))
    }

    fn j(&self) -> Vector {
        Vector::Base(BaseVector::of(self, 1))
    }

    fn k(&self) -> Vector {
        Vector::Base(BaseVector::of(self, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms() {
        let c = CoordSys3D::new("C");
        let [i, _, k] = c.base_vectors();
        assert_eq!(i.to_string(), "C.i");
        assert_eq!(i.pretty_form(), "i_C");
        assert_eq!(i.latex_form(), "\\mathbf{\\hat{i}_{C}}");
        assert_eq!(k.index(), 2);
    }

    #[test]
    fn test_index_validation() {
        let c = CoordSys3D::new("C");
        let err = BaseVector::new("C.w", 3, &c, "w_C", "w").unwrap_err();
        assert!(err.is_value_error());
        assert!(BaseVector::new("C.i", 0, &c, "i_C", "i").is_ok());
    }

    #[test]
    fn test_identity_is_structural() {
        let c = CoordSys3D::new("C");
        let built = BaseVector::new("C.i", 0, &c, "x", "y").unwrap();
        assert_eq!(built, c.base_vectors()[0]);
        assert_ne!(c.base_vectors()[0], CoordSys3D::new("D").base_vectors()[0]);
    }

    #[test]
    fn test_ordering_by_system_then_axis() {
        let a = CoordSys3D::new("A");
        let b = CoordSys3D::new("B");
        let [ai, _, ak] = a.base_vectors();
        let [bi, ..] = b.base_vectors();
        assert!(ai < ak);
        assert!(ak < bi);
    }
}
