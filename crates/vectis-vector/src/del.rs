//! The del operator and directional derivatives.
//!
//! `v · ∇` is not a scalar: it is an operator waiting for a field. It is
//! modelled as [`DirectionalDerivative`], a value that owns its direction and
//! can be applied to scalar or vector fields.

use std::collections::BTreeSet;
use std::fmt;

use vectis_core::{CoordSys3D, Expr};

use crate::basis::CoordSysVectors;
use crate::error::{Result, VectorError};
use crate::express::express;
use crate::quantity::Quantity;
use crate::vector::Vector;

/// The symbolic nabla operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Del;

impl fmt::Display for Del {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Del")
    }
}

/// The operator `direction · ∇`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectionalDerivative {
    direction: Vector,
}

impl DirectionalDerivative {
    /// Creates the operator `direction · ∇`.
    #[must_use]
    pub fn new(direction: Vector) -> Self {
        Self { direction }
    }

    /// The direction vector.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Applies the operator to a scalar field.
    ///
    /// A field that does not depend on exactly one coordinate system has no
    /// resolvable frame and yields zero.
    ///
    /// # Errors
    ///
    /// Fails if the direction cannot be re-expressed into the field's system.
    pub fn apply_scalar(&self, field: &Expr) -> Result<Expr> {
        let Some(system) = single_system(field.coordinate_systems()) else {
            return Ok(Expr::zero());
        };
        let [x, y, z] = system.base_scalars();
        let weights = self.weights(&system)?;
        Ok(Expr::add_all(
            weights
                .into_iter()
                .zip([x, y, z])
                .map(|(w, var)| w * field.diff(&var)),
        ))
    }

    /// Applies the operator to a vector field, component-wise in the field's
    /// coordinate system.
    ///
    /// # Errors
    ///
    /// Fails if the field or the direction cannot be re-expressed into the
    /// field's system.
    pub fn apply_vector(&self, field: &Vector) -> Result<Vector> {
        let Some(system) = single_system(vector_systems(field)) else {
            return Ok(Vector::zero());
        };
        let field = express(field, &system)?;
        let weights = self.weights(&system)?;
        Ok(weights
            .into_iter()
            .zip(system.base_scalars())
            .map(|(w, var)| field.diff(&var).scale(&w))
            .sum())
    }

    /// Applies the operator to a scalar or vector field.
    ///
    /// # Errors
    ///
    /// Returns a type error for a dyadic or del operand.
    pub fn apply(&self, field: &Quantity) -> Result<Quantity> {
        match field {
            Quantity::Scalar(expr) => self.apply_scalar(expr).map(Quantity::Scalar),
            Quantity::Vector(vector) => self.apply_vector(vector).map(Quantity::Vector),
            other => Err(VectorError::Type(format!(
                "a directional derivative cannot act on a {}",
                other.kind()
            ))),
        }
    }

    /// `direction · e` for each base vector `e` of `system`.
    fn weights(&self, system: &CoordSys3D) -> Result<Vec<Expr>> {
        system
            .base_vectors()
            .into_iter()
            .map(|base| self.direction.dot(&Vector::from(base)))
            .collect()
    }
}

impl fmt::Display for DirectionalDerivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) & Del", self.direction)
    }
}

impl Vector {
    /// The directional derivative operator `self · ∇`.
    #[must_use]
    pub fn directional_derivative(&self, _del: &Del) -> DirectionalDerivative {
        DirectionalDerivative::new(self.clone())
    }
}

/// Every coordinate system a vector field depends on, through its base
/// vectors or through base scalars in its coefficients.
fn vector_systems(field: &Vector) -> BTreeSet<CoordSys3D> {
    field
        .components()
        .iter()
        .flat_map(|(base, coeff)| {
            let mut systems = coeff.coordinate_systems();
            systems.insert(base.system().clone());
            systems
        })
        .collect()
}

fn single_system(systems: BTreeSet<CoordSys3D>) -> Option<CoordSys3D> {
    if systems.len() == 1 {
        systems.into_iter().next()
    } else {
        None
    }
}
