//! Rectangular 3D coordinate systems.
//!
//! A [`CoordSys3D`] names three orthonormal axes and three coordinate
//! variables ([`BaseScalar`]s). A system may be oriented relative to a parent
//! system; the orientation is stored as a direction cosine matrix (DCM), and
//! [`CoordSys3D::dcm_to`] composes those matrices through the common root.

use std::fmt;
use std::sync::Arc;

use crate::expr::Expr;
use crate::matrix::Matrix;

/// Names used when building a coordinate system.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordSysConfig {
    /// Names of the three base vectors.
    pub vector_names: [String; 3],
    /// Names of the three coordinate variables.
    pub variable_names: [String; 3],
}

impl Default for CoordSysConfig {
    fn default() -> Self {
        Self {
            vector_names: ["i".into(), "j".into(), "k".into()],
            variable_names: ["x".into(), "y".into(), "z".into()],
        }
    }
}

/// A rotation axis of a parent system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first axis (`i`).
    X,
    /// The second axis (`j`).
    Y,
    /// The third axis (`k`).
    Z,
}

impl Axis {
    /// Returns the axis index (0, 1 or 2).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Orientation {
    parent: CoordSys3D,
    /// Column `c` holds the parent components of this system's base vector `c`.
    dcm: Matrix,
}

#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct CoordSysData {
    name: String,
    config: CoordSysConfig,
    orientation: Option<Orientation>,
}

/// A 3D rectangular coordinate system.
///
/// Cloning is cheap. Equality, ordering and hashing are structural over the
/// name, the configured names and the orientation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordSys3D(Arc<CoordSysData>);

impl CoordSys3D {
    /// Creates a root system with default names.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_config(name, CoordSysConfig::default())
    }

    /// Creates a root system with custom vector and variable names.
    #[must_use]
    pub fn with_config(name: &str, config: CoordSysConfig) -> Self {
        Self(Arc::new(CoordSysData {
            name: name.to_string(),
            config,
            orientation: None,
        }))
    }

    /// Creates a child system rotated by `angle` about one of this system's
    /// axes (right-hand rule).
    #[must_use]
    pub fn orient_new_axis(&self, name: &str, angle: Expr, axis: Axis) -> Self {
        self.oriented(name, axis_rotation(&angle, axis))
    }

    /// Creates a child system from an explicit direction cosine matrix.
    ///
    /// Column `c` of `dcm` must hold this (parent) system's components of the
    /// child's base vector `c`. Returns `None` unless `dcm` is 3×3.
    #[must_use]
    pub fn orient_new_dcm(&self, name: &str, dcm: Matrix) -> Option<Self> {
        (dcm.num_rows() == 3 && dcm.num_cols() == 3).then(|| self.oriented(name, dcm))
    }

    fn oriented(&self, name: &str, dcm: Matrix) -> Self {
        Self(Arc::new(CoordSysData {
            name: name.to_string(),
            config: self.0.config.clone(),
            orientation: Some(Orientation {
                parent: self.clone(),
                dcm,
            }),
        }))
    }

    /// Returns the system name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the configured names.
    #[must_use]
    pub fn config(&self) -> &CoordSysConfig {
        &self.0.config
    }

    /// Returns the parent system, if this system was oriented from one.
    #[must_use]
    pub fn parent(&self) -> Option<&CoordSys3D> {
        self.0.orientation.as_ref().map(|o| &o.parent)
    }

    /// Returns the root of this system's orientation tree.
    #[must_use]
    pub fn root(&self) -> &CoordSys3D {
        let mut current = self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Returns the three coordinate variables as expressions.
    #[must_use]
    pub fn base_scalars(&self) -> [Expr; 3] {
        [0, 1, 2].map(|index| Expr::Coordinate(BaseScalar::new(self.clone(), index)))
    }

    /// The first coordinate variable.
    #[must_use]
    pub fn x(&self) -> Expr {
        Expr::Coordinate(BaseScalar::new(self.clone(), 0))
    }

    /// The second coordinate variable.
    #[must_use]
    pub fn y(&self) -> Expr {
        Expr::Coordinate(BaseScalar::new(self.clone(), 1))
    }

    /// The third coordinate variable.
    #[must_use]
    pub fn z(&self) -> Expr {
        Expr::Coordinate(BaseScalar::new(self.clone(), 2))
    }

    /// Returns the matrix taking this system's components to the root's.
    fn dcm_to_root(&self) -> Matrix {
        let mut acc = Matrix::identity(3);
        let mut current = self;
        while let Some(orientation) = current.0.orientation.as_ref() {
            // Shapes are always 3x3 here.
            acc = orientation.dcm.mul(&acc).unwrap_or(acc);
            current = &orientation.parent;
        }
        acc
    }

    /// Returns `M` such that components in `target` are `M` times components
    /// in `self`, i.e. `M[r][c] = target.e_r · self.e_c`.
    ///
    /// Returns `None` if the two systems do not share a root.
    #[must_use]
    pub fn dcm_to(&self, target: &CoordSys3D) -> Option<Matrix> {
        if self == target {
            return Some(Matrix::identity(3));
        }
        if self.root() != target.root() {
            return None;
        }
        target.dcm_to_root().transpose().mul(&self.dcm_to_root())
    }
}

impl fmt::Debug for CoordSys3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoordSys3D({})", self.0.name)
    }
}

impl fmt::Display for CoordSys3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

/// The rotation by `angle` about a parent axis, as a DCM.
fn axis_rotation(angle: &Expr, axis: Axis) -> Matrix {
    let c = angle.clone().cos();
    let s = angle.clone().sin();
    let (zero, one) = (Expr::zero(), Expr::one());
    let rows = match axis {
        Axis::X => vec![
            vec![one, zero.clone(), zero.clone()],
            vec![zero.clone(), c.clone(), -&s],
            vec![zero, s, c],
        ],
        Axis::Y => vec![
            vec![c.clone(), zero.clone(), s.clone()],
            vec![zero.clone(), one, zero.clone()],
            vec![-&s, zero, c],
        ],
        Axis::Z => vec![
            vec![c.clone(), -&s, zero.clone()],
            vec![s, c, zero.clone()],
            vec![zero.clone(), zero, one],
        ],
    };
    Matrix::from_rows(rows)
}

/// A coordinate variable of a [`CoordSys3D`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseScalar {
    system: CoordSys3D,
    index: usize,
}

impl BaseScalar {
    /// Creates the coordinate variable `index` of `system`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0, 1 or 2.
    #[must_use]
    pub fn new(system: CoordSys3D, index: usize) -> Self {
        assert!(index < 3, "coordinate index must be 0, 1 or 2");
        Self { system, index }
    }

    /// Returns the owning system.
    #[must_use]
    pub fn system(&self) -> &CoordSys3D {
        &self.system
    }

    /// Returns the axis index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The variable's configured short name, e.g. `x`.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.system.config().variable_names[self.index]
    }

    /// Pretty form, e.g. `x_C`.
    #[must_use]
    pub fn pretty_form(&self) -> String {
        format!("{}_{}", self.short_name(), self.system.name())
    }

    /// LaTeX form, e.g. `\mathbf{{x}_{C}}`.
    #[must_use]
    pub fn latex_form(&self) -> String {
        format!("\\mathbf{{{{{}}}_{{{}}}}}", self.short_name(), self.system.name())
    }
}

impl fmt::Display for BaseScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.system.name(), self.short_name())
    }
}
