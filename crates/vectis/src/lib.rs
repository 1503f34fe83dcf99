//! # Vectis
//!
//! Coordinate-free symbolic vector algebra in three dimensions.
//!
//! Vectis builds vectors from the base vectors of named coordinate systems,
//! keeps every coefficient as an exact symbolic expression, and reconciles
//! frames automatically when operands come from rotated systems.
//!
//! ## Features
//!
//! - **Canonical Scalars**: exact rationals and self-normalizing expressions
//! - **Oriented Frames**: coordinate systems rotated relative to each other
//! - **Vector Products**: dot, cross and outer products across frames
//! - **Dyadics**: rank-2 tensors as sums of base-vector pairs
//! - **Directional Derivatives**: `(v · ∇) f` for scalar and vector fields
//!
//! ## Quick Start
//!
//! ```rust
//! use vectis::prelude::*;
//!
//! let c = CoordSys3D::new("C");
//! let v = c.i() * 3 + c.j() * 4 + c.k() * 5;
//! assert_eq!(v.cross(&c.i()).unwrap().to_string(), "5*C.j + (-4)*C.k");
//! assert_eq!(v.magnitude().unwrap().to_string(), "sqrt(50)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use vectis_core as core;
pub use vectis_vector as vector;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use vectis_core::{Axis, CoordSys3D, CoordSysConfig, Expr, Matrix, Number, Symbol};
    pub use vectis_vector::{
        cross, divide, dot, express, BaseDyadic, BaseVector, CoordSysVectors, Cross,
        CrossProduct, Del, DirectionalDerivative, Dot, DotProduct, Dyadic, FreeSymbol, Quantity,
        Vector, VectorError,
    };
}
