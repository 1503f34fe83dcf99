//! # vectis-vector
//!
//! Coordinate-free vector and dyadic algebra over symbolic coefficients.
//!
//! This crate provides:
//! - Base vectors of coordinate systems and normalized vector sums
//! - Dot, cross and outer products with cross-frame reconciliation
//! - Projection, magnitude, normalization and column-matrix forms
//! - Dyadics and the directional derivative operator `v · ∇`
//! - Unevaluated `Cross`/`Dot` markers and free-function products
//!
//! ## Frames
//!
//! A vector may mix base vectors of several coordinate systems. Products
//! re-express operands through the direction cosine matrices that relate
//! systems sharing an orientation root; unrelated systems are reported as
//! [`VectorError::Disconnected`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod algebra;
pub mod basis;
pub mod del;
pub mod dyadic;
pub mod error;
pub mod express;
pub mod functions;
pub mod markers;
pub mod quantity;
pub mod vector;

pub use basis::{BaseVector, CoordSysVectors};
pub use del::{Del, DirectionalDerivative};
pub use dyadic::{BaseDyadic, Dyadic};
pub use error::{Result, VectorError};
pub use express::express;
pub use functions::{cross, dot};
pub use markers::{Cross, Dot};
pub use quantity::{divide, CrossProduct, DotProduct, Quantity};
pub use vector::{Components, FreeSymbol, Vector, VectorAdd, VectorMul};

#[cfg(test)]
mod proptests;
