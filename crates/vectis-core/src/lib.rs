//! # vectis-core
//!
//! Scalar symbolic layer for the vectis vector algebra.
//!
//! This crate provides:
//! - Exact rational coefficients (`Number`, backed by `dashu`)
//! - Immutable, canonicalizing scalar expressions (`Expr`)
//! - Partial differentiation, expansion and substitution
//! - Small immutable matrices of expressions
//! - Rectangular 3D coordinate systems with oriented frames
//!
//! ## Design Principles
//!
//! - **Canonical Construction**: compound nodes are only built through
//!   normalizing constructors, so structural equality is the equality
//! - **Value Semantics**: children are shared through `Arc`; nothing is
//!   mutated after construction, and every type is `Send + Sync`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod calculus;
pub mod canonical;
pub mod coordsys;
pub mod display;
pub mod expr;
pub mod matrix;
pub mod number;
pub mod ops;
pub mod rewrite;

#[cfg(test)]
mod proptests;


pub use calculus::{Derivation, PartialDerivative};
pub use coordsys::{Axis, BaseScalar, CoordSys3D, CoordSysConfig};
pub use expr::{Expr, Func, Symbol};
pub use matrix::Matrix;
pub use number::Number;
