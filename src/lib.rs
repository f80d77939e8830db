//! # Bounds-checked numeric containers
//!
//! A pair of generic value containers for which every element access is checked against a
//! declared logical index window: a fixed-length vector which may start at a nonzero index, and a
//! square matrix storing only its upper-triangular part as one shrinking row vector per matrix
//! row.
#![warn(missing_docs)]

pub mod data;

pub use data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use data::linear_algebra::error::Error;
pub use data::linear_algebra::matrix::TriangularMatrix;
pub use data::linear_algebra::vector::BoundedVector;
