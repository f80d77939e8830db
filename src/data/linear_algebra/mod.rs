//! # Linear algebra primitives
//!
//! A bounds-checked vector with an offset index window and a square matrix packed as shrinking
//! row vectors. These were written by hand, because every access needs to be validated against
//! the logical index window of the container rather than its physical storage.

pub mod error;
pub mod matrix;
pub mod vector;

/// Largest number of elements a `BoundedVector` can be constructed with.
pub const MAX_VECTOR_SIZE: usize = 1_000_000;
/// Largest dimension a `TriangularMatrix` can be constructed with.
pub const MAX_MATRIX_SIZE: usize = 1_000;
