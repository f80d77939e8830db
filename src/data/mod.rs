//! # Data structures
//!
//! Containers and the errors they produce.
pub mod linear_algebra;
