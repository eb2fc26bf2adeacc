//! # Data structures
//!
//! Value types used throughout the crate: the dense matrix with its algebraic operations, and the
//! representation of the linear program and its enumerated solution.
pub mod linear_algebra;
pub mod linear_program;
