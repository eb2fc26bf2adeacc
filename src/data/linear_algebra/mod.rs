//! # Linear algebra
//!
//! A dense matrix type and the elimination algorithms defined on it: triangularization, LU
//! decomposition, linear-system solving, inversion and the determinant.
pub mod elimination;
pub mod error;
pub mod matrix;
pub mod traits;
