//! # A brute-force polyhedron vertex enumerator
//!
//! Enumerates the vertices of the polyhedron described by `A x <= b, x >= 0` by evaluating one
//! simplex dictionary per candidate basis, classifying each as valid, basic, feasible, optimal or
//! unbounded. The feasible vertex points and the optimal point are exposed as plain data for a
//! downstream consumer, typically a renderer.
//!
//! This is not a production linear program solver: there is no pivoting between bases, no
//! two-phase handling and no sparse representation. Every size-`m` subset of the `m + n` slack
//! augmented variable indices is tried, which is combinatorial in the problem size.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
