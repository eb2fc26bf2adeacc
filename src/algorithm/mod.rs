//! # Algorithms
//!
//! The enumeration layer: generating candidate bases and evaluating one simplex dictionary per
//! candidate.
pub mod enumeration;
