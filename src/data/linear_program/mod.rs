//! # Linear program representation
//!
//! The problem handed to the enumeration algorithm and the solution handed back: a set of linear
//! constraints with an objective, and the classified vertex points derived from it.
pub mod solution;
pub mod standard_form;
