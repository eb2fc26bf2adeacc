//! # End-to-end enumeration scenarios
mod problem_1;
mod problem_2;
