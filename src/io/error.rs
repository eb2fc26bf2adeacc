//! # Error reporting for the matrix literal notation
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `ParseError` is created when a matrix literal is malformed.
///
/// It describes the first problem encountered: an unparseable value, a ragged row or an empty
/// literal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
}

impl ParseError {
    /// Create a new `ParseError` with a description of what is wrong.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "malformed matrix literal: {}", self.description)
    }
}

impl Error for ParseError {
}
