//! # Reading of matrix literals
//!
//! A convenience textual notation for constructing matrices: rows are separated by `;` and
//! values within a row by whitespace, as in `"1 2 3; 4 5 6;"`. A trailing separator is allowed.
//! This notation is a thin input convenience at the boundary of the crate; the matrix engine
//! itself does not define any serialization format.
use std::str::FromStr;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;
use crate::io::error::ParseError;

pub mod error;

/// Parse a matrix from its textual notation.
///
/// # Arguments
///
/// * `text`: Rows separated by `;`, values within a row separated by whitespace. Segments
/// without any value (such as after a trailing `;`) are skipped.
///
/// # Errors
///
/// A `ParseError` when a value does not parse, when rows have unequal numbers of values, or when
/// no row contains any value.
pub fn parse_matrix<F: Element + FromStr>(text: &str) -> Result<Matrix<F>, ParseError> {
    let mut data: Vec<Vec<F>> = Vec::new();

    for segment in text.split(';') {
        let tokens = segment.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(tokens.len());
        for token in tokens {
            let value = token.parse::<F>()
                .map_err(|_| ParseError::new(format!("cannot parse value {:?}", token)))?;
            row.push(value);
        }
        data.push(row);
    }

    if data.is_empty() {
        return Err(ParseError::new("literal contains no values"));
    }

    let nr_columns = data[0].len();
    for (i, row) in data.iter().enumerate() {
        if row.len() != nr_columns {
            return Err(ParseError::new(format!(
                "rows cannot be jagged, expected {} values but row {} has {}",
                nr_columns, i, row.len(),
            )));
        }
    }

    Ok(Matrix::from_data(data))
}

impl<F: Element + FromStr> FromStr for Matrix<F> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_matrix(text)
    }
}
