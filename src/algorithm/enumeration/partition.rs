//! # Partition enumeration
//!
//! Splitting the slack-augmented variable indices `0..(n + m)` into a basic set of size `m` and a
//! nonbasic set of size `n`, in every possible way. The number of partitions is `C(n + m, m)`,
//! combinatorial in the problem size: callers should bound the problem dimensions, stop consuming
//! the iterator early, or spread the work over threads.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::ops::Range;

use itertools::structs::Combinations;
use itertools::Itertools;

/// One way to split the variable indices `0..(n + m)` into a basic and a nonbasic set.
///
/// Both sets are stored sorted ascending. Instances produced by [`Partitions`] satisfy the size
/// and coverage invariants by construction; hand-built instances are validated by the dictionary
/// evaluator before use.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    basic: Vec<usize>,
    non_basic: Vec<usize>,
}

impl Partition {
    /// Create a new `Partition` instance.
    ///
    /// Both index collections are sorted; no further invariants are imposed here, see
    /// [`Partition::validate`].
    pub fn new(mut basic: Vec<usize>, mut non_basic: Vec<usize>) -> Self {
        basic.sort_unstable();
        non_basic.sort_unstable();

        Self { basic, non_basic, }
    }

    /// Indices of the basic variables, ascending.
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    /// Indices of the nonbasic variables, ascending.
    pub fn non_basic(&self) -> &[usize] {
        &self.non_basic
    }

    /// Check that this partition fits a problem with `nr_constraints` constraints and
    /// `nr_variables` variables: `nr_constraints` basic and `nr_variables` nonbasic indices,
    /// together covering `0..(nr_variables + nr_constraints)` with each index in exactly one set.
    ///
    /// # Errors
    ///
    /// The first `PartitionError` encountered, checking sizes before coverage.
    pub fn validate(
        &self,
        nr_constraints: usize,
        nr_variables: usize,
    ) -> Result<(), PartitionError> {
        if self.basic.len() != nr_constraints {
            return Err(PartitionError::InvalidSize {
                set: "basic",
                expected: nr_constraints,
                actual: self.basic.len(),
            });
        }
        if self.non_basic.len() != nr_variables {
            return Err(PartitionError::InvalidSize {
                set: "nonbasic",
                expected: nr_variables,
                actual: self.non_basic.len(),
            });
        }

        for index in 0..(nr_variables + nr_constraints) {
            let in_basic = self.basic.binary_search(&index).is_ok();
            let in_non_basic = self.non_basic.binary_search(&index).is_ok();
            if in_basic == in_non_basic {
                return Err(PartitionError::InvalidCoverage { index, });
            }
        }

        Ok(())
    }
}

/// A malformed basic/nonbasic split.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PartitionError {
    /// One of the sets does not have the size the problem dimensions imply.
    InvalidSize {
        /// Which of the two sets has the wrong size.
        set: &'static str,
        /// Size the problem dimensions imply.
        expected: usize,
        /// Size that was provided.
        actual: usize,
    },
    /// A variable index appears in both sets or in neither.
    InvalidCoverage {
        /// The offending index.
        index: usize,
    },
}

impl Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionError::InvalidSize { set, expected, actual } => {
                write!(f, "{} partition expected {} elements but got {}", set, expected, actual)
            },
            PartitionError::InvalidCoverage { index } => {
                write!(f, "variable index {} is not covered by exactly one partition set", index)
            },
        }
    }
}

impl Error for PartitionError {
}

/// Iterator over all partitions for a problem with `nr_variables` variables and `nr_constraints`
/// constraints.
///
/// Basic sets are generated in lexicographic order, each exactly once, by an iterative
/// next-combination step; no recursion and no duplicate filtering is involved. The total number
/// of items is [`nr_partitions`]`(nr_variables, nr_constraints)`.
#[derive(Clone, Debug)]
pub struct Partitions {
    nr_indices: usize,
    basic_sets: Combinations<Range<usize>>,
}

impl Partitions {
    /// Create an iterator over all partitions for the given problem dimensions.
    pub fn new(nr_variables: usize, nr_constraints: usize) -> Self {
        let nr_indices = nr_variables + nr_constraints;

        Self {
            nr_indices,
            basic_sets: (0..nr_indices).combinations(nr_constraints),
        }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        self.basic_sets.next().map(|basic| {
            let mut in_basic = vec![false; self.nr_indices];
            for &index in &basic {
                in_basic[index] = true;
            }
            let non_basic = (0..self.nr_indices).filter(|&index| !in_basic[index]).collect();

            // Combinations are emitted with ascending elements, no sorting is needed.
            Partition { basic, non_basic, }
        })
    }
}

/// The number of partitions for the given problem dimensions: `C(n + m, m)`.
///
/// This grows combinatorially; it is the dominant cost driver of the enumeration.
pub fn nr_partitions(nr_variables: usize, nr_constraints: usize) -> u128 {
    let n = (nr_variables + nr_constraints) as u128;
    let k = nr_variables.min(nr_constraints) as u128;

    let mut total = 1;
    for i in 0..k {
        // Each intermediate value is an exact binomial coefficient, the division is integral.
        total = total * (n - i) / (i + 1);
    }

    total
}
