//! # Representation of the enumerated vertices
//!
//! Once all partitions are evaluated, the feasible vertex points and the optimal point are
//! collected into a `VertexSolution`. This is the plain-data boundary of the crate: a renderer or
//! other consumer reads the points from here, together with a summary of how the candidate bases
//! were classified.
use std::fmt;
use std::fmt::Display;

use enum_map::{Enum, EnumMap};

/// The classification stages a dictionary can reach, in order. Reaching a stage implies all
/// earlier stages were passed, except that `Optimal` and `Unbounded` are mutually exclusive
/// refinements of a feasible dictionary.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    /// The partition has the right set sizes and covers every variable index exactly once.
    Valid,
    /// The basic columns of the slack-augmented constraint matrix are invertible.
    Basic,
    /// All basic variable values are nonnegative.
    Feasible,
    /// No nonbasic variable has a strictly positive reduced cost.
    Optimal,
    /// Some improving direction is not limited by any basic variable.
    Unbounded,
}

/// Counts of how many evaluated partitions reached each classification stage.
///
/// Enumeration never aborts: partitions that fail a stage are counted at the stages they did
/// reach and carry an explanatory message on their dictionary.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    nr_partitions: usize,
    counts: EnumMap<Stage, usize>,
}

impl Summary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more evaluated partition.
    pub(crate) fn count_partition(&mut self) {
        self.nr_partitions += 1;
    }

    /// Record that a partition reached `stage`.
    pub(crate) fn count(&mut self, stage: Stage) {
        self.counts[stage] += 1;
    }

    /// Total number of partitions that were evaluated.
    pub fn nr_partitions(&self) -> usize {
        self.nr_partitions
    }

    /// Number of evaluated partitions that reached `stage`.
    pub fn nr_reaching(&self, stage: Stage) -> usize {
        self.counts[stage]
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} partitions: {} valid, {} basic, {} feasible, {} optimal, {} unbounded",
            self.nr_partitions,
            self.counts[Stage::Valid],
            self.counts[Stage::Basic],
            self.counts[Stage::Feasible],
            self.counts[Stage::Optimal],
            self.counts[Stage::Unbounded],
        )
    }
}

/// The vertices of the polyhedron, derived from all feasible dictionaries.
///
/// Points are in the original `n`-dimensional variable space, with slack variables projected
/// away. The order of `vertices` follows the enumeration order of the partitions that produced
/// them, deduplicated by exact value.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexSolution<F> {
    vertices: Vec<Vec<F>>,
    optimal: Option<Vec<F>>,
    objective_value: Option<F>,
    summary: Summary,
}

impl<F> VertexSolution<F> {
    /// Create a new `VertexSolution` instance.
    ///
    /// A plain constructor.
    pub fn new(
        vertices: Vec<Vec<F>>,
        optimal: Option<Vec<F>>,
        objective_value: Option<F>,
        summary: Summary,
    ) -> Self {
        Self { vertices, optimal, objective_value, summary, }
    }

    /// All distinct feasible vertex points that were found.
    pub fn vertices(&self) -> &[Vec<F>] {
        &self.vertices
    }

    /// The point of an optimal dictionary, if any partition was classified as optimal.
    pub fn optimal(&self) -> Option<&Vec<F>> {
        self.optimal.as_ref()
    }

    /// The objective value at the optimal point, if one was found.
    pub fn objective_value(&self) -> Option<&F> {
        self.objective_value.as_ref()
    }

    /// How the evaluated partitions were classified.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}
