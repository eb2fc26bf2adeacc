//! # Brute-force enumeration over all candidate bases
//!
//! The driver that ties the pieces together: every partition of the slack-augmented variable
//! indices is turned into a dictionary and classified, and the feasible results are aggregated
//! into a [`VertexSolution`].
//!
//! Evaluating one dictionary depends only on the immutable problem and its own partition, so the
//! batch is embarrassingly parallel; [`enumerate_parallel`] spreads it over a thread pool.
//! Cancellation is a matter of not consuming further partitions: pair [`Partitions`] with
//! `take_while` and [`Dictionary::new`] for that.
use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::algorithm::enumeration::dictionary::Dictionary;
use crate::algorithm::enumeration::partition::{nr_partitions, Partitions};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_program::solution::{Stage, Summary, VertexSolution};
use crate::data::linear_program::standard_form::StandardForm;

pub mod dictionary;
pub mod partition;

/// Evaluate a dictionary for every partition, sequentially.
///
/// The batch always completes: partitions that fail a classification stage are returned with
/// their flags and message rather than aborting the run. The result follows the lexicographic
/// order of the basic sets.
pub fn enumerate<F: Element>(problem: &StandardForm<F>) -> Vec<Dictionary<F>> {
    tracing::debug!(
        nr_variables = problem.nr_variables(),
        nr_constraints = problem.nr_constraints(),
        nr_partitions = nr_partitions(problem.nr_variables(), problem.nr_constraints()),
        "enumerating all partitions"
    );

    Partitions::new(problem.nr_variables(), problem.nr_constraints())
        .map(|partition| Dictionary::new(problem, &partition))
        .collect()
}

/// Evaluate a dictionary for every partition, spread over a thread pool.
///
/// Dictionaries share no mutable state, so partitions are distributed without locking. No
/// ordering of the result is guaranteed.
pub fn enumerate_parallel<F: Element>(problem: &StandardForm<F>) -> Vec<Dictionary<F>> {
    tracing::debug!(
        nr_variables = problem.nr_variables(),
        nr_constraints = problem.nr_constraints(),
        nr_partitions = nr_partitions(problem.nr_variables(), problem.nr_constraints()),
        "enumerating all partitions in parallel"
    );

    Partitions::new(problem.nr_variables(), problem.nr_constraints())
        .par_bridge()
        .map(|partition| Dictionary::new(problem, &partition))
        .collect()
}

/// Enumerate all partitions and aggregate the feasible vertex points, the optimal point and a
/// classification summary.
///
/// Feasible points are collected in enumeration order and deduplicated by exact value; distinct
/// bases of a degenerate vertex produce the same point only once.
pub fn solve<F: Element>(problem: &StandardForm<F>) -> VertexSolution<F> {
    let mut summary = Summary::new();
    let mut vertices: Vec<Vec<F>> = Vec::new();
    let mut optimal = None;
    let mut objective_value = None;

    for dictionary in enumerate(problem) {
        summary.count_partition();
        record_stages(&mut summary, &dictionary);

        if !dictionary.is_feasible() {
            continue;
        }
        if let Some(point) = dictionary.point() {
            if !vertices.iter().any(|vertex| vertex.as_slice() == point) {
                vertices.push(point.to_vec());
            }
            if dictionary.is_optimal() {
                optimal = Some(point.to_vec());
                objective_value = dictionary.zeta();
            }
        }
    }

    tracing::info!(summary = %summary, "enumeration completed");

    VertexSolution::new(vertices, optimal, objective_value, summary)
}

fn record_stages<F: Element>(summary: &mut Summary, dictionary: &Dictionary<F>) {
    if dictionary.is_valid() {
        summary.count(Stage::Valid);
    }
    if dictionary.is_basic() {
        summary.count(Stage::Basic);
    }
    if dictionary.is_feasible() {
        summary.count(Stage::Feasible);
    }
    if dictionary.is_optimal() {
        summary.count(Stage::Optimal);
    }
    if dictionary.is_unbounded() {
        summary.count(Stage::Unbounded);
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::algorithm::enumeration::{enumerate, enumerate_parallel};
    use crate::algorithm::enumeration::dictionary::Dictionary;
    use crate::data::linear_algebra::matrix::Matrix;
    use crate::data::linear_program::standard_form::StandardForm;

    fn cube() -> StandardForm<f64> {
        StandardForm::new(
            Matrix::identity(3),
            Matrix::from_data(vec![vec![3_f64], vec![3_f64], vec![3_f64]]),
            Matrix::from_data(vec![vec![1_f64], vec![1_f64], vec![1_f64]]),
        ).unwrap()
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let problem = cube();

        let sequential = enumerate(&problem);
        let parallel = enumerate_parallel(&problem);
        assert_eq!(sequential.len(), parallel.len());

        // Parallel enumeration guarantees no order; compare as sets of basic index sets with
        // their classification.
        let key = |dictionaries: &[Dictionary<f64>]| {
            dictionaries.iter()
                .map(|d| (d.partition().basic().to_vec(), d.is_basic(), d.is_feasible(), d.is_optimal()))
                .collect::<HashSet<_>>()
        };
        assert_eq!(key(&sequential), key(&parallel));
    }
}
