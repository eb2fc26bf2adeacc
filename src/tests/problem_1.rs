//! # A cube
//!
//! Three constraints `x <= 3`, `y <= 3`, `z <= 3` over nonnegative variables describe a cube
//! with side 3. Maximizing `x + y + z` (the same as minimizing `-x - y - z`) should find the
//! corner `(3, 3, 3)`.
use assert_approx_eq::assert_approx_eq;

use crate::algorithm::enumeration::{enumerate, solve};
use crate::data::linear_program::solution::Stage;
use crate::data::linear_program::standard_form::StandardForm;
use crate::io::parse_matrix;

fn cube() -> StandardForm<f64> {
    StandardForm::new(
        parse_matrix("1 0 0; 0 1 0; 0 0 1;").unwrap(),
        parse_matrix("3; 3; 3;").unwrap(),
        parse_matrix("1; 1; 1;").unwrap(),
    ).unwrap()
}

#[test]
fn classification_counts() {
    let dictionaries = enumerate(&cube());

    // All C(6, 3) = 20 partitions are evaluated and valid. A basis must pick one of the two
    // columns of each coordinate axis, 2^3 = 8 ways; all of those corners are feasible and only
    // the all-variables basis at (3, 3, 3) is optimal.
    assert_eq!(dictionaries.len(), 20);
    assert!(dictionaries.iter().all(|d| d.is_valid()));
    assert_eq!(dictionaries.iter().filter(|d| d.is_basic()).count(), 8);
    assert_eq!(dictionaries.iter().filter(|d| d.is_feasible()).count(), 8);
    assert_eq!(dictionaries.iter().filter(|d| d.is_optimal()).count(), 1);
    assert_eq!(dictionaries.iter().filter(|d| d.is_unbounded()).count(), 0);

    // Every non-basic partition carries an explanation.
    assert!(dictionaries.iter().filter(|d| !d.is_basic()).all(|d| d.message().is_some()));
}

#[test]
fn optimal_corner() {
    let dictionaries = enumerate(&cube());

    let optimal = dictionaries.iter().find(|d| d.is_optimal()).unwrap();
    assert_eq!(optimal.partition().basic(), &[0, 1, 2]);

    let point = optimal.point().unwrap();
    assert_approx_eq!(point[0], 3_f64);
    assert_approx_eq!(point[1], 3_f64);
    assert_approx_eq!(point[2], 3_f64);
    assert_approx_eq!(optimal.zeta().unwrap(), 9_f64);
}

#[test]
fn solution_vertices() {
    let solution = solve(&cube());

    // The eight corners of the cube, each found exactly once.
    assert_eq!(solution.vertices().len(), 8);
    for corner in [
        [0_f64, 0_f64, 0_f64], [3_f64, 0_f64, 0_f64], [0_f64, 3_f64, 0_f64],
        [0_f64, 0_f64, 3_f64], [3_f64, 3_f64, 0_f64], [3_f64, 0_f64, 3_f64],
        [0_f64, 3_f64, 3_f64], [3_f64, 3_f64, 3_f64],
    ] {
        assert!(solution.vertices().iter().any(|vertex| vertex.as_slice() == corner));
    }

    assert_eq!(solution.optimal(), Some(&vec![3_f64, 3_f64, 3_f64]));
    assert_approx_eq!(*solution.objective_value().unwrap(), 9_f64);

    let summary = solution.summary();
    assert_eq!(summary.nr_partitions(), 20);
    assert_eq!(summary.nr_reaching(Stage::Valid), 20);
    assert_eq!(summary.nr_reaching(Stage::Basic), 8);
    assert_eq!(summary.nr_reaching(Stage::Feasible), 8);
    assert_eq!(summary.nr_reaching(Stage::Optimal), 1);
    assert_eq!(summary.nr_reaching(Stage::Unbounded), 0);
}
