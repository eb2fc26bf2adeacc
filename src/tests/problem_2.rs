//! # An unbounded strip
//!
//! The single constraint `x - y <= 1` over nonnegative `x, y` describes an unbounded region.
//! Maximizing `x + y` has no optimum; enumeration should classify the feasible bases as
//! unbounded and still report the two vertices of the region.
use crate::algorithm::enumeration::{enumerate, solve};
use crate::data::linear_program::solution::Stage;
use crate::data::linear_program::standard_form::StandardForm;
use crate::io::parse_matrix;

fn strip() -> StandardForm<f64> {
    StandardForm::new(
        parse_matrix("1 -1;").unwrap(),
        parse_matrix("1;").unwrap(),
        parse_matrix("1; 1;").unwrap(),
    ).unwrap()
}

#[test]
fn classification() {
    let dictionaries = enumerate(&strip());
    assert_eq!(dictionaries.len(), 3);

    // Basic set {0}: x = 1, feasible, improving without limit.
    let x_basis = dictionaries.iter().find(|d| d.partition().basic() == [0]).unwrap();
    assert!(x_basis.is_feasible());
    assert!(!x_basis.is_optimal());
    assert!(x_basis.is_unbounded());
    assert_eq!(x_basis.point().unwrap(), &[1_f64, 0_f64]);

    // Basic set {1}: y = -1, not feasible.
    let y_basis = dictionaries.iter().find(|d| d.partition().basic() == [1]).unwrap();
    assert!(y_basis.is_basic());
    assert!(!y_basis.is_feasible());
    assert!(!y_basis.is_unbounded());

    // Basic set {2}: the origin, feasible, also unbounded.
    let slack_basis = dictionaries.iter().find(|d| d.partition().basic() == [2]).unwrap();
    assert!(slack_basis.is_feasible());
    assert!(!slack_basis.is_optimal());
    assert!(slack_basis.is_unbounded());
    assert_eq!(slack_basis.point().unwrap(), &[0_f64, 0_f64]);
}

#[test]
fn no_optimum_is_reported() {
    let solution = solve(&strip());

    assert_eq!(solution.optimal(), None);
    assert_eq!(solution.objective_value(), None);
    assert_eq!(solution.vertices().len(), 2);

    let summary = solution.summary();
    assert_eq!(summary.nr_partitions(), 3);
    assert_eq!(summary.nr_reaching(Stage::Valid), 3);
    assert_eq!(summary.nr_reaching(Stage::Basic), 3);
    assert_eq!(summary.nr_reaching(Stage::Feasible), 2);
    assert_eq!(summary.nr_reaching(Stage::Optimal), 0);
    assert_eq!(summary.nr_reaching(Stage::Unbounded), 2);
}
