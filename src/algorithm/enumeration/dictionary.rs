//! # Simplex dictionary evaluation
//!
//! One `Dictionary` is built per candidate partition: the constraint matrix is augmented with
//! slack columns, the basic columns are inverted, and the derived quantities classify the
//! candidate. Classification runs as a staged state machine; a failed stage records a diagnostic
//! message and leaves all later flags false, so a batch over all partitions always completes.
use crate::algorithm::enumeration::partition::Partition;
use crate::data::linear_algebra::error::AlgebraError;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_program::solution::Stage;
use crate::data::linear_program::standard_form::StandardForm;

/// The algebraic re-expression of the problem for one basic/nonbasic partition.
///
/// Constructed once, never mutated afterwards. The derived quantities are only present when the
/// stage that computes them was reached; the flags record how far classification got.
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary<F> {
    partition: Partition,

    zeta: Option<F>,
    basic_var_values: Option<Matrix<F>>,
    zeta_non_basic_vars: Option<Matrix<F>>,
    non_basic_var_coeff: Option<Matrix<F>>,
    point: Option<Vec<F>>,

    message: Option<String>,
    is_valid: bool,
    is_basic: bool,
    is_feasible: bool,
    is_optimal: bool,
    is_unbounded: bool,
}

/// The quantities computed from a successfully inverted basis.
struct Derived<F> {
    zeta: F,
    basic_var_values: Matrix<F>,
    zeta_non_basic_vars: Matrix<F>,
    non_basic_var_coeff: Matrix<F>,
}

impl<F: Element> Dictionary<F> {
    /// Evaluate a candidate partition against a problem.
    ///
    /// This never fails: malformed partitions and degenerate bases are recorded on the returned
    /// dictionary as an unset flag with a diagnostic message.
    ///
    /// # Arguments
    ///
    /// * `problem`: The constraints, bounds and objective being enumerated.
    /// * `partition`: The candidate basic/nonbasic split over the slack-augmented indices
    /// `0..(n + m)`.
    pub fn new(problem: &StandardForm<F>, partition: &Partition) -> Self {
        let mut dictionary = Self {
            partition: partition.clone(),
            zeta: None,
            basic_var_values: None,
            zeta_non_basic_vars: None,
            non_basic_var_coeff: None,
            point: None,
            message: None,
            is_valid: false,
            is_basic: false,
            is_feasible: false,
            is_optimal: false,
            is_unbounded: false,
        };
        dictionary.evaluate(problem);

        dictionary
    }

    fn evaluate(&mut self, problem: &StandardForm<F>) {
        let nr_constraints = problem.nr_constraints();
        let nr_variables = problem.nr_variables();

        if let Err(error) = self.partition.validate(nr_constraints, nr_variables) {
            self.message = Some(error.to_string());
            return;
        }
        self.is_valid = true;

        let derived = match Self::derive(problem, &self.partition) {
            Ok(derived) => derived,
            Err(AlgebraError::Degenerate | AlgebraError::Singular) => {
                self.message = Some(String::from(
                    "partition is not basic, the basic columns cannot be inverted",
                ));
                return;
            },
            Err(other) => {
                self.message = Some(other.to_string());
                return;
            },
        };
        self.is_basic = true;
        self.point = Some(Self::point_of(&derived.basic_var_values, self.partition.basic(), nr_variables));

        let first_negative = (0..nr_constraints)
            .find(|&row| derived.basic_var_values[(row, 0)] < F::zero());
        if let Some(row) = first_negative {
            self.message = Some(format!(
                "partition is not feasible, basic variable {} has a negative value",
                self.partition.basic()[row],
            ));
            self.store(derived);
            return;
        }
        self.is_feasible = true;

        let improving = (0..nr_variables)
            .filter(|&column| derived.zeta_non_basic_vars[(0, column)] > F::zero())
            .collect::<Vec<_>>();
        self.is_optimal = improving.is_empty();

        if !self.is_optimal {
            self.is_unbounded = improving.into_iter().any(|column| {
                (0..nr_constraints).all(|row| derived.non_basic_var_coeff[(row, column)] > F::zero())
            });
            if self.is_unbounded {
                // The ray direction itself is not derived; extension point.
                self.message = Some(String::from(
                    "partition admits an improving direction without a limiting constraint",
                ));
            }
        }

        self.store(derived);
    }

    /// Augment the problem with slack variables, invert the basis and compute the derived
    /// quantities.
    ///
    /// With `Abar = [A | I]` and `cbar = [c; 0]`, restricted to the basic (`B`) and nonbasic
    /// (`N`) index sets:
    ///
    /// * `zeta = cbar_B^T inv(Abar_B) b`
    /// * `basic_var_values = inv(Abar_B) b`
    /// * `zeta_non_basic_vars = cbar_N^T - cbar_B^T inv(Abar_B) Abar_N`
    /// * `non_basic_var_coeff = inv(Abar_B) (-Abar)_N`
    ///
    /// # Errors
    ///
    /// `AlgebraError::Degenerate` or `AlgebraError::Singular` when the basic columns do not
    /// invert; the caller treats this as "not basic". Other variants cannot occur for a
    /// validated partition.
    fn derive(problem: &StandardForm<F>, partition: &Partition) -> Result<Derived<F>, AlgebraError> {
        let nr_constraints = problem.nr_constraints();

        let a_bar = problem.constraints().hcat(&Matrix::identity(nr_constraints))?;
        let c_bar = problem.objective().vcat(&Matrix::zeros(nr_constraints, 1))?;

        let basis_inverse = a_bar.select_columns(partition.basic())?.inverse()?;

        let objective_basic = c_bar.select_rows(partition.basic())?.transpose();
        let objective_non_basic = c_bar.select_rows(partition.non_basic())?.transpose();
        let objective_weights = objective_basic.multiply(&basis_inverse)?;

        let zeta = objective_weights.multiply(problem.rhs())?.get_value(0, 0)?;
        let basic_var_values = basis_inverse.multiply(problem.rhs())?;
        let zeta_non_basic_vars = objective_non_basic.subtract(
            &objective_weights.multiply(&a_bar.select_columns(partition.non_basic())?)?,
        )?;
        let non_basic_var_coeff = basis_inverse.multiply(
            &a_bar.scale(-F::one()).select_columns(partition.non_basic())?,
        )?;

        Ok(Derived { zeta, basic_var_values, zeta_non_basic_vars, non_basic_var_coeff, })
    }

    /// Map the basic variable values back into the original variable space: each basic variable
    /// with an original (non slack) index contributes its value at that index, all other
    /// coordinates are zero.
    fn point_of(basic_var_values: &Matrix<F>, basic: &[usize], nr_variables: usize) -> Vec<F> {
        let mut point = vec![F::zero(); nr_variables];
        for (row, &index) in basic.iter().enumerate() {
            if index < nr_variables {
                point[index] = basic_var_values[(row, 0)];
            }
        }

        point
    }

    fn store(&mut self, derived: Derived<F>) {
        self.zeta = Some(derived.zeta);
        self.basic_var_values = Some(derived.basic_var_values);
        self.zeta_non_basic_vars = Some(derived.zeta_non_basic_vars);
        self.non_basic_var_coeff = Some(derived.non_basic_var_coeff);
    }

    /// The partition this dictionary was built from.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Objective value at this basis, when the basis inverted.
    pub fn zeta(&self) -> Option<F> {
        self.zeta
    }

    /// Values of the basic variables as an `m x 1` column, when the basis inverted.
    pub fn basic_var_values(&self) -> Option<&Matrix<F>> {
        self.basic_var_values.as_ref()
    }

    /// Reduced costs of the nonbasic variables as a `1 x n` row, when the basis inverted.
    pub fn zeta_non_basic_vars(&self) -> Option<&Matrix<F>> {
        self.zeta_non_basic_vars.as_ref()
    }

    /// Direction coefficients of the nonbasic variables as an `m x n` matrix, when the basis
    /// inverted.
    pub fn non_basic_var_coeff(&self) -> Option<&Matrix<F>> {
        self.non_basic_var_coeff.as_ref()
    }

    /// The vertex this basis describes, in the original `n`-dimensional variable space, when the
    /// basis inverted. Coordinates of nonbasic variables are zero; slack values are projected
    /// away.
    pub fn point(&self) -> Option<&[F]> {
        self.point.as_deref()
    }

    /// Diagnostic explaining the classification: the first failed stage, or the presence of an
    /// unbounded ray.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the partition has the right set sizes and coverage.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Whether the basic columns of the slack-augmented constraint matrix are invertible.
    pub fn is_basic(&self) -> bool {
        self.is_basic
    }

    /// Whether all basic variable values are nonnegative.
    pub fn is_feasible(&self) -> bool {
        self.is_feasible
    }

    /// Whether no nonbasic variable has a strictly positive reduced cost.
    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    /// Whether a positive reduced cost exists whose direction is not limited by any basic
    /// variable.
    pub fn is_unbounded(&self) -> bool {
        self.is_unbounded
    }

    /// The highest classification stage this dictionary reached, if it passed validation at all.
    pub fn last_stage(&self) -> Option<Stage> {
        if self.is_unbounded {
            Some(Stage::Unbounded)
        } else if self.is_optimal {
            Some(Stage::Optimal)
        } else if self.is_feasible {
            Some(Stage::Feasible)
        } else if self.is_basic {
            Some(Stage::Basic)
        } else if self.is_valid {
            Some(Stage::Valid)
        } else {
            None
        }
    }
}
