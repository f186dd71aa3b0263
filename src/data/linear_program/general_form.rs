//! # Linear programs in "general form"
//!
//! Data structure for manipulation of linear programs as they are read. Constraints can be of any
//! type, the objective can be maximized or minimized and may include a constant. Variables are
//! known by their name, and are all nonnegative.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use num_traits::{One, Zero};
use relp_num::Signed;

use crate::algorithm::OptimizationResult;
use crate::data::linear_program::elements::{ConstraintType, LinearProgramType, Objective};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::{LinearProgram, ShapeError};
use crate::data::number_types::traits::OrderedField;
use crate::io::error::InconsistencyError;

/// A single constraint `<a, x> <relation> rhs`.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Constraint<F> {
    /// Sparse coefficients, sorted by column index.
    terms: Vec<(usize, F)>,
    relation: ConstraintType,
    rhs: F,
}

impl<F> Constraint<F> {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `terms`: (column, coefficient) tuples, sorted by column, without duplicates.
    /// * `relation`: How the left-hand side relates to the right-hand side.
    /// * `rhs`: Right-hand side.
    pub fn new(terms: Vec<(usize, F)>, relation: ConstraintType, rhs: F) -> Self {
        Self { terms, relation, rhs }
    }

    /// Sparse coefficients.
    pub fn terms(&self) -> &[(usize, F)] {
        &self.terms
    }

    /// Type of (in)equality.
    pub fn relation(&self) -> ConstraintType {
        self.relation
    }

    /// Right-hand side.
    pub fn rhs(&self) -> &F {
        &self.rhs
    }
}

/// A linear program in general form.
///
/// This structure is used as a first storage independent representation format for different
/// parse results to be transformed to.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct GeneralForm<F> {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Sparse objective function coefficients, sorted by column.
    cost: Vec<(usize, F)>,
    /// Constant in the objective function.
    fixed_cost: F,
    constraints: Vec<Constraint<F>>,
    /// Names of the variables, indexed by column.
    variable_names: Vec<String>,
}

impl<F: OrderedField> GeneralForm<F> {
    /// Create a new linear program in general form.
    ///
    /// # Errors
    ///
    /// An `InconsistencyError` if a term refers to an unknown column, if the terms of a row or of
    /// the objective function are not sorted and unique, or if two variables have the same name.
    pub fn new(
        objective: Objective,
        cost: Vec<(usize, F)>,
        fixed_cost: F,
        constraints: Vec<Constraint<F>>,
        variable_names: Vec<String>,
    ) -> Result<Self, InconsistencyError> {
        let nr_variables = variable_names.len();
        let check_terms = |terms: &[(usize, F)], location: &str| {
            if let Some(&(column, _)) = terms.iter().find(|&&(column, _)| column >= nr_variables) {
                return Err(InconsistencyError::new(format!(
                    "{} refers to column {}, but there are only {} variables", location, column, nr_variables,
                )));
            }
            if !terms.windows(2).all(|pair| pair[0].0 < pair[1].0) {
                return Err(InconsistencyError::new(format!(
                    "Terms of {} are not sorted by column or not unique", location,
                )));
            }

            Ok(())
        };

        check_terms(&cost, "the objective function")?;
        for (row, constraint) in constraints.iter().enumerate() {
            check_terms(&constraint.terms, &format!("constraint {}", row))?;
        }
        if let Some(duplicate) = variable_names.iter().duplicates().next() {
            return Err(InconsistencyError::new(format!("Variable \"{}\" is defined twice", duplicate)));
        }

        Ok(Self { objective, cost, fixed_cost, constraints, variable_names })
    }

    /// Convert to a dense linear program in standard form.
    ///
    /// * A `<=` constraint is kept as it is.
    /// * A `>=` constraint is multiplied by `-1`.
    /// * An `=` constraint is split into a `<=` and a `>=` constraint, in that order.
    /// * When minimizing, the cost is negated. The fixed cost is not part of the standard form,
    ///   see `compute_solution` to get the objective function value back.
    ///
    /// # Errors
    ///
    /// Only if the dimensions of this program are inconsistent, which `new` prevents.
    pub fn derive_standard_form(&self) -> Result<LinearProgram<F>, ShapeError> {
        let nr_variables = self.nr_variables();
        let dense = |terms: &[(usize, F)]| {
            let mut row = vec![F::zero(); nr_variables];
            for (column, value) in terms {
                row[*column] = value.clone();
            }
            row
        };
        let negated = |row: &[F]| row.iter().map(|value| -value.clone()).collect::<Vec<_>>();

        let mut rows = Vec::with_capacity(self.nr_constraints());
        let mut b = Vec::with_capacity(self.nr_constraints());
        for constraint in &self.constraints {
            let row = dense(&constraint.terms);
            match constraint.relation {
                ConstraintType::Less => {
                    rows.push(row);
                    b.push(constraint.rhs.clone());
                },
                ConstraintType::Greater => {
                    rows.push(negated(&row));
                    b.push(-constraint.rhs.clone());
                },
                ConstraintType::Equal => {
                    let opposite = negated(&row);
                    rows.push(row);
                    rows.push(opposite);
                    b.push(constraint.rhs.clone());
                    b.push(-constraint.rhs.clone());
                },
            }
        }

        let cost = match self.objective {
            Objective::Maximize => dense(&self.cost),
            Objective::Minimize => negated(&dense(&self.cost)),
        };

        LinearProgram::new(cost, rows, b)
    }

    /// Express the result of solving the standard form in terms of this program.
    ///
    /// # Arguments
    ///
    /// * `result`: Result of solving the output of `derive_standard_form`.
    ///
    /// # Return value
    ///
    /// For a finite optimum, a `Solution` with the value of the objective function as written,
    /// including its direction and constant, and the value of each named variable.
    pub fn compute_solution(&self, result: OptimizationResult<F>) -> LinearProgramType<F> {
        match result {
            OptimizationResult::FiniteOptimum { objective_value, solution } => {
                debug_assert_eq!(solution.len(), self.nr_variables());

                let objective_value = match self.objective {
                    Objective::Maximize => objective_value,
                    Objective::Minimize => -objective_value,
                } + &self.fixed_cost;
                let solution_values = self.variable_names.iter().cloned()
                    .zip(solution)
                    .collect();

                LinearProgramType::FiniteOptimum(Solution::new(objective_value, solution_values))
            },
            OptimizationResult::Infeasible => LinearProgramType::Infeasible,
            OptimizationResult::Unbounded => LinearProgramType::Unbounded,
        }
    }

    /// Number of variables, named or not.
    pub fn nr_variables(&self) -> usize {
        self.variable_names.len()
    }

    /// Number of constraints, before splitting equalities.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Objective function coefficients, sorted by column.
    pub fn cost(&self) -> &[(usize, F)] {
        &self.cost
    }

    /// Constant in the objective function, added to the reported objective value.
    pub fn fixed_cost(&self) -> &F {
        &self.fixed_cost
    }

    /// Constraints in the order they were read.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Names of the variables, indexed by column.
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Render a linear expression in the LP text format.
    ///
    /// Coefficients are always followed by an explicit `*`, as the format has no implicit
    /// multiplication. Zero coefficients are written as well, such that a variable whose terms
    /// cancelled out keeps its column when read again.
    fn write_expression(&self, f: &mut Formatter<'_>, terms: &[(usize, F)], constant: &F) -> fmt::Result {
        let mut parts = terms.iter()
            .map(|(column, value)| (value.clone(), Some(self.variable_names[*column].as_str())))
            .collect::<Vec<_>>();
        if !constant.is_zero() || parts.is_empty() {
            parts.push((constant.clone(), None));
        }

        for (index, (value, name)) in parts.into_iter().enumerate() {
            let is_negative = value.is_negative();
            let magnitude = if is_negative { -value } else { value };
            match (index, is_negative) {
                (0, false) => {},
                (0, true) => f.write_str("-")?,
                (_, false) => f.write_str(" + ")?,
                (_, true) => f.write_str(" - ")?,
            }
            match name {
                Some(name) if magnitude.is_one() => f.write_str(name)?,
                Some(name) => write!(f, "{}*{}", magnitude, name)?,
                None => write!(f, "{}", magnitude)?,
            }
        }

        Ok(())
    }
}

/// Renders in the LP text format, such that it can be read again.
impl<F: OrderedField> Display for GeneralForm<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for constraint in &self.constraints {
            self.write_expression(f, &constraint.terms, &F::zero())?;
            write!(f, " {} ", constraint.relation)?;
            self.write_expression(f, &[], &constraint.rhs)?;
            writeln!(f)?;
        }

        write!(f, "{} ", self.objective)?;
        self.write_expression(f, &self.cost, &self.fixed_cost)?;
        writeln!(f)?;

        writeln!(f, "% variables: {}", self.variable_names.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use relp_num::{RationalBig, RB};

    use crate::algorithm::{OptimizationResult, solve};
    use crate::data::linear_program::elements::{ConstraintType, LinearProgramType, Objective};
    use crate::data::linear_program::general_form::{Constraint, GeneralForm};
    use crate::data::linear_program::solution::Solution;
    use crate::data::linear_program::standard_form::LinearProgram;
    use crate::io::lp::parse;
    use crate::tests::problem_2;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn inconsistent() {
        let unknown_column = GeneralForm::new(
            Objective::Maximize,
            vec![(2, RB!(1))],
            RB!(0),
            vec![],
            names(&["x", "y"]),
        );
        assert!(unknown_column.is_err());

        let unsorted = GeneralForm::new(
            Objective::Maximize,
            vec![],
            RB!(0),
            vec![Constraint::new(vec![(1, RB!(1)), (0, RB!(1))], ConstraintType::Less, RB!(1))],
            names(&["x", "y"]),
        );
        assert!(unsorted.is_err());

        let duplicate_name = GeneralForm::<RationalBig>::new(
            Objective::Maximize,
            vec![],
            RB!(0),
            vec![],
            names(&["x", "x"]),
        );
        assert!(duplicate_name.is_err());
    }

    #[test]
    fn standard_form() {
        let general = GeneralForm::new(
            Objective::Minimize,
            vec![(0, RB!(1)), (1, RB!(-2))],
            RB!(5),
            vec![
                Constraint::new(vec![(0, RB!(1)), (1, RB!(1))], ConstraintType::Equal, RB!(2)),
                Constraint::new(vec![(1, RB!(3))], ConstraintType::Greater, RB!(1)),
                Constraint::new(vec![(0, RB!(1))], ConstraintType::Less, RB!(4)),
            ],
            names(&["x", "y"]),
        ).unwrap();

        let expected = LinearProgram::new(
            vec![RB!(-1), RB!(2)],
            vec![
                vec![RB!(1), RB!(1)],
                vec![RB!(-1), RB!(-1)],
                vec![RB!(0), RB!(-3)],
                vec![RB!(1), RB!(0)],
            ],
            vec![RB!(2), RB!(-2), RB!(-1), RB!(4)],
        ).unwrap();
        assert_eq!(general.derive_standard_form().unwrap(), expected);
    }

    #[test]
    fn minimize_with_constant() {
        // minimize x - 2y + 5 subject to x + y = 2, 3y >= 1, x <= 4: optimum at (0, 2)
        let general = GeneralForm::new(
            Objective::Minimize,
            vec![(0, RB!(1)), (1, RB!(-2))],
            RB!(5),
            vec![
                Constraint::new(vec![(0, RB!(1)), (1, RB!(1))], ConstraintType::Equal, RB!(2)),
                Constraint::new(vec![(1, RB!(3))], ConstraintType::Greater, RB!(1)),
                Constraint::new(vec![(0, RB!(1))], ConstraintType::Less, RB!(4)),
            ],
            names(&["x", "y"]),
        ).unwrap();

        let result = solve(&general.derive_standard_form().unwrap());
        assert_eq!(result, OptimizationResult::FiniteOptimum {
            objective_value: RB!(4),
            solution: vec![RB!(0), RB!(2)],
        });
        assert_eq!(
            general.compute_solution(result),
            LinearProgramType::FiniteOptimum(Solution::new(
                RB!(1),
                vec![("x".to_string(), RB!(0)), ("y".to_string(), RB!(2))],
            )),
        );
    }

    #[test]
    fn other_outcomes() {
        let general = parse::<RationalBig>(problem_2::LP_LITERAL_STRING).unwrap();
        assert_eq!(general.compute_solution(OptimizationResult::Infeasible), LinearProgramType::Infeasible);
        assert_eq!(general.compute_solution(OptimizationResult::Unbounded), LinearProgramType::Unbounded);
    }

    #[test]
    fn display_can_be_read_again() {
        let text = "2*x + 1 >= y - 3 + x\n3*z/2 = 1/2\n#minimize 4 - (x + y) / 2 - 3*z\n";
        let general = parse::<RationalBig>(text).unwrap();
        let rendered = general.to_string();

        assert_eq!(parse::<RationalBig>(&rendered).unwrap(), general);
    }

    #[test]
    fn cancelled_variable_is_kept() {
        let general = parse::<RationalBig>("x - x + y <= 1\n#maximize y\n").unwrap();
        assert_eq!(general.variable_names(), &["x", "y"]);
        assert_eq!(general.constraints()[0].terms(), &[(0, RB!(0)), (1, RB!(1))]);

        let rendered = general.to_string();
        assert!(rendered.starts_with("0*x + y <= 1\n"));
        assert_eq!(parse::<RationalBig>(&rendered).unwrap(), general);
    }

    #[test]
    fn display() {
        let general = parse::<RationalBig>("x + 2*y <= 4\n-x >= -3\n#maximize x - y\n").unwrap();
        let rendered = general.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("x + ") && lines[0].contains(" <= "));
        assert!(lines[1].starts_with("-x >= -"));
        assert_eq!(lines[2], "#maximize x - y");
        assert_eq!(lines[3], "% variables: x, y");
    }
}
