//! # Representation of feasible solutions
//!
//! Once a linear program is fully solved, a solution is derived. It refers to the variables by the
//! names they had in the problem file, and is what gets printed for the user.
use std::fmt;
use std::fmt::{Display, Formatter};

/// Represents a full solution to a linear program.
///
/// Should represent a solution that is feasible. This struct would probably be used to print the
/// optimal solution for the user.
#[derive(Eq, PartialEq, Debug)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, including any constant that was included
    /// in the original problem.
    objective_value: F,
    /// (variable name, solution value) tuples for all variables, named as in the original problem.
    solution_values: Vec<(String, F)>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, solution_values: Vec<(String, F)>) -> Self {
        Self {
            objective_value,
            solution_values,
        }
    }

    /// Value of the objective function, including its constant.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Value of each variable, in the order the variables were numbered.
    pub fn solution_values(&self) -> &[(String, F)] {
        &self.solution_values
    }

    /// Value of a single variable by name.
    pub fn value(&self, name: &str) -> Option<&F> {
        self.solution_values.iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, value)| value)
    }
}

/// One line with the objective function value, followed by one line for each variable.
impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "objective value: {}", self.objective_value)?;
        for (name, value) in &self.solution_values {
            write!(f, "\n{} = {}", name, value)?;
        }

        Ok(())
    }
}
