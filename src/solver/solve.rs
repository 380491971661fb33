use log::{info, warn};

use crate::solver::EquationSolver;
use crate::solver::errors::SolverError;
use crate::solver::request::SolverRequest;
use crate::trace::{EvaluationResult, TraceStep};
use crate::utils::validate_equation;

pub const SOLUTION_LABEL: &str = "Solution";

pub const MISSING_EQUALS_MESSAGE: &str =
    "Invalid equation! Make sure to include '=' in your equation.";
pub const NO_SOLUTION_MESSAGE: &str = "Could not solve the equation. Try again!";
pub const SOLVER_FAILED_MESSAGE: &str = "Something went wrong. Please try again!";

/// Validate `input` and ask `solver` about it.
///
/// Input without `=` is rejected before the solver is called.
///
/// # Errors
///
/// Returns [`SolverError::InvalidEquation`] for input without `=`, or
/// whatever the solver reports.
pub fn request_solution<S>(solver: &S, input: &str) -> Result<Option<String>, SolverError>
where
    S: EquationSolver + ?Sized,
{
    validate_equation(input)?;
    let request = SolverRequest::for_equation(input);
    info!("Requesting solution for '{}'", request.equation);
    solver.solve(&request)
}

/// Solve `input` with `solver` and surface the answer verbatim as a single
/// `Solution` step. Every failure becomes a single `Error` step.
pub fn solve_equation<S>(solver: &S, input: &str) -> EvaluationResult
where
    S: EquationSolver + ?Sized,
{
    match request_solution(solver, input) {
        Ok(Some(text)) => EvaluationResult::Success(vec![TraceStep::new(SOLUTION_LABEL, text)]),
        Ok(None) => {
            warn!("Solver returned no candidates for '{}'", input);
            EvaluationResult::failure(NO_SOLUTION_MESSAGE)
        }
        Err(SolverError::InvalidEquation(e)) => {
            warn!("Rejected '{}': {}", input, e);
            EvaluationResult::failure(MISSING_EQUALS_MESSAGE)
        }
        Err(e) => {
            warn!("Error solving '{}': {}", input, e);
            EvaluationResult::failure(SOLVER_FAILED_MESSAGE)
        }
    }
}
