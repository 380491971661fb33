//! Boundary to an external equation-solving service
//!
//! The service itself is not part of this crate; implementations of
//! [`EquationSolver`] are injected by the caller. A solver that talks to a
//! real service takes its key as a [`SolverCredential`].

mod credential;
mod errors;
mod request;
mod solve;

pub use credential::SolverCredential;
pub use errors::SolverError;
pub use request::SolverRequest;
pub use solve::{
    MISSING_EQUALS_MESSAGE, NO_SOLUTION_MESSAGE, SOLUTION_LABEL, SOLVER_FAILED_MESSAGE,
    request_solution, solve_equation,
};

/// A service that answers an equation with free-form text
pub trait EquationSolver {
    /// `Ok(None)` means the service answered without any candidate
    /// solution.
    ///
    /// # Errors
    ///
    /// Returns an error when the service cannot be reached or rejects the
    /// request.
    fn solve(&self, request: &SolverRequest) -> Result<Option<String>, SolverError>;
}
