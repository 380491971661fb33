//! Math Stepper - step-by-step evaluation traces for arithmetic expressions
//!
//! The core is a tokenizer and a left-to-right evaluator that records every
//! intermediate state. Operators are applied strictly in the order they
//! appear, without precedence: `12+3*4-5/2` is `((((12+3)*4)-5)/2) = 28.5`.
//!
//! Around that core sit a precedence-aware symbolic parser (used for the
//! `Original Expression` step and for simplification traces), the boundary
//! to an external equation solver, and a caller-owned history.

pub mod expression;
pub mod history;
pub mod solver;
pub mod stepper;
pub mod symbolic;
pub mod token;
pub mod trace;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ParseError};
pub use history::{History, HistoryEntry};
pub use solver::{EquationSolver, SolverCredential, SolverError, SolverRequest, solve_equation};
pub use stepper::{Stepper, StepperError, evaluate};
pub use symbolic::{Parser, Simplifier, SymbolicEngine, simplify_trace};
pub use token::{Operator, Paren, Token, TokenizeError, tokenize};
pub use trace::{EvaluationResult, TraceStep};

/// Evaluate `input` left to right and return its full trace
///
/// This is a convenience function that uses the built-in symbolic parser for
/// the `Original Expression` step.
///
/// # Returns
///
/// * `EvaluationResult::Success(steps)` - `Original Expression`, one
///   `Step n` per token, then `Final Result`
/// * `EvaluationResult::Failure(step)` - a single `Error` step reading
///   `Invalid equation!`
///
/// # Examples
///
/// ```
/// use math_stepper::solve;
///
/// let result = solve("12+3*4-5/2");
/// assert_eq!(result.final_result(), Some("28.5"));
///
/// for step in result.steps() {
///     println!("{}", step);
/// }
///
/// assert!(!solve("abc").is_success());
/// ```
pub fn solve(input: &str) -> EvaluationResult {
    Stepper::new().solve(input)
}
