//! Symbolic capabilities the stepper depends on, and the built-in engine
//! that provides them

mod engine;
mod steps;

pub use engine::SymbolicEngine;
pub use steps::{MAX_SIMPLIFY_ITERATIONS, simplify_trace};

use crate::expression::ParseError;

/// Re-serializes raw input into a canonical, display-ready form
pub trait Parser {
    /// # Errors
    ///
    /// Returns an error when the input is not a well-formed expression.
    fn canonical_form(&self, input: &str) -> Result<String, ParseError>;
}

/// Produces the next, simpler form of an expression
pub trait Simplifier {
    /// Returns the input unchanged once nothing is left to simplify.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not a well-formed expression.
    fn simplify(&self, expression: &str) -> Result<String, ParseError>;
}

#[cfg(test)]
mod tests;
