use crate::expression::{Expression, ParseError};
use crate::symbolic::{Parser, Simplifier};

/// [`Parser`] and [`Simplifier`] backed by [`Expression`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolicEngine;

impl Parser for SymbolicEngine {
    fn canonical_form(&self, input: &str) -> Result<String, ParseError> {
        Ok(Expression::parse(input)?.to_string())
    }
}

impl Simplifier for SymbolicEngine {
    fn simplify(&self, expression: &str) -> Result<String, ParseError> {
        Ok(Expression::parse(expression)?.simplify_once().to_string())
    }
}
