use thiserror::Error;

use crate::expression::ParseError;
use crate::token::TokenizeError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepperError {
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Expression contains no number to evaluate")]
    NoOperand,
}
