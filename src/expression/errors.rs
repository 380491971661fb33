use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] UtilsError),
    #[error("Expression nests deeper than {0} levels")]
    TooDeep(usize),
    #[error("Symbolic backend failed: {0}")]
    Backend(String),
}
