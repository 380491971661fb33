//! Tokenizer for the left-to-right stepper

mod errors;
mod scan;
mod types;

pub use errors::TokenizeError;
pub use scan::tokenize;
pub use types::{Operator, Paren, Token};
