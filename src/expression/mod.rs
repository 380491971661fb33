//! Symbolic expression tree with a precedence-aware parser, canonical
//! printing and single-pass constant folding

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::Expression;
pub use errors::ParseError;
pub use parser::{MAX_DEPTH, MAX_NESTING};
