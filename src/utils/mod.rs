//! Small helpers shared by the tokenizer, the parser and the solver boundary

mod digits;
mod errors;
mod format;
mod validation;

pub use digits::digits_to_number;
pub use errors::UtilsError;
pub use format::format_number;
pub use validation::validate_equation;
