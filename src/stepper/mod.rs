//! Left-to-right stepwise evaluation
//!
//! Tokens are applied strictly in the order they appear: there is no
//! operator precedence and parentheses are shown but never grouped, so
//! `12+3*4-5/2` evaluates as `((((12+3)*4)-5)/2) = 28.5`.

mod errors;
mod runner;
mod scan;

pub use errors::StepperError;
pub use runner::Stepper;
pub use scan::evaluate;

#[cfg(test)]
mod tests;
