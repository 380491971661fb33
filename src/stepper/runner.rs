use log::{debug, info, warn};
use rayon::prelude::*;

use crate::stepper::errors::StepperError;
use crate::stepper::scan::evaluate;
use crate::symbolic::{Parser, SymbolicEngine};
use crate::token::tokenize;
use crate::trace::{EvaluationResult, INVALID_EQUATION, ORIGINAL_EXPRESSION_LABEL, TraceStep};

/// Turns raw input into a left-to-right evaluation trace.
///
/// Holds no state between calls; the parser only supplies the
/// `Original Expression` text.
#[derive(Debug, Clone, Default)]
pub struct Stepper<P = SymbolicEngine> {
    parser: P,
}

impl Stepper {
    pub fn new() -> Self {
        Self {
            parser: SymbolicEngine,
        }
    }
}

impl<P: Parser> Stepper<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Full trace for `input`: `Original Expression`, one `Step n` per
    /// token, then `Final Result`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser rejects the input, if no tokens can be
    /// extracted, or if there is no number to evaluate.
    pub fn trace(&self, input: &str) -> Result<Vec<TraceStep>, StepperError> {
        let original = self.parser.canonical_form(input)?;
        let tokens = tokenize(input)?;
        debug!("Evaluating {} tokens from '{}'", tokens.len(), input);

        let mut steps = Vec::with_capacity(tokens.len() + 2);
        steps.push(TraceStep::new(ORIGINAL_EXPRESSION_LABEL, original));
        steps.extend(evaluate(&tokens)?);
        Ok(steps)
    }

    /// Like [`Stepper::trace`], but any failure becomes a single
    /// `Error: Invalid equation!` step.
    pub fn solve(&self, input: &str) -> EvaluationResult {
        match self.trace(input) {
            Ok(steps) => {
                info!("Solved '{}' in {} steps", input, steps.len());
                EvaluationResult::Success(steps)
            }
            Err(e) => {
                warn!("Invalid equation '{}': {}", input, e);
                EvaluationResult::failure(INVALID_EQUATION)
            }
        }
    }
}

impl<P: Parser + Sync> Stepper<P> {
    /// Solve every input in parallel; results keep the input order.
    pub fn solve_all<S>(&self, inputs: &[S]) -> Vec<EvaluationResult>
    where
        S: AsRef<str> + Sync,
    {
        info!("Solving {} inputs", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.solve(input.as_ref()))
            .collect()
    }
}
