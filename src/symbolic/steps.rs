use log::{debug, info, warn};

use crate::expression::ParseError;
use crate::symbolic::{Parser, Simplifier};
use crate::trace::{
    EvaluationResult, FINAL_RESULT_LABEL, INVALID_EQUATION, ORIGINAL_EXPRESSION_LABEL, TraceStep,
};

pub const MAX_SIMPLIFY_ITERATIONS: usize = 5;

/// Trace of repeated simplification: the canonical form, one
/// `Simplification n` step per pass that changed something (at most
/// [`MAX_SIMPLIFY_ITERATIONS`]), and the last form as the final result.
///
/// Errors never escape; they become a single `Error` step.
pub fn simplify_trace<P, S>(parser: &P, simplifier: &S, input: &str) -> EvaluationResult
where
    P: Parser + ?Sized,
    S: Simplifier + ?Sized,
{
    match simplification_steps(parser, simplifier, input) {
        Ok(steps) => EvaluationResult::Success(steps),
        Err(e) => {
            warn!("Could not simplify '{}': {}", input, e);
            EvaluationResult::failure(INVALID_EQUATION)
        }
    }
}

fn simplification_steps<P, S>(
    parser: &P,
    simplifier: &S,
    input: &str,
) -> Result<Vec<TraceStep>, ParseError>
where
    P: Parser + ?Sized,
    S: Simplifier + ?Sized,
{
    let mut current = parser.canonical_form(input)?;
    let mut steps = vec![TraceStep::new(ORIGINAL_EXPRESSION_LABEL, current.clone())];

    for iteration in 1..=MAX_SIMPLIFY_ITERATIONS {
        let next = simplifier.simplify(&current)?;
        if next == current {
            debug!("Simplification settled after {} passes", iteration - 1);
            break;
        }
        steps.push(TraceStep::new(format!("Simplification {}", iteration), next.clone()));
        current = next;
    }

    info!("Simplified '{}' to '{}'", input, current);
    steps.push(TraceStep::new(FINAL_RESULT_LABEL, current));
    Ok(steps)
}
