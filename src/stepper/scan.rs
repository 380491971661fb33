use log::debug;

use crate::stepper::errors::StepperError;
use crate::token::{Operator, Token};
use crate::trace::{FINAL_RESULT_LABEL, TraceStep};
use crate::utils::format_number;

#[derive(Debug, Default)]
struct ScanState {
    running_total: Option<f64>,
    pending_operator: Option<Operator>,
    expression_so_far: String,
}

impl ScanState {
    fn consume(&mut self, token: &Token) {
        match token {
            Token::Number { value, .. } => {
                self.running_total = Some(match self.pending_operator.take() {
                    // nothing seen yet counts as zero, so "-5" gives -5
                    Some(op) => op.apply(self.running_total.unwrap_or(0.0), *value),
                    None => *value,
                });
            }
            Token::Operator(op) => {
                if let Some(discarded) = self.pending_operator.replace(*op) {
                    debug!("Operator '{}' replaced by '{}'", discarded, op);
                }
            }
            Token::Paren(_) => {}
        }

        self.expression_so_far.push(' ');
        self.expression_so_far.push_str(&token.to_string());
    }
}

/// Scan `tokens` left to right, producing one `Step n` per token and a
/// closing `Final Result`.
///
/// A number either seeds the running total or, when an operator is pending,
/// is combined with it. An operator only becomes pending, so in `5++3` the
/// first `+` is discarded. Division by zero follows IEEE-754 and shows up
/// as `Infinity` or `NaN`.
///
/// # Errors
///
/// Returns [`StepperError::NoOperand`] when no token is a number.
pub fn evaluate(tokens: &[Token]) -> Result<Vec<TraceStep>, StepperError> {
    let mut state = ScanState::default();
    let mut steps = Vec::with_capacity(tokens.len() + 1);

    for (idx, token) in tokens.iter().enumerate() {
        state.consume(token);
        debug!("After '{}': total={:?}", token, state.running_total);
        steps.push(TraceStep::numbered(idx + 1, state.expression_so_far.trim()));
    }

    let total = state.running_total.ok_or(StepperError::NoOperand)?;
    steps.push(TraceStep::new(FINAL_RESULT_LABEL, format_number(total)));
    Ok(steps)
}
