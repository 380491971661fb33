use std::slice;

use crate::trace::step::{FINAL_RESULT_LABEL, TraceStep};

/// Outcome of one run. A failure always carries exactly one `Error` step,
/// never a partial trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    Success(Vec<TraceStep>),
    Failure(TraceStep),
}

impl EvaluationResult {
    pub fn failure(message: impl Into<String>) -> Self {
        EvaluationResult::Failure(TraceStep::error(message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationResult::Success(_))
    }

    pub fn steps(&self) -> &[TraceStep] {
        match self {
            EvaluationResult::Success(steps) => steps,
            EvaluationResult::Failure(step) => slice::from_ref(step),
        }
    }

    /// Text of the `Final Result` step, if the run got that far
    pub fn final_result(&self) -> Option<&str> {
        match self {
            EvaluationResult::Success(steps) => steps
                .last()
                .filter(|step| step.label == FINAL_RESULT_LABEL)
                .map(|step| step.expression.as_str()),
            EvaluationResult::Failure(_) => None,
        }
    }
}
