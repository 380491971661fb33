//! Trace model: labeled snapshots of a computation, in the order they happened

mod result;
mod step;

pub use result::EvaluationResult;
pub use step::{
    ERROR_LABEL, FINAL_RESULT_LABEL, INVALID_EQUATION, ORIGINAL_EXPRESSION_LABEL, TraceStep,
};
