use std::fmt;

pub const ORIGINAL_EXPRESSION_LABEL: &str = "Original Expression";
pub const FINAL_RESULT_LABEL: &str = "Final Result";
pub const ERROR_LABEL: &str = "Error";

pub const INVALID_EQUATION: &str = "Invalid equation!";

/// One labeled snapshot of the computation shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub label: String,
    pub expression: String,
}

impl TraceStep {
    pub fn new(label: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            expression: expression.into(),
        }
    }

    /// `Step n`, numbered from 1
    pub fn numbered(n: usize, expression: impl Into<String>) -> Self {
        Self::new(format!("Step {}", n), expression)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ERROR_LABEL, message)
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.expression)
    }
}
