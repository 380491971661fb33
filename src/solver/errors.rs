use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid equation: {0}")]
    InvalidEquation(#[from] UtilsError),
    #[error("Credential '{0}' is not configured")]
    MissingCredential(String),
    #[error("Solver service failed: {0}")]
    Service(String),
}
