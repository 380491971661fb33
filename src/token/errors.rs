use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizeError {
    #[error("Input contains no numbers or operators: '{0}'")]
    InvalidInput(String),
    #[error("Bad number literal: {0}")]
    Number(#[from] UtilsError),
}
