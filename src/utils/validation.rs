use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the input has no `=` separating the two sides.
pub fn validate_equation(input: &str) -> Result<(), UtilsError> {
    debug!("Validating equation: '{}'", input);

    if !input.contains('=') {
        warn!("Equation has no '=': '{}'", input);
        return Err(UtilsError::MissingEquationOperator);
    }

    Ok(())
}
