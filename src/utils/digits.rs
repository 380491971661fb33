use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse `input[start..end]` as a floating point number.
///
/// Leading zeros are accepted, so `"007"` reads as `7`.
///
/// # Errors
///
/// Returns an error if the provided indices are out of bounds or invalid,
/// or if the selected slice cannot be parsed into a numeric value.
pub fn digits_to_number(input: &str, start: usize, end: usize) -> Result<f64, UtilsError> {
    if start >= input.len() || end > input.len() || start >= end {
        warn!(
            "Invalid range: start={}, end={}, length={}",
            start,
            end,
            input.len()
        );
        return Err(UtilsError::InvalidRange {
            start,
            end,
            length: input.len(),
        });
    }

    let slice = input.get(start..end).ok_or(UtilsError::InvalidRange {
        start,
        end,
        length: input.len(),
    })?;

    let result = slice
        .parse::<f64>()
        .map_err(|_| UtilsError::InvalidNumber(slice.to_string()))?;
    debug!("Converted '{}' to {}", slice, result);
    Ok(result)
}
