use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the slice is empty or contains a NaN, infinite or
/// negative value.
pub fn validate_numbers(numbers: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("No numbers given");
        return Err(UtilsError::EmptyInput);
    }

    for &n in numbers {
        if !n.is_finite() {
            warn!("Rejecting non-finite number: {}", n);
            return Err(UtilsError::NonFiniteNumber(n));
        }
        if n < 0.0 {
            warn!("Rejecting negative number: {}", n);
            return Err(UtilsError::NegativeNumber(n));
        }
    }

    debug!("Number validation successful");
    Ok(())
}
