use log::{debug, warn};

use crate::solver::constants::INPUT_LEN;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error unless `numbers` holds exactly four finite values.
pub fn validate_numbers(numbers: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.len() != INPUT_LEN {
        warn!(
            "Expected {} numbers, got {}",
            INPUT_LEN,
            numbers.len()
        );
        return Err(UtilsError::WrongCount(numbers.len()));
    }

    if let Some(&bad) = numbers.iter().find(|n| !n.is_finite()) {
        warn!("Number is not finite: {}", bad);
        return Err(UtilsError::NonFinite(bad));
    }

    debug!("Number validation successful");
    Ok(())
}
