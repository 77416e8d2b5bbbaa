//! Roll entity rules shared by the repository and HTTP layers.

use crate::error::CoreError;

/// Entity name used in `NotFound` errors and log fields.
pub const ROLL_ENTITY: &str = "Roll";

/// Validate the physical dimensions of a new roll.
///
/// Both values must be finite and strictly positive.
pub fn validate_roll_dimensions(length: f64, weight: f64) -> Result<(), CoreError> {
    validate_positive(length, "length")?;
    validate_positive(weight, "weight")
}

fn validate_positive(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a positive number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_positive_dimensions() {
        assert!(validate_roll_dimensions(1.5, 2.5).is_ok());
        assert!(validate_roll_dimensions(f64::MIN_POSITIVE, 1e9).is_ok());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_matches!(
            validate_roll_dimensions(0.0, 1.0),
            Err(CoreError::Validation(msg)) if msg.starts_with("length")
        );
        assert_matches!(
            validate_roll_dimensions(1.0, -3.0),
            Err(CoreError::Validation(msg)) if msg.starts_with("weight")
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(validate_roll_dimensions(f64::NAN, 1.0).is_err());
        assert!(validate_roll_dimensions(1.0, f64::INFINITY).is_err());
    }
}
