//! Validation of raw user-supplied field values.
//!
//! The presentation layer hands over whatever the user typed; this module is
//! the only gate between those strings and the record model. Checks run in a
//! fixed order and the first failure wins:
//!
//! 1. Missing fields (name after trimming, strength, volume)
//! 2. Strength range (finite, 0–100)
//! 3. Volume range (finite, ≥ 1 ml)
//!
//! On success the parsed numbers and the trimmed name are returned so callers
//! never re-parse. Pure: no side effects, no panics; failures are `Err`
//! values of the crate error enum.

use crate::error::{DramlogError, Result};

/// Parsed, range-checked field values for a drink about to be logged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDrink {
    pub name: String,
    pub strength_percent: f64,
    pub volume_ml: f64,
}

pub fn validate(name: &str, strength_raw: &str, volume_raw: &str) -> Result<ValidDrink> {
    let name = name.trim();
    let strength_raw = strength_raw.trim();
    let volume_raw = volume_raw.trim();

    if name.is_empty() || strength_raw.is_empty() || volume_raw.is_empty() {
        return Err(DramlogError::MissingField);
    }

    let strength_percent: f64 = strength_raw
        .parse()
        .map_err(|_| DramlogError::StrengthOutOfRange)?;
    if !strength_percent.is_finite() || !(0.0..=100.0).contains(&strength_percent) {
        return Err(DramlogError::StrengthOutOfRange);
    }

    let volume_ml: f64 = volume_raw.parse().map_err(|_| DramlogError::VolumeInvalid)?;
    if !volume_ml.is_finite() || volume_ml < 1.0 {
        return Err(DramlogError::VolumeInvalid);
    }

    Ok(ValidDrink {
        name: name.to_string(),
        strength_percent,
        volume_ml,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        let input = validate("Beer", "5", "500").unwrap();
        assert_eq!(input.name, "Beer");
        assert_eq!(input.strength_percent, 5.0);
        assert_eq!(input.volume_ml, 500.0);
    }

    #[test]
    fn trims_the_name() {
        let input = validate("  Stout  ", "4.2", "330").unwrap();
        assert_eq!(input.name, "Stout");
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(matches!(
            validate("", "5", "500"),
            Err(DramlogError::MissingField)
        ));
        assert!(matches!(
            validate("   ", "5", "500"),
            Err(DramlogError::MissingField)
        ));
        assert!(matches!(
            validate("Beer", "", "500"),
            Err(DramlogError::MissingField)
        ));
        assert!(matches!(
            validate("Beer", "5", ""),
            Err(DramlogError::MissingField)
        ));
    }

    #[test]
    fn missing_field_wins_over_range_checks() {
        // Volume would also be invalid; the missing strength is reported first.
        assert!(matches!(
            validate("Beer", "", "0"),
            Err(DramlogError::MissingField)
        ));
    }

    #[test]
    fn rejects_strength_out_of_range() {
        assert!(matches!(
            validate("Beer", "101", "500"),
            Err(DramlogError::StrengthOutOfRange)
        ));
        assert!(matches!(
            validate("Beer", "-1", "500"),
            Err(DramlogError::StrengthOutOfRange)
        ));
        assert!(matches!(
            validate("Beer", "abc", "500"),
            Err(DramlogError::StrengthOutOfRange)
        ));
        assert!(matches!(
            validate("Beer", "inf", "500"),
            Err(DramlogError::StrengthOutOfRange)
        ));
        assert!(matches!(
            validate("Beer", "NaN", "500"),
            Err(DramlogError::StrengthOutOfRange)
        ));
    }

    #[test]
    fn accepts_strength_boundaries() {
        assert!(validate("Water", "0", "500").is_ok());
        assert!(validate("Spirit", "100", "30").is_ok());
    }

    #[test]
    fn rejects_invalid_volume() {
        assert!(matches!(
            validate("Beer", "5", "0"),
            Err(DramlogError::VolumeInvalid)
        ));
        assert!(matches!(
            validate("Beer", "5", "0.5"),
            Err(DramlogError::VolumeInvalid)
        ));
        assert!(matches!(
            validate("Beer", "5", "xyz"),
            Err(DramlogError::VolumeInvalid)
        ));
    }

    #[test]
    fn strength_check_runs_before_volume_check() {
        assert!(matches!(
            validate("Beer", "200", "0"),
            Err(DramlogError::StrengthOutOfRange)
        ));
    }
}
