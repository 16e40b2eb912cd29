//! Conductivity Validation with Ion-Chemistry Cross-Checks
//!
//! ## Background
//!
//! Conductivity measures how well water conducts current, which tracks the
//! total dissolved ion load. That coupling is what makes it cross-checkable:
//! TDS meters don't measure solids at all, they measure conductivity and
//! multiply by a conversion factor, so an independent TDS reading from the
//! same cycle must sit within a known ratio of the conductivity reading:
//!
//! ```text
//! TDS (mg/L) ≈ k × EC (µS/cm),   k ≈ 0.55-0.75 for natural water
//! ```
//!
//! The validator accepts a widened 0.4-0.9 band to cover unusual ion
//! compositions; readings outside it mean one of the two probes is lying.
//! The check is skipped near zero conductivity, where both instruments are
//! dominated by noise and the ratio is meaningless.
//!
//! ## Typical values
//!
//! - Ultrapure/distilled: < 1 µS/cm
//! - Rain: 5-50 µS/cm
//! - Rivers and lakes: 100-1500 µS/cm
//! - Brackish: 1500-15000 µS/cm
//! - Seawater: ~50000 µS/cm (out of range for this crate's probes)

use crate::{
    constants::{
        params::{CONDUCTIVITY_ACCURACY_US_CM, CONDUCTIVITY_FRESHWATER_MAX_US_CM,
                 CONDUCTIVITY_MAX_RATE_US_CM_PER_S, CONDUCTIVITY_SENSOR_MAX_US_CM,
                 CONDUCTIVITY_SENSOR_MIN_US_CM, TDS_EC_RATIO_MAX, TDS_EC_RATIO_MIN,
                 TDS_EC_RATIO_MIN_EC_US_CM},
        quality::QUALITY_THRESHOLD_ACCEPTABLE,
    },
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidationContext, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for conductivity readings in µS/cm
#[derive(Debug, Clone)]
pub struct ConductivityValidator {
    /// Minimum plausible conductivity in µS/cm
    min_us_cm: f32,

    /// Maximum plausible conductivity in µS/cm
    max_us_cm: f32,

    /// Maximum rate of change in µS/cm per second
    max_rate_us_cm_per_sec: f32,
}

impl Default for ConductivityValidator {
    fn default() -> Self {
        Self {
            min_us_cm: CONDUCTIVITY_SENSOR_MIN_US_CM,
            max_us_cm: CONDUCTIVITY_SENSOR_MAX_US_CM,
            max_rate_us_cm_per_sec: CONDUCTIVITY_MAX_RATE_US_CM_PER_S,
        }
    }
}

impl ConductivityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32, max_rate: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_us_cm: min.max(0.0),
            max_us_cm: max,
            max_rate_us_cm_per_sec: max_rate.abs(),
        }
    }

    /// Validator for unpolluted inland freshwater
    pub fn freshwater() -> Self {
        Self {
            min_us_cm: 0.0,
            max_us_cm: CONDUCTIVITY_FRESHWATER_MAX_US_CM,
            max_rate_us_cm_per_sec: 20.0,
        }
    }

    /// Check conductivity against a paired TDS reading from the same cycle
    fn validate_against_tds(&self, ec_us_cm: f32, tds_mg_l: f32) -> ValidationResult<()> {
        if ec_us_cm < TDS_EC_RATIO_MIN_EC_US_CM {
            return Ok(());
        }

        let ratio = tds_mg_l / ec_us_cm;
        if ratio < TDS_EC_RATIO_MIN || ratio > TDS_EC_RATIO_MAX {
            return Err(ValidationError::CrossValidationFailed {
                reason: "TDS/conductivity ratio outside natural-water band",
            });
        }

        Ok(())
    }
}

impl Validator for ConductivityValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value, context: &ValidationContext) -> ValidationResult<()> {
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min_us_cm, self.max_us_cm)?;

        if let Some(last_reading) = utils::last_reading(&context.history) {
            let rate =
                utils::calculate_rate_from_readings(value, context.timestamp, last_reading);

            if rate > self.max_rate_us_cm_per_sec {
                return Err(ValidationError::RateExceeded {
                    rate,
                    max_rate: self.max_rate_us_cm_per_sec,
                });
            }
        }

        // Cross-validation with paired TDS if available
        if let Some(tds) = context.tds {
            self.validate_against_tds(value, tds)?;
        }

        if context.sensor_quality < QUALITY_THRESHOLD_ACCEPTABLE {
            return Err(ValidationError::SensorQualityBad {
                reason: "Conductivity cell scaled or degraded",
            });
        }

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_us_cm,
            max_value: self.max_us_cm,
            max_rate_change: self.max_rate_us_cm_per_sec,
            noise_threshold: Some(CONDUCTIVITY_ACCURACY_US_CM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_conductivity() {
        let validator = ConductivityValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(450.0, &context).is_ok());
        assert!(validator.validate(0.0, &context).is_ok());
    }

    #[test]
    fn conductivity_out_of_range() {
        let validator = ConductivityValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(-5.0, &context).is_err());
        assert!(validator.validate(30000.0, &context).is_err());
    }

    #[test]
    fn cross_check_against_tds() {
        let validator = ConductivityValidator::default();
        let mut context = ValidationContext::default();

        // 450 µS/cm with 300 mg/L TDS: ratio 0.67, consistent
        context.tds = Some(300.0);
        assert!(validator.validate(450.0, &context).is_ok());

        // 450 µS/cm with 50 mg/L TDS: ratio 0.11, one probe is wrong
        context.tds = Some(50.0);
        let result = validator.validate(450.0, &context);
        assert!(matches!(result, Err(ValidationError::CrossValidationFailed { .. })));
    }

    #[test]
    fn cross_check_skipped_near_zero() {
        let validator = ConductivityValidator::default();
        let mut context = ValidationContext::default();

        // Both probes in the noise floor; ratio is meaningless
        context.tds = Some(4.0);
        assert!(validator.validate(2.0, &context).is_ok());
    }

    #[test]
    fn freshwater_preset_limits() {
        let validator = ConductivityValidator::freshwater();
        let context = ValidationContext::default();

        assert!(validator.validate(800.0, &context).is_ok());
        // Brackish reading in a freshwater deployment
        assert!(validator.validate(5000.0, &context).is_err());
    }
}
