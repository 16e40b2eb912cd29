//! Total dissolved solids validator
//!
//! TDS meters derive mg/L from a conductivity measurement, so the strongest
//! check available is the inverse of the conductivity validator's: a TDS
//! reading must sit within the natural-water ratio band of any paired
//! conductivity reading from the same cycle.

use crate::{
    constants::{
        params::{TDS_ACCURACY_MG_L, TDS_DRINKING_MAX_MG_L, TDS_EC_RATIO_MAX, TDS_EC_RATIO_MIN,
                 TDS_EC_RATIO_MIN_EC_US_CM, TDS_MAX_RATE_MG_L_PER_S, TDS_SENSOR_MAX_MG_L,
                 TDS_SENSOR_MIN_MG_L},
        quality::QUALITY_THRESHOLD_ACCEPTABLE,
    },
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidationContext, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for total-dissolved-solids readings in mg/L
#[derive(Debug, Clone)]
pub struct TdsValidator {
    /// Minimum plausible TDS in mg/L
    min_mg_l: f32,

    /// Maximum plausible TDS in mg/L
    max_mg_l: f32,

    /// Maximum rate of change in mg/L per second
    max_rate_mg_l_per_sec: f32,
}

impl Default for TdsValidator {
    fn default() -> Self {
        Self {
            min_mg_l: TDS_SENSOR_MIN_MG_L,
            max_mg_l: TDS_SENSOR_MAX_MG_L,
            max_rate_mg_l_per_sec: TDS_MAX_RATE_MG_L_PER_S,
        }
    }
}

impl TdsValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32, max_rate: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_mg_l: min.max(0.0),
            max_mg_l: max,
            max_rate_mg_l_per_sec: max_rate.abs(),
        }
    }

    /// Validator for drinking water (WHO palatability ceiling)
    pub fn drinking_water() -> Self {
        Self {
            min_mg_l: 0.0,
            max_mg_l: TDS_DRINKING_MAX_MG_L,
            max_rate_mg_l_per_sec: 10.0,
        }
    }

    /// Check TDS against a paired conductivity reading from the same cycle
    fn validate_against_conductivity(&self, tds_mg_l: f32, ec_us_cm: f32) -> ValidationResult<()> {
        if ec_us_cm < TDS_EC_RATIO_MIN_EC_US_CM {
            return Ok(());
        }

        let ratio = tds_mg_l / ec_us_cm;
        if ratio < TDS_EC_RATIO_MIN || ratio > TDS_EC_RATIO_MAX {
            return Err(ValidationError::CrossValidationFailed {
                reason: "TDS inconsistent with paired conductivity",
            });
        }

        Ok(())
    }
}

impl Validator for TdsValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value, context: &ValidationContext) -> ValidationResult<()> {
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min_mg_l, self.max_mg_l)?;

        if let Some(last_reading) = utils::last_reading(&context.history) {
            let rate =
                utils::calculate_rate_from_readings(value, context.timestamp, last_reading);

            if rate > self.max_rate_mg_l_per_sec {
                return Err(ValidationError::RateExceeded {
                    rate,
                    max_rate: self.max_rate_mg_l_per_sec,
                });
            }
        }

        // Cross-validation with paired conductivity if available
        if let Some(ec) = context.conductivity {
            self.validate_against_conductivity(value, ec)?;
        }

        if context.sensor_quality < QUALITY_THRESHOLD_ACCEPTABLE {
            return Err(ValidationError::SensorQualityBad {
                reason: "TDS probe degraded",
            });
        }

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_mg_l,
            max_value: self.max_mg_l,
            max_rate_change: self.max_rate_mg_l_per_sec,
            noise_threshold: Some(TDS_ACCURACY_MG_L),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tds() {
        let validator = TdsValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(320.0, &context).is_ok());
        assert!(validator.validate(0.0, &context).is_ok());
    }

    #[test]
    fn tds_out_of_range() {
        let validator = TdsValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(-10.0, &context).is_err());
        assert!(validator.validate(15000.0, &context).is_err());
        assert!(validator.validate(f32::INFINITY, &context).is_err());
    }

    #[test]
    fn cross_check_against_conductivity() {
        let validator = TdsValidator::default();
        let mut context = ValidationContext::default();

        // 320 mg/L against 450 µS/cm: ratio 0.71, consistent
        context.conductivity = Some(450.0);
        assert!(validator.validate(320.0, &context).is_ok());

        // 900 mg/L against 450 µS/cm: ratio 2.0, impossible
        let result = validator.validate(900.0, &context);
        assert!(matches!(result, Err(ValidationError::CrossValidationFailed { .. })));
    }

    #[test]
    fn tds_rate_exceeded() {
        let validator = TdsValidator::default();
        let mut context = ValidationContext::default();

        context.add_reading(300.0, 1000);
        context.timestamp = 2000;

        let result = validator.validate(600.0, &context);
        assert!(matches!(result, Err(ValidationError::RateExceeded { .. })));
    }

    #[test]
    fn drinking_water_ceiling() {
        let validator = TdsValidator::drinking_water();
        let context = ValidationContext::default();

        assert!(validator.validate(400.0, &context).is_ok());
        assert!(validator.validate(2500.0, &context).is_err());
    }
}
