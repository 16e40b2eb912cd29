//! pH validator
//!
//! Validates acidity readings based on:
//! - The definition of the pH scale (0-14 for anything a field probe meets)
//! - Buffering: natural water shifts pH over minutes, not seconds
//! - Electrode health (glass electrodes drift and crack)

use crate::{
    constants::{
        params::{PH_ACCURACY, PH_DRINKING_MAX, PH_DRINKING_MIN, PH_MAX_RATE_PER_S, PH_SCALE_MAX,
                 PH_SCALE_MIN},
        quality::QUALITY_THRESHOLD_ACCEPTABLE,
    },
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidationContext, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for pH readings
#[derive(Debug, Clone)]
pub struct PhValidator {
    /// Minimum plausible pH
    min_ph: f32,

    /// Maximum plausible pH
    max_ph: f32,

    /// Maximum rate of change in pH units/second
    max_rate_per_sec: f32,
}

impl Default for PhValidator {
    fn default() -> Self {
        Self {
            // Full scale: a field probe reporting outside 0-14 is broken,
            // not measuring exotic chemistry
            min_ph: PH_SCALE_MIN,
            max_ph: PH_SCALE_MAX,
            max_rate_per_sec: PH_MAX_RATE_PER_S,
        }
    }
}

impl PhValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32, max_rate: f32) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_ph: min.max(PH_SCALE_MIN),
            max_ph: max.min(PH_SCALE_MAX),
            max_rate_per_sec: max_rate.abs(),
        }
    }

    /// Validator for treated drinking water (WHO operational band)
    pub fn drinking_water() -> Self {
        Self {
            min_ph: PH_DRINKING_MIN,
            max_ph: PH_DRINKING_MAX,
            max_rate_per_sec: 0.01, // Treated supply is heavily buffered
        }
    }
}

impl Validator for PhValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value, context: &ValidationContext) -> ValidationResult<()> {
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min_ph, self.max_ph)?;

        if let Some(last_reading) = utils::last_reading(&context.history) {
            let rate =
                utils::calculate_rate_from_readings(value, context.timestamp, last_reading);

            if rate > self.max_rate_per_sec {
                return Err(ValidationError::RateExceeded {
                    rate,
                    max_rate: self.max_rate_per_sec,
                });
            }
        }

        if context.sensor_quality < QUALITY_THRESHOLD_ACCEPTABLE {
            return Err(ValidationError::SensorQualityBad {
                reason: "pH electrode degraded",
            });
        }

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_ph,
            max_value: self.max_ph,
            max_rate_change: self.max_rate_per_sec,
            noise_threshold: Some(PH_ACCURACY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ph() {
        let validator = PhValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(7.0, &context).is_ok());
        assert!(validator.validate(4.5, &context).is_ok());
    }

    #[test]
    fn ph_off_scale() {
        let validator = PhValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(-0.5, &context).is_err());
        assert!(validator.validate(14.2, &context).is_err());
        assert!(validator.validate(f32::NAN, &context).is_err());
    }

    #[test]
    fn ph_rate_exceeded() {
        let validator = PhValidator::default();
        let mut context = ValidationContext::default();

        // Stable at 7.0, then a full unit jump one second later
        context.add_reading(7.0, 1000);
        context.timestamp = 2000;

        let result = validator.validate(8.0, &context);
        assert!(matches!(result, Err(ValidationError::RateExceeded { .. })));
    }

    #[test]
    fn drinking_water_band() {
        let validator = PhValidator::drinking_water();
        let context = ValidationContext::default();

        // Fine in a river, out of band for tap water
        assert!(validator.validate(5.5, &context).is_err());
        assert!(validator.validate(7.4, &context).is_ok());
    }

    #[test]
    fn degraded_electrode_rejected() {
        let validator = PhValidator::default();
        let mut context = ValidationContext::default();
        context.sensor_quality = 0.3;

        let result = validator.validate(7.0, &context);
        assert!(matches!(result, Err(ValidationError::SensorQualityBad { .. })));
    }
}
