//! Apparent color validator
//!
//! Apparent color (Pt-Co scale) responds to dissolved organics and suspended
//! matter. It loosely tracks turbidity, but the coupling is too variable for
//! a hard cross-check, so validation stays at range, rate, and probe health.

use crate::{
    constants::{
        params::{COLOR_ACCURACY_PT_CO, COLOR_DRINKING_MAX_PT_CO, COLOR_MAX_RATE_PT_CO_PER_S,
                 COLOR_SENSOR_MAX_PT_CO, COLOR_SENSOR_MIN_PT_CO},
        quality::QUALITY_THRESHOLD_ACCEPTABLE,
    },
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidationContext, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for apparent-color readings in Pt-Co units
#[derive(Debug, Clone)]
pub struct ColorValidator {
    /// Minimum plausible color in Pt-Co units
    min_pt_co: f32,

    /// Maximum plausible color in Pt-Co units
    max_pt_co: f32,

    /// Maximum rate of change in Pt-Co per second
    max_rate_pt_co_per_sec: f32,
}

impl Default for ColorValidator {
    fn default() -> Self {
        Self {
            min_pt_co: COLOR_SENSOR_MIN_PT_CO,
            max_pt_co: COLOR_SENSOR_MAX_PT_CO,
            max_rate_pt_co_per_sec: COLOR_MAX_RATE_PT_CO_PER_S,
        }
    }
}

impl ColorValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32, max_rate: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_pt_co: min.max(0.0),
            max_pt_co: max,
            max_rate_pt_co_per_sec: max_rate.abs(),
        }
    }

    /// Validator for treated drinking water (WHO: below 15 Pt-Co)
    pub fn drinking_water() -> Self {
        Self {
            min_pt_co: 0.0,
            max_pt_co: COLOR_DRINKING_MAX_PT_CO,
            max_rate_pt_co_per_sec: 1.0,
        }
    }
}

impl Validator for ColorValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value, context: &ValidationContext) -> ValidationResult<()> {
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min_pt_co, self.max_pt_co)?;

        if let Some(last_reading) = utils::last_reading(&context.history) {
            let rate =
                utils::calculate_rate_from_readings(value, context.timestamp, last_reading);

            if rate > self.max_rate_pt_co_per_sec {
                return Err(ValidationError::RateExceeded {
                    rate,
                    max_rate: self.max_rate_pt_co_per_sec,
                });
            }
        }

        if context.sensor_quality < QUALITY_THRESHOLD_ACCEPTABLE {
            return Err(ValidationError::SensorQualityBad {
                reason: "Colorimeter degraded",
            });
        }

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_pt_co,
            max_value: self.max_pt_co,
            max_rate_change: self.max_rate_pt_co_per_sec,
            noise_threshold: Some(COLOR_ACCURACY_PT_CO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_color() {
        let validator = ColorValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(5.0, &context).is_ok());
        assert!(validator.validate(0.0, &context).is_ok());
    }

    #[test]
    fn color_out_of_range() {
        let validator = ColorValidator::default();
        let context = ValidationContext::default();

        assert!(validator.validate(-2.0, &context).is_err());
        assert!(validator.validate(800.0, &context).is_err());
        assert!(validator.validate(f32::NAN, &context).is_err());
    }

    #[test]
    fn color_rate_exceeded() {
        let validator = ColorValidator::default();
        let mut context = ValidationContext::default();

        context.add_reading(10.0, 1000);
        context.timestamp = 2000;

        let result = validator.validate(60.0, &context);
        assert!(matches!(result, Err(ValidationError::RateExceeded { .. })));
    }

    #[test]
    fn drinking_water_ceiling() {
        let validator = ColorValidator::drinking_water();
        let context = ValidationContext::default();

        assert!(validator.validate(8.0, &context).is_ok());
        assert!(validator.validate(40.0, &context).is_err());
    }
}
