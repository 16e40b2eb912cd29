//! Hardness validator
//!
//! Hardness (dissolved calcium and magnesium, reported as mg/L CaCO3) is the
//! slowest-moving parameter monitored here: it reflects the geology the
//! water flowed through and shifts over hours or days. Tight rate limits
//! catch titration errors and probe faults that other checks miss.

use crate::{
    constants::{
        params::{HARDNESS_ACCURACY_MG_L, HARDNESS_MAX_RATE_MG_L_PER_S, HARDNESS_POTABLE_MAX_MG_L,
                 HARDNESS_SENSOR_MAX_MG_L, HARDNESS_SENSOR_MIN_MG_L},
        quality::QUALITY_THRESHOLD_ACCEPTABLE,
    },
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidationContext, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for hardness readings in mg/L CaCO3
#[derive(Debug, Clone)]
pub struct HardnessValidator {
    /// Minimum plausible hardness in mg/L
    min_mg_l: f32,

    /// Maximum plausible hardness in mg/L
    max_mg_l: f32,

    /// Maximum rate of change in mg/L per second
    max_rate_mg_l_per_sec: f32,
}

impl Default for HardnessValidator {
    fn default() -> Self {
        Self {
            min_mg_l: HARDNESS_SENSOR_MIN_MG_L,
            max_mg_l: HARDNESS_SENSOR_MAX_MG_L,
            max_rate_mg_l_per_sec: HARDNESS_MAX_RATE_MG_L_PER_S,
        }
    }
}

impl HardnessValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32, max_rate: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_mg_l: min.max(0.0),
            max_mg_l: max,
            max_rate_mg_l_per_sec: max_rate.abs(),
        }
    }

    /// Validator for potable supplies
    pub fn potable() -> Self {
        Self {
            min_mg_l: 0.0,
            max_mg_l: HARDNESS_POTABLE_MAX_MG_L,
            max_rate_mg_l_per_sec: 1.0,
        }
    }
}

impl Validator for HardnessValidator {
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

        if context.sensor_quality < QUALITY_THRESHOLD_ACCEPTABLE {
            return Err(ValidationError::SensorQualityBad {
                reason: "Hardness probe degraded",
            });
        }

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_mg_l,
            max_value: self.max_mg_l,
            max_rate_change: self.max_rate_mg_l_per_sec,
            noise_threshold: Some(HARDNESS_ACCURACY_MG_L),
        }
    }
}
