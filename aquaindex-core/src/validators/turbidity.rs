//! Turbidity validator
//!
//! Validates cloudiness readings based on:
//! - Nephelometer range (optical sensors saturate near 4000 NTU)
//! - Plausible plume dynamics (sediment stirs up fast but not instantly)
//! - Optical window health (fouling and bubbles mimic spikes)

use crate::{
    constants::{
        params::{TURBIDITY_ACCURACY_NTU, TURBIDITY_DRINKING_MAX_NTU, TURBIDITY_MAX_RATE_NTU_PER_S,
                 TURBIDITY_SENSOR_MAX_NTU, TURBIDITY_SENSOR_MIN_NTU},
        quality::QUALITY_THRESHOLD_ACCEPTABLE,
    },
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidationContext, Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for turbidity readings in NTU
#[derive(Debug, Clone)]
pub struct TurbidityValidator {
    /// Minimum plausible turbidity in NTU
    min_ntu: f32,

    /// Maximum plausible turbidity in NTU
    max_ntu: f32,

    /// Maximum rate of change in NTU/second
    max_rate_ntu_per_sec: f32,
}

impl Default for TurbidityValidator {
    fn default() -> Self {
        Self {
            min_ntu: TURBIDITY_SENSOR_MIN_NTU,
            max_ntu: TURBIDITY_SENSOR_MAX_NTU,
            max_rate_ntu_per_sec: TURBIDITY_MAX_RATE_NTU_PER_S,
        }
    }
}

impl TurbidityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32, max_rate: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_ntu: min.max(0.0), // Light scatter cannot be negative
            max_ntu: max,
            max_rate_ntu_per_sec: max_rate.abs(),
        }
    }

    /// Validator for treated drinking water (WHO: below 5 NTU)
    pub fn drinking_water() -> Self {
        Self {
            min_ntu: 0.0,
            max_ntu: TURBIDITY_DRINKING_MAX_NTU,
            max_rate_ntu_per_sec: 0.5, // Filtered supply changes slowly
        }
    }

    /// Validator for rivers during storm events (wide open)
    pub fn storm_runoff() -> Self {
        Self {
            min_ntu: 0.0,
            max_ntu: TURBIDITY_SENSOR_MAX_NTU,
            max_rate_ntu_per_sec: 200.0, // Debris flows spike hard
        }
    }
}

impl Validator for TurbidityValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value, context: &ValidationContext) -> ValidationResult<()> {
        if !value.is_valid() {
            return Err(ValidationError::InvalidValue);
        }

        utils::check_range(value, self.min_ntu, self.max_ntu)?;

        if let Some(last_reading) = utils::last_reading(&context.history) {
            let rate =
                utils::calculate_rate_from_readings(value, context.timestamp, last_reading);

            if rate > self.max_rate_ntu_per_sec {
                return Err(ValidationError::RateExceeded {
                    rate,
                    max_rate: self.max_rate_ntu_per_sec,
                });
            }
        }

        if context.sensor_quality < QUALITY_THRESHOLD_ACCEPTABLE {
            return Err(ValidationError::SensorQualityBad {
                reason: "Nephelometer window fouled",
            });
        }

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_ntu,
            max_value: self.max_ntu,
            max_rate_change: self.max_rate_ntu_per_sec,
            noise_threshold: Some(TURBIDITY_ACCURACY_NTU),
        }
    }
}
