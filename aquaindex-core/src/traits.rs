//! Core traits for reading validation
//!
//! These define the interface every parameter validator implements. Kept
//! deliberately small: probe firmware does not need deep abstraction.

use crate::buffer::CircularBuffer;
use crate::errors::ValidationResult;
use crate::time::Timestamp;

/// Maximum number of historical samples kept per parameter
pub const MAX_HISTORY_SIZE: usize = 32;

/// Single reading with timestamp
#[derive(Debug, Clone, Copy)]
pub struct TimestampedReading {
    /// Measured value in the parameter's canonical unit
    pub value: f32,
    /// Capture time in milliseconds
    pub timestamp: Timestamp,
}

/// Context passed to validators: recent history plus paired measurements
/// from the same sampling cycle used for cross-parameter checks
#[derive(Clone)]
pub struct ValidationContext {
    /// Recent readings of the parameter under validation, for rate checks
    pub history: CircularBuffer<MAX_HISTORY_SIZE>,

    /// Current timestamp in milliseconds
    pub timestamp: Timestamp,

    /// Water temperature from the same cycle, if measured (°C)
    pub water_temp: Option<f32>,

    /// Conductivity from the same cycle, if measured (µS/cm)
    ///
    /// Used by the TDS validator: dissolved solids and conductivity track
    /// each other within a known ratio band.
    pub conductivity: Option<f32>,

    /// Total dissolved solids from the same cycle, if measured (mg/L)
    ///
    /// Used by the conductivity validator for the inverse of the check above.
    pub tds: Option<f32>,

    /// Probe quality indicator (0.0 = failed, 1.0 = freshly calibrated)
    pub sensor_quality: f32,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            history: CircularBuffer::new(),
            timestamp: 0,
            water_temp: None,
            conductivity: None,
            tds: None,
            sensor_quality: 1.0,
        }
    }
}

impl ValidationContext {
    /// Add a reading to history, maintaining chronological order
    pub fn add_reading(&mut self, value: f32, timestamp: Timestamp) {
        let reading = TimestampedReading { value, timestamp };
        self.history.push(reading);
    }

    /// Get the most recent reading if any
    pub fn last_reading(&self) -> Option<&TimestampedReading> {
        self.history.last()
    }

    /// Calculate time delta from last reading in milliseconds
    pub fn time_delta_ms(&self) -> Option<u64> {
        self.last_reading()
            .map(|last| self.timestamp.saturating_sub(last.timestamp))
    }
}

/// Core validator trait - implement this for each water-quality parameter
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single reading
    fn validate(&self, value: Self::Value, context: &ValidationContext) -> ValidationResult<()>;

    /// Get plausibility constraints for this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Plausibility constraints for a validator
#[derive(Debug, Clone, Copy)]
pub struct ValidatorConstraints {
    /// Minimum plausible value
    pub min_value: f32,

    /// Maximum plausible value
    pub max_value: f32,

    /// Maximum rate of change per second
    pub max_rate_change: f32,

    /// Optional: typical probe noise level for filtering
    pub noise_threshold: Option<f32>,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_tracks_history() {
        let mut ctx = ValidationContext::default();
        assert!(ctx.last_reading().is_none());
        assert!(ctx.time_delta_ms().is_none());

        ctx.add_reading(7.0, 1000);
        ctx.timestamp = 3000;

        assert_eq!(ctx.last_reading().unwrap().value, 7.0);
        assert_eq!(ctx.time_delta_ms(), Some(2000));
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f32.is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f32::INFINITY.is_valid());
        assert!(7.0f64.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }
}
