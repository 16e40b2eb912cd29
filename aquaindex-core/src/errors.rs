//! Error Types for Water-Quality Validation Failures
//!
//! ## Design
//!
//! Errors are sized for hot paths and constrained targets:
//!
//! 1. **Small and Copy**: every variant carries at most a few floats or a
//!    `&'static str`, so errors can be returned and queued without allocation.
//!
//! 2. **No heap data**: messages are static strings, never `String`. A probe
//!    gateway validating thousands of readings per minute must not churn the
//!    allocator on rejects.
//!
//! 3. **Actionable**: each variant carries enough to decide the response
//!    (discard the reading, flag the sensor, recalibrate) without a second
//!    lookup.
//!
//! ## Categories
//!
//! - Measurement violations: `OutOfRange`, `RateExceeded`, `InvalidValue`
//! - Cross-parameter violations: `CrossValidationFailed` (e.g. a TDS reading
//!   inconsistent with the paired conductivity reading)
//! - Sensor health: `SensorQualityBad`
//!
//! Note that the index calculator itself never returns these: missing or
//! non-finite parameters are skipped by design (see [`crate::index`]). These
//! errors belong to the plausibility layer in [`crate::validators`].

use thiserror_no_std::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside the plausible range for the parameter
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The measured value that failed validation
        value: f32,
        /// Minimum plausible value for the parameter
        min: f32,
        /// Maximum plausible value for the parameter
        max: f32,
    },

    /// Change between consecutive readings too fast for the water body or probe
    #[error("Rate {rate}/s exceeds limit {max_rate}/s")]
    RateExceeded {
        /// Calculated rate of change (units per second)
        rate: f32,
        /// Maximum plausible rate for the parameter
        max_rate: f32,
    },

    /// Two parameters disagree physically (e.g. TDS far off the conductivity ratio)
    #[error("Cross-validation failed: {reason}")]
    CrossValidationFailed {
        /// Static description of the violated relationship
        reason: &'static str,
    },

    /// Probe reported degraded quality or is overdue for calibration
    #[error("Sensor quality check failed: {reason}")]
    SensorQualityBad {
        /// Static description of the quality problem
        reason: &'static str,
    },

    /// Value is not a usable number (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } => {
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max)
            }
            Self::RateExceeded { rate, max_rate } => {
                defmt::write!(fmt, "Rate {}/s exceeds {}/s", rate, max_rate)
            }
            Self::CrossValidationFailed { reason } => {
                defmt::write!(fmt, "Cross-validation: {}", reason)
            }
            Self::SensorQualityBad { reason } => {
                defmt::write!(fmt, "Sensor quality: {}", reason)
            }
            Self::InvalidValue => defmt::write!(fmt, "Invalid value"),
        }
    }
}
