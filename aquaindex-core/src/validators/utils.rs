//! Shared validation helpers
//!
//! Pure functions used by every parameter validator: range checks and
//! rate-of-change math. No allocation, no side effects, safe to call from
//! firmware interrupt context.
//!
//! Rate handling notes:
//! - A zero time delta returns a zero rate rather than dividing by zero;
//!   batch-imported rows can legitimately share a timestamp.
//! - Rates are absolute values: both fouling (rising turbidity) and flushing
//!   (falling turbidity) have plausibility limits, and one configured bound
//!   covers both directions.

use crate::{
    buffer::CircularBuffer,
    constants::time::MS_PER_SECOND,
    errors::{ValidationError, ValidationResult},
    traits::TimestampedReading,
};

/// Check if a value is within the specified range
pub fn check_range(value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Get the last reading from history
pub fn last_reading<const N: usize>(history: &CircularBuffer<N>) -> Option<&TimestampedReading> {
    history.last()
}

/// Calculate rate of change per second
pub fn calculate_rate(current: f32, previous: f32, time_delta_ms: u64) -> f32 {
    if time_delta_ms == 0 {
        return 0.0;
    }

    let value_delta = (current - previous).abs();
    value_delta * MS_PER_SECOND as f32 / time_delta_ms as f32
}

/// Calculate rate of change from the newest historical reading
pub fn calculate_rate_from_readings(
    current_value: f32,
    current_time: u64,
    last_reading: &TimestampedReading,
) -> f32 {
    let time_delta = current_time.saturating_sub(last_reading.timestamp);
    calculate_rate(current_value, last_reading.value, time_delta)
}
