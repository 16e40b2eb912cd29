//! Time Constants
//!
//! Unit conversions and sampling intervals used for rate-of-change checks.

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Default probe sampling interval (ms).
///
/// Water-quality stations typically report once a minute; rate limits in
/// `constants::params` assume deltas of roughly this magnitude.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 60_000;
