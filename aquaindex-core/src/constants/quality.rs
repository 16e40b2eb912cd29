//! Probe Quality Grades and Thresholds
//!
//! Quality scores describe how much a probe's output can be trusted, from
//! 0.0 (failed) to 1.0 (freshly calibrated). Validators reject readings from
//! probes below the acceptance threshold.

// ===== PROBE QUALITY GRADES =====

/// Laboratory-grade, recently calibrated instrument (0.0-1.0).
///
/// Bench meters and calibrated multiparameter sondes.
/// Typical accuracy: ±0.5% of reading or better
pub const QUALITY_PROFESSIONAL: f32 = 0.95;

/// Field-grade commercial probe (0.0-1.0).
///
/// Submersible probes on their normal calibration schedule.
/// Typical accuracy: ±2% of reading
pub const QUALITY_CONSUMER: f32 = 0.90;

/// Probe showing drift or fouling (0.0-1.0).
///
/// Biofilm on optical windows, aging pH electrodes, scaled conductivity
/// cells. Data usable with caution.
pub const QUALITY_DEGRADED: f32 = 0.70;

// ===== QUALITY THRESHOLDS =====

/// Minimum probe quality for readings feeding regulatory reporting.
pub const QUALITY_THRESHOLD_CRITICAL: f32 = 0.90;

/// Minimum probe quality for any acceptance.
///
/// Below this the probe is considered failed and its readings are rejected
/// outright.
pub const QUALITY_THRESHOLD_ACCEPTABLE: f32 = 0.50;
