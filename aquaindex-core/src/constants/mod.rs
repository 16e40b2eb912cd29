//! Constants for aquaindex-core
//!
//! Centralized, documented constants used throughout the crate. Numeric
//! values live here with their source and rationale rather than scattered as
//! magic numbers.
//!
//! ## Organization
//!
//! - **Params**: plausibility ranges and rate limits per water parameter
//! - **Index**: ICA weights, classification breakpoints, formula thresholds
//! - **Quality**: probe quality grades and acceptance thresholds
//! - **Time**: sampling intervals and unit conversions
//!
//! When adding constants, name the unit in the identifier and cite the
//! guideline or datasheet the value came from.

/// Plausibility ranges and rate limits per measured parameter.
pub mod params;

/// ICA weights, classification breakpoints, and sub-index formula thresholds.
pub mod index;

/// Probe quality grades and acceptance thresholds.
pub mod quality;

/// Time-related constants for sampling and rate calculations.
pub mod time;

// Re-export commonly used constants for convenience
pub use index::{
    ICA_ACCEPTABLE_MIN, ICA_CONTAMINATED_MIN, ICA_NOT_CONTAMINATED_MIN,
    ICA_SLIGHTLY_CONTAMINATED_MIN, PURE_WATER_SUB_INDEX, WEIGHT_COLOR, WEIGHT_CONDUCTIVITY,
    WEIGHT_HARDNESS, WEIGHT_PH, WEIGHT_TDS, WEIGHT_TURBIDITY,
};

pub use params::{
    COLOR_SENSOR_MAX_PT_CO, CONDUCTIVITY_SENSOR_MAX_US_CM, HARDNESS_SENSOR_MAX_MG_L,
    PH_SCALE_MAX, PH_SCALE_MIN, TDS_SENSOR_MAX_MG_L, TURBIDITY_SENSOR_MAX_NTU,
};

pub use quality::{QUALITY_CONSUMER, QUALITY_PROFESSIONAL, QUALITY_THRESHOLD_ACCEPTABLE};

pub use time::{DEFAULT_SAMPLE_INTERVAL_MS, MS_PER_SECOND};
