//! Plausibility Validators for Water-Quality Readings
//!
//! ## Overview
//!
//! The index calculator in [`crate::index`] deliberately accepts whatever it
//! is given: its contract assumes the ingestion layer has already rejected
//! implausible measurements. This module is that layer. One validator per
//! measured parameter checks a reading against what water chemistry and the
//! probe hardware allow, before the reading is scored or persisted.
//!
//! ## Validation layers
//!
//! Each validator applies, in order:
//!
//! 1. **Finite check** — NaN and infinities are rejected outright.
//! 2. **Range check** — against the parameter's plausibility bounds from
//!    [`crate::constants::params`]. pH cannot leave the 0-14 scale; a
//!    nephelometer saturates at 4000 NTU.
//! 3. **Rate-of-change check** — against recent history in the
//!    [`ValidationContext`](crate::traits::ValidationContext). Hardness of a
//!    river does not jump 300 mg/L between two one-minute samples; an
//!    electrode that reports it is failing.
//! 4. **Cross-parameter check** — where chemistry couples two measurements.
//!    TDS in mg/L tracks conductivity in µS/cm within a known ratio band, so
//!    each validates against the other when both were captured in the same
//!    cycle.
//! 5. **Probe quality gate** — readings from probes below the acceptance
//!    threshold are rejected regardless of value.
//!
//! ## Deployment presets
//!
//! Default limits bound what a probe can plausibly report. Deployments with
//! stricter expectations use the named presets, e.g.:
//!
//! ```rust
//! use aquaindex_core::validators::{PhValidator, TurbidityValidator};
//! use aquaindex_core::{ValidationContext, Validator};
//!
//! // Treatment-plant outlet: WHO drinking-water bands
//! let ph = PhValidator::drinking_water();
//! let turbidity = TurbidityValidator::drinking_water();
//!
//! let ctx = ValidationContext::default();
//! assert!(ph.validate(7.4, &ctx).is_ok());
//! assert!(turbidity.validate(80.0, &ctx).is_err()); // fine for a river, not for tap water
//! ```

mod color;
mod conductivity;
mod hardness;
mod ph;
mod tds;
mod turbidity;
mod utils;

pub use color::ColorValidator;
pub use conductivity::ConductivityValidator;
pub use hardness::HardnessValidator;
pub use ph::PhValidator;
pub use tds::TdsValidator;
pub use turbidity::TurbidityValidator;
