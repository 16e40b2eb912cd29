//! Water quality index engine for aquaindex
//!
//! Computes the ICA (Índice de Calidad del Agua) composite score from raw
//! water-quality measurements, and validates those measurements for
//! plausibility before they are scored or stored.
//!
//! Designed to run on edge hardware next to the probes as well as inside
//! ingestion services:
//! - `no_std` compatible (math via `libm`)
//! - No heap allocation
//! - Pure, deterministic scoring with no I/O
//!
//! ```no_run
//! use aquaindex_core::index::Reading;
//!
//! let reading = Reading {
//!     ph: Some(7.2),
//!     turbidity: Some(15.0),
//!     conductivity: Some(450.0),
//!     tds: Some(320.0),
//!     hardness: Some(180.0),
//!     color: Some(5.0),
//! };
//!
//! let assessment = reading.compute();
//! println!("ICA {} ({})", assessment.index, assessment.classification.label());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod constants;
pub mod errors;
pub mod index;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use errors::{ValidationError, ValidationResult};
pub use index::{Assessment, Classification, Parameter, Reading};
pub use traits::{ValidationContext, Validator};
pub use validators::{
    ColorValidator, ConductivityValidator, HardnessValidator, PhValidator, TdsValidator,
    TurbidityValidator,
};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
