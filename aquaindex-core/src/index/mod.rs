//! Water Quality Index (ICA) Computation
//!
//! ## Overview
//!
//! The ICA (Índice de Calidad del Agua) condenses up to six measured
//! parameters into one 0-100 score plus a five-level classification. Each
//! parameter is mapped through its own empirical sub-index curve, weighted,
//! and summed:
//!
//! ```text
//! ICA = round( Σ  weight(p) × sub_index(p, value(p)) )   over present p
//! ```
//!
//! The computation is pure and deterministic: no I/O, no state, no failure
//! modes. It can run once per HTTP request, once per CSV row, and once per
//! dashboard refresh concurrently with no coordination.
//!
//! ## Missing parameters
//!
//! A reading may carry any subset of the six parameters. Absent parameters
//! contribute nothing, and the remaining weights are **not** renormalized:
//! a partial reading systematically under-scores. This mirrors how every
//! historical score was produced; renormalizing would make new scores
//! incomparable with stored ones, so the behavior is preserved on purpose.
//!
//! ## Non-finite values
//!
//! NaN or infinite values (upstream parse bugs, probe glitches past the
//! validation layer) are skipped exactly like missing parameters instead of
//! poisoning the sum. The skip is logged at debug level when logging is
//! enabled. Plausibility rejection proper lives in [`crate::validators`] and
//! runs before readings get here.
//!
//! ## Usage
//!
//! ```rust
//! use aquaindex_core::index::{Classification, Reading};
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
//! assert_eq!(assessment.index, 76);
//! assert_eq!(assessment.classification, Classification::Acceptable);
//! ```

mod classify;
mod subindex;

pub use classify::Classification;
pub use subindex::Parameter;

/// A set of measured water-quality values for one sampling cycle
///
/// Every field is optional; manual lab entries often carry two or three
/// parameters while the multiparameter sondes report all six. Field names on
/// the wire are the canonical Spanish identifiers of the ingestion API.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Reading {
    /// pH, dimensionless (0-14 scale)
    pub ph: Option<f32>,
    /// Turbidity in NTU
    #[cfg_attr(feature = "serde", serde(rename = "turbidez"))]
    pub turbidity: Option<f32>,
    /// Conductivity in µS/cm
    #[cfg_attr(feature = "serde", serde(rename = "conductividad"))]
    pub conductivity: Option<f32>,
    /// Total dissolved solids in mg/L
    pub tds: Option<f32>,
    /// Hardness in mg/L CaCO3
    #[cfg_attr(feature = "serde", serde(rename = "dureza"))]
    pub hardness: Option<f32>,
    /// Apparent color in Pt-Co units
    pub color: Option<f32>,
}

/// Result of an index computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    /// Rounded composite score, near 0-100 for realistic inputs
    pub index: i32,
    /// Five-level label derived from the rounded index
    pub classification: Classification,
}

impl Reading {
    /// A reading with no parameters present
    pub const fn empty() -> Self {
        Self {
            ph: None,
            turbidity: None,
            conductivity: None,
            tds: None,
            hardness: None,
            color: None,
        }
    }

    /// Get the measured value for a parameter, if present
    pub const fn value(&self, parameter: Parameter) -> Option<f32> {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Turbidity => self.turbidity,
            Parameter::Conductivity => self.conductivity,
            Parameter::Tds => self.tds,
            Parameter::Hardness => self.hardness,
            Parameter::Color => self.color,
        }
    }

    /// Set the measured value for a parameter
    pub fn set(&mut self, parameter: Parameter, value: f32) {
        match parameter {
            Parameter::Ph => self.ph = Some(value),
            Parameter::Turbidity => self.turbidity = Some(value),
            Parameter::Conductivity => self.conductivity = Some(value),
            Parameter::Tds => self.tds = Some(value),
            Parameter::Hardness => self.hardness = Some(value),
            Parameter::Color => self.color = Some(value),
        }
    }

    /// Clear the measured value for a parameter
    pub fn clear(&mut self, parameter: Parameter) {
        match parameter {
            Parameter::Ph => self.ph = None,
            Parameter::Turbidity => self.turbidity = None,
            Parameter::Conductivity => self.conductivity = None,
            Parameter::Tds => self.tds = None,
            Parameter::Hardness => self.hardness = None,
            Parameter::Color => self.color = None,
        }
    }

    /// Number of parameters present in this reading
    pub fn present_count(&self) -> usize {
        Parameter::ALL
            .iter()
            .filter(|&&p| self.value(p).is_some())
            .count()
    }

    /// Compute the composite index and classification for this reading
    ///
    /// Absent and non-finite parameters are skipped without renormalizing
    /// the remaining weights. The weighted sum is rounded half away from
    /// zero (`libm::roundf`) and classified on the rounded integer. An empty
    /// reading deterministically yields index 0, "Altamente contaminado".
    pub fn compute(&self) -> Assessment {
        let mut sum = 0.0f32;

        for &parameter in Parameter::ALL.iter() {
            let value = match self.value(parameter) {
                Some(v) => v,
                None => continue,
            };

            if !value.is_finite() {
                #[cfg(feature = "log")]
                log::debug!(
                    "skipping non-finite {} value {} in index computation",
                    parameter.name(),
                    value
                );
                continue;
            }

            sum += parameter.weight() * parameter.sub_index(value);
        }

        let index = libm::roundf(sum) as i32;
        Assessment {
            index,
            classification: Classification::from_index(index),
        }
    }
}
