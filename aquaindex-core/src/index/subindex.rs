//! Per-parameter sub-index formulas
//!
//! Each measured parameter maps to an intermediate score through its own
//! empirical curve, fitted so that cleaner water scores higher. The curves
//! are the fixed contract of the index: coefficients here must never be
//! "tuned" without forking score comparability.

use crate::constants::index::{
    COLOR_SUB_INDEX_THRESHOLD_PT_CO, PURE_WATER_SUB_INDEX, TDS_SUB_INDEX_THRESHOLD_MG_L,
    WEIGHT_COLOR, WEIGHT_CONDUCTIVITY, WEIGHT_HARDNESS, WEIGHT_PH, WEIGHT_TDS, WEIGHT_TURBIDITY,
};

/// The six measured water-quality parameters
///
/// A closed enum instead of string keys: the accumulation loop iterates
/// [`Parameter::ALL`] and the compiler checks every match is exhaustive.
/// Wire names stay the canonical Spanish identifiers used by the ingestion
/// API and the historical database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parameter {
    /// Acidity, dimensionless (0-14 scale)
    Ph,
    /// Turbidity in NTU
    #[cfg_attr(feature = "serde", serde(rename = "turbidez"))]
    Turbidity,
    /// Conductivity in µS/cm
    #[cfg_attr(feature = "serde", serde(rename = "conductividad"))]
    Conductivity,
    /// Total dissolved solids in mg/L
    Tds,
    /// Hardness in mg/L CaCO3
    #[cfg_attr(feature = "serde", serde(rename = "dureza"))]
    Hardness,
    /// Apparent color in Pt-Co units
    Color,
}

impl Parameter {
    /// All parameters in canonical accumulation order
    pub const ALL: [Parameter; 6] = [
        Parameter::Ph,
        Parameter::Turbidity,
        Parameter::Conductivity,
        Parameter::Tds,
        Parameter::Hardness,
        Parameter::Color,
    ];

    /// Canonical wire name (Spanish, matching the ingestion API)
    pub const fn name(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Turbidity => "turbidez",
            Parameter::Conductivity => "conductividad",
            Parameter::Tds => "tds",
            Parameter::Hardness => "dureza",
            Parameter::Color => "color",
        }
    }

    /// Expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "",
            Parameter::Turbidity => "NTU",
            Parameter::Conductivity => "µS/cm",
            Parameter::Tds => "mg/L",
            Parameter::Hardness => "mg/L",
            Parameter::Color => "Pt-Co",
        }
    }

    /// Weight of this parameter's sub-index in the composite score
    ///
    /// The six weights sum to 1.0.
    pub const fn weight(&self) -> f32 {
        match self {
            Parameter::Ph => WEIGHT_PH,
            Parameter::Turbidity => WEIGHT_TURBIDITY,
            Parameter::Conductivity => WEIGHT_CONDUCTIVITY,
            Parameter::Tds => WEIGHT_TDS,
            Parameter::Hardness => WEIGHT_HARDNESS,
            Parameter::Color => WEIGHT_COLOR,
        }
    }

    /// Parse a canonical wire name back to a parameter
    pub fn from_name(name: &str) -> Option<Parameter> {
        Parameter::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Compute the sub-index for a raw measured value
    ///
    /// Formulas are empirical fits in the value's canonical unit; outputs sit
    /// near 0-120 for realistic inputs and are not clamped.
    ///
    /// The negative-exponent curves (`turbidez`, `conductividad`, and `color`
    /// above its threshold) are undefined at zero, where `powf` would return
    /// infinity. A value at or below zero on those curves short-circuits to
    /// [`PURE_WATER_SUB_INDEX`]: zero NTU or zero µS/cm is the cleanest
    /// reading the probe can produce. Uses `libm` so the same code runs on
    /// `no_std` probe firmware.
    pub fn sub_index(self, value: f32) -> f32 {
        match self {
            Parameter::Ph => {
                // I = 10^(4.22 - 0.293 pH); maximal near pH 7.2, falling off
                // toward both ends of the scale
                const BASE: f32 = 4.22;
                const SLOPE: f32 = 0.293;
                libm::powf(10.0, BASE - SLOPE * value)
            }
            Parameter::Turbidity => {
                // I = 108 v^-0.178
                const COEFF: f32 = 108.0;
                const EXP: f32 = -0.178;
                if value <= 0.0 {
                    return PURE_WATER_SUB_INDEX;
                }
                COEFF * libm::powf(value, EXP)
            }
            Parameter::Conductivity => {
                // I = 540 v^-0.379
                const COEFF: f32 = 540.0;
                const EXP: f32 = -0.379;
                if value <= 0.0 {
                    return PURE_WATER_SUB_INDEX;
                }
                COEFF * libm::powf(value, EXP)
            }
            Parameter::Tds => {
                // Flat 100 below 520 mg/L, then linear decline. The linear
                // branch equals 100 at exactly 520, so the join is continuous.
                const INTERCEPT: f32 = 109.1;
                const SLOPE: f32 = 0.0175;
                if value < TDS_SUB_INDEX_THRESHOLD_MG_L {
                    100.0
                } else {
                    INTERCEPT - SLOPE * value
                }
            }
            Parameter::Hardness => {
                // I = 10^(1.974 - 0.00174 v); tops out at ~94.2 for distilled
                // water and decays with mineral content
                const BASE: f32 = 1.974;
                const SLOPE: f32 = 0.00174;
                libm::powf(10.0, BASE - SLOPE * value)
            }
            Parameter::Color => {
                // Flat 100 below 2.018 Pt-Co (where the curve crosses 100),
                // then I = 123 v^-0.295
                const COEFF: f32 = 123.0;
                const EXP: f32 = -0.295;
                // The flat branch also absorbs zero and negative values, so
                // the power curve only ever sees inputs above the threshold.
                if value < COLOR_SUB_INDEX_THRESHOLD_PT_CO {
                    100.0
                } else {
                    COEFF * libm::powf(value, EXP)
                }
            }
        }
    }
}
