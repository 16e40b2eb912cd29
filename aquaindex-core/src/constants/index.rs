//! ICA Weights, Breakpoints, and Formula Thresholds
//!
//! The ICA (Índice de Calidad del Agua) is a weighted sum of per-parameter
//! sub-indices. The weights and classification breakpoints here are the
//! fixed empirical contract of the index: changing any of them forks score
//! comparability with historical data, so they are deliberately constants
//! and not configuration.

// ===== PARAMETER WEIGHTS =====
//
// Must sum to 1.0. Missing parameters are NOT renormalized: a partial
// reading simply accumulates less, which matches how historical scores were
// produced.

/// Weight of the pH sub-index in the composite score.
pub const WEIGHT_PH: f32 = 0.10;

/// Weight of the turbidity sub-index.
pub const WEIGHT_TURBIDITY: f32 = 0.20;

/// Weight of the conductivity sub-index.
pub const WEIGHT_CONDUCTIVITY: f32 = 0.10;

/// Weight of the total-dissolved-solids sub-index.
pub const WEIGHT_TDS: f32 = 0.20;

/// Weight of the hardness sub-index.
pub const WEIGHT_HARDNESS: f32 = 0.20;

/// Weight of the apparent-color sub-index.
pub const WEIGHT_COLOR: f32 = 0.20;

// ===== CLASSIFICATION BREAKPOINTS =====
//
// Applied to the rounded integer index, top-down, first match wins.

/// Minimum rounded index for "No contaminado".
pub const ICA_NOT_CONTAMINATED_MIN: i32 = 85;

/// Minimum rounded index for "Aceptable".
pub const ICA_ACCEPTABLE_MIN: i32 = 70;

/// Minimum rounded index for "Poco contaminado".
pub const ICA_SLIGHTLY_CONTAMINATED_MIN: i32 = 50;

/// Minimum rounded index for "Contaminado"; below this is
/// "Altamente contaminado".
pub const ICA_CONTAMINATED_MIN: i32 = 30;

// ===== SUB-INDEX FORMULA THRESHOLDS =====

/// Sub-index assigned when a negative-exponent formula receives a value
/// at or below zero.
///
/// `turbidez`, `conductividad`, and `color` use `coeff * v^(-exp)` curves
/// that blow up at v = 0. Zero NTU or zero µS/cm is the purest water the
/// probe can report, and both piecewise formulas (tds, color) already assign
/// 100 at their clean end, so the undefined point is pinned to 100 rather
/// than letting `powf` produce infinity.
pub const PURE_WATER_SUB_INDEX: f32 = 100.0;

/// TDS value below which the sub-index is a flat 100 (mg/L).
///
/// The linear branch `109.1 - 0.0175 v` equals 100 exactly at 520, so the
/// piecewise join is continuous.
pub const TDS_SUB_INDEX_THRESHOLD_MG_L: f32 = 520.0;

/// Color value below which the sub-index is a flat 100 (Pt-Co units).
///
/// `123 * v^(-0.295)` crosses 100 at v ≈ 2.018; below that the curve would
/// exceed 100 without bound.
pub const COLOR_SUB_INDEX_THRESHOLD_PT_CO: f32 = 2.018;
