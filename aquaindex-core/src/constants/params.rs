//! Plausibility Ranges for Water-Quality Parameters
//!
//! Operational limits per measured parameter, based on probe datasheets and
//! drinking-water guidelines. These bound what a sensor can plausibly report,
//! not what is healthy; guideline bands are provided separately for the
//! stricter deployment presets.

// ===== PH =====

/// Lower bound of the pH scale (dimensionless).
///
/// pH below 0 is chemically possible only in concentrated acids that no
/// field probe survives. The scale bound is the hard validation floor.
pub const PH_SCALE_MIN: f32 = 0.0;

/// Upper bound of the pH scale (dimensionless).
pub const PH_SCALE_MAX: f32 = 14.0;

/// Maximum plausible pH drift in a monitored body of water (pH/s).
///
/// Buffered natural water shifts pH over minutes to hours. Anything faster
/// than 0.05 pH units per second is probe noise or electrode failure.
pub const PH_MAX_RATE_PER_S: f32 = 0.05;

/// Drinking-water guideline band for pH.
///
/// Source: WHO Guidelines for Drinking-water Quality (operational range)
pub const PH_DRINKING_MIN: f32 = 6.5;
/// Upper end of the WHO drinking-water pH band.
pub const PH_DRINKING_MAX: f32 = 8.5;

/// Typical field pH electrode accuracy (pH units).
pub const PH_ACCURACY: f32 = 0.1;

// ===== TURBIDITY =====

/// Minimum turbidity (NTU). Clear water scatters no light.
pub const TURBIDITY_SENSOR_MIN_NTU: f32 = 0.0;

/// Maximum turbidity most nephelometers can resolve before saturating (NTU).
///
/// Source: common submersible nephelometer datasheets (e.g. 0-4000 NTU range)
pub const TURBIDITY_SENSOR_MAX_NTU: f32 = 4000.0;

/// Maximum plausible turbidity change (NTU/s).
///
/// Sediment plumes from a disturbance can spike quickly; faster jumps mean a
/// fouled or bubbled optical window.
pub const TURBIDITY_MAX_RATE_NTU_PER_S: f32 = 50.0;

/// Drinking-water turbidity ceiling (NTU).
///
/// Source: WHO recommendation of <5 NTU, ideally <1 NTU at disinfection
pub const TURBIDITY_DRINKING_MAX_NTU: f32 = 5.0;

/// Typical nephelometer accuracy (NTU).
pub const TURBIDITY_ACCURACY_NTU: f32 = 0.5;

// ===== CONDUCTIVITY =====

/// Minimum conductivity (µS/cm). Ultrapure water approaches 0.055 µS/cm.
pub const CONDUCTIVITY_SENSOR_MIN_US_CM: f32 = 0.0;

/// Maximum conductivity for a freshwater/brackish probe (µS/cm).
///
/// Seawater sits near 50000 µS/cm; monitoring probes for inland water top
/// out well below that.
pub const CONDUCTIVITY_SENSOR_MAX_US_CM: f32 = 20000.0;

/// Maximum plausible conductivity change (µS/cm per second).
pub const CONDUCTIVITY_MAX_RATE_US_CM_PER_S: f32 = 100.0;

/// Typical ceiling for unpolluted freshwater (µS/cm).
pub const CONDUCTIVITY_FRESHWATER_MAX_US_CM: f32 = 1500.0;

/// Typical conductivity cell accuracy (µS/cm).
pub const CONDUCTIVITY_ACCURACY_US_CM: f32 = 10.0;

// ===== TOTAL DISSOLVED SOLIDS =====

/// Minimum TDS (mg/L).
pub const TDS_SENSOR_MIN_MG_L: f32 = 0.0;

/// Maximum TDS a freshwater probe reports (mg/L).
pub const TDS_SENSOR_MAX_MG_L: f32 = 10000.0;

/// Maximum plausible TDS change (mg/L per second).
pub const TDS_MAX_RATE_MG_L_PER_S: f32 = 50.0;

/// Palatability ceiling for drinking water (mg/L).
///
/// Source: WHO - water with TDS above 1000 mg/L is increasingly unpalatable
pub const TDS_DRINKING_MAX_MG_L: f32 = 1000.0;

/// Typical derived-TDS accuracy (mg/L).
pub const TDS_ACCURACY_MG_L: f32 = 10.0;

/// Lower bound of the TDS/conductivity ratio for natural water.
///
/// TDS in mg/L tracks conductivity in µS/cm by a factor of roughly 0.55-0.75
/// depending on ion composition. Readings outside a widened 0.4-0.9 band
/// mean one of the two probes is wrong.
pub const TDS_EC_RATIO_MIN: f32 = 0.4;

/// Upper bound of the TDS/conductivity ratio for natural water.
pub const TDS_EC_RATIO_MAX: f32 = 0.9;

/// Conductivity floor below which the TDS/EC ratio check is skipped (µS/cm).
///
/// Near zero both readings are dominated by probe noise and the ratio is
/// meaningless.
pub const TDS_EC_RATIO_MIN_EC_US_CM: f32 = 10.0;

// ===== HARDNESS =====

/// Minimum hardness (mg/L CaCO3).
pub const HARDNESS_SENSOR_MIN_MG_L: f32 = 0.0;

/// Maximum hardness seen outside brines (mg/L CaCO3).
pub const HARDNESS_SENSOR_MAX_MG_L: f32 = 1000.0;

/// Maximum plausible hardness change (mg/L per second).
///
/// Mineral content of a water body changes over hours; hardness is the
/// slowest-moving parameter monitored here.
pub const HARDNESS_MAX_RATE_MG_L_PER_S: f32 = 5.0;

/// Potable-supply hardness ceiling (mg/L CaCO3).
pub const HARDNESS_POTABLE_MAX_MG_L: f32 = 500.0;

/// Typical titration/probe hardness accuracy (mg/L).
pub const HARDNESS_ACCURACY_MG_L: f32 = 5.0;

// ===== APPARENT COLOR =====

/// Minimum apparent color (Pt-Co units).
pub const COLOR_SENSOR_MIN_PT_CO: f32 = 0.0;

/// Maximum apparent color for surface water instruments (Pt-Co units).
pub const COLOR_SENSOR_MAX_PT_CO: f32 = 500.0;

/// Maximum plausible color change (Pt-Co per second).
pub const COLOR_MAX_RATE_PT_CO_PER_S: f32 = 10.0;

/// Drinking-water color ceiling (Pt-Co units).
///
/// Source: WHO - color above 15 Pt-Co is noticeable to consumers
pub const COLOR_DRINKING_MAX_PT_CO: f32 = 15.0;

/// Typical colorimeter accuracy (Pt-Co units).
pub const COLOR_ACCURACY_PT_CO: f32 = 5.0;
