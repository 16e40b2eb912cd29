//! Index classification
//!
//! Maps the rounded integer index to the five-level contamination scale used
//! across the ingestion API, the historical database, and the dashboard.

use crate::constants::index::{
    ICA_ACCEPTABLE_MIN, ICA_CONTAMINATED_MIN, ICA_NOT_CONTAMINATED_MIN,
    ICA_SLIGHTLY_CONTAMINATED_MIN,
};

/// Qualitative classification of a water-quality index
///
/// Ordered from cleanest to most polluted. Labels are the canonical Spanish
/// strings stored alongside every historical reading; they are the wire
/// format, not a display concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Index ≥ 85
    #[cfg_attr(feature = "serde", serde(rename = "No contaminado"))]
    NotContaminated,
    /// Index ≥ 70
    #[cfg_attr(feature = "serde", serde(rename = "Aceptable"))]
    Acceptable,
    /// Index ≥ 50
    #[cfg_attr(feature = "serde", serde(rename = "Poco contaminado"))]
    SlightlyContaminated,
    /// Index ≥ 30
    #[cfg_attr(feature = "serde", serde(rename = "Contaminado"))]
    Contaminated,
    /// Index < 30
    #[cfg_attr(feature = "serde", serde(rename = "Altamente contaminado"))]
    HighlyContaminated,
}

impl Classification {
    /// Classify a rounded index value
    ///
    /// Breakpoints are evaluated top-down on the integer index, first match
    /// wins. Total: every i32 maps to exactly one classification.
    pub const fn from_index(index: i32) -> Classification {
        if index >= ICA_NOT_CONTAMINATED_MIN {
            Classification::NotContaminated
        } else if index >= ICA_ACCEPTABLE_MIN {
            Classification::Acceptable
        } else if index >= ICA_SLIGHTLY_CONTAMINATED_MIN {
            Classification::SlightlyContaminated
        } else if index >= ICA_CONTAMINATED_MIN {
            Classification::Contaminated
        } else {
            Classification::HighlyContaminated
        }
    }

    /// Canonical label (Spanish, as persisted and displayed)
    pub const fn label(&self) -> &'static str {
        match self {
            Classification::NotContaminated => "No contaminado",
            Classification::Acceptable => "Aceptable",
            Classification::SlightlyContaminated => "Poco contaminado",
            Classification::Contaminated => "Contaminado",
            Classification::HighlyContaminated => "Altamente contaminado",
        }
    }

    /// Dashboard palette name for this level
    pub const fn color(&self) -> &'static str {
        match self {
            Classification::NotContaminated => "green",
            Classification::Acceptable => "blue",
            Classification::SlightlyContaminated => "yellow",
            Classification::Contaminated => "orange",
            Classification::HighlyContaminated => "red",
        }
    }
}

impl core::fmt::Display for Classification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
