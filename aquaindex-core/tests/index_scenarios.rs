//! Integration tests for the index computation
//!
//! Pins the scoring contract end to end: the regression scenario, the
//! classification boundaries on rounded values, the partial-input policy,
//! and the rounding mode the index relies on.

use aquaindex_core::index::{Assessment, Classification, Parameter, Reading};

use proptest::prelude::*;

fn station_reading() -> Reading {
    Reading {
        ph: Some(7.2),
        turbidity: Some(15.0),
        conductivity: Some(450.0),
        tds: Some(320.0),
        hardness: Some(180.0),
        color: Some(5.0),
    }
}

#[test]
fn regression_baseline_station_reading() {
    // Expected value computed once from the sub-index formulas and frozen.
    let assessment = station_reading().compute();
    assert_eq!(
        assessment,
        Assessment {
            index: 76,
            classification: Classification::Acceptable,
        }
    );
}

#[test]
fn empty_reading_is_valid_output_not_error() {
    let assessment = Reading::empty().compute();
    assert_eq!(assessment.index, 0);
    assert_eq!(assessment.classification, Classification::HighlyContaminated);
    assert_eq!(assessment.classification.label(), "Altamente contaminado");
}

#[test]
fn classification_applies_to_rounded_index() {
    // Raw sum ≈ 84.85 (below the 85 breakpoint) rounds to 85, and the
    // breakpoint applies to the rounded integer: "No contaminado".
    //   ph 8.79      → 44.12 × 0.10 =  4.41
    //   turbidez 1   → 108.0 × 0.20 = 21.60
    //   tds 100      → 100.0 × 0.20 = 20.00
    //   dureza 0     →  94.18 × 0.20 = 18.84
    //   color 1      → 100.0 × 0.20 = 20.00
    let reading = Reading {
        ph: Some(8.79),
        turbidity: Some(1.0),
        tds: Some(100.0),
        hardness: Some(0.0),
        color: Some(1.0),
        ..Reading::empty()
    };
    let assessment = reading.compute();
    assert_eq!(assessment.index, 85);
    assert_eq!(assessment.classification, Classification::NotContaminated);
}

#[test]
fn rounding_is_half_away_from_zero() {
    // The index pins its rounding mode to roundf; if this ever changes,
    // historical scores at .5 boundaries silently drift.
    assert_eq!(libm::roundf(0.5), 1.0);
    assert_eq!(libm::roundf(1.5), 2.0);
    assert_eq!(libm::roundf(2.5), 3.0);
    assert_eq!(libm::roundf(-0.5), -1.0);
    assert_eq!(libm::roundf(76.0245), 76.0);
}

#[test]
fn dropping_any_parameter_lowers_the_score() {
    let full = station_reading().compute();

    for parameter in Parameter::ALL {
        let mut partial = station_reading();
        partial.clear(parameter);
        assert!(
            partial.compute().index < full.index,
            "removing {} must reduce the unrenormalized sum",
            parameter.name()
        );
    }
}

#[test]
fn near_pristine_water_classifies_clean() {
    // Sub-indices: ph ≈ 112.7, turbidez exactly 108 at 1 NTU, both
    // piecewise branches flat at 100, conductivity ≈ 94.3 at 100 µS/cm,
    // dureza ≈ 94.2 for distilled-soft water.
    let reading = Reading {
        ph: Some(7.4),
        turbidity: Some(1.0),
        conductivity: Some(100.0),
        tds: Some(60.0),
        hardness: Some(0.0),
        color: Some(1.0),
    };
    let assessment = reading.compute();
    assert!(assessment.index >= 85, "got {}", assessment.index);
    assert_eq!(assessment.classification, Classification::NotContaminated);
}

#[test]
fn polluted_water_classifies_contaminated() {
    let reading = Reading {
        ph: Some(9.5),
        turbidity: Some(900.0),
        conductivity: Some(8000.0),
        tds: Some(5000.0),
        hardness: Some(800.0),
        color: Some(300.0),
    };
    let assessment = reading.compute();
    assert!(assessment.index < 30, "got {}", assessment.index);
    assert_eq!(assessment.classification, Classification::HighlyContaminated);
}

fn arb_reading() -> impl Strategy<Value = Reading> {
    (
        prop::option::of(0.0f32..14.0),
        prop::option::of(0.0f32..4000.0),
        prop::option::of(0.0f32..20000.0),
        // Capped where the linear TDS branch is still positive; above
        // ~6234 mg/L its sub-index goes negative and removal raises the
        // score, which is outside the property's premise.
        prop::option::of(0.0f32..6000.0),
        prop::option::of(0.0f32..1000.0),
        prop::option::of(0.0f32..500.0),
    )
        .prop_map(
            |(ph, turbidity, conductivity, tds, hardness, color)| Reading {
                ph,
                turbidity,
                conductivity,
                tds,
                hardness,
                color,
            },
        )
}

proptest! {
    #[test]
    fn computation_is_deterministic(reading in arb_reading()) {
        prop_assert_eq!(reading.compute(), reading.compute());
    }

    #[test]
    fn classification_matches_index(reading in arb_reading()) {
        let assessment = reading.compute();
        prop_assert_eq!(
            assessment.classification,
            Classification::from_index(assessment.index)
        );
    }

    #[test]
    fn partial_never_scores_above_full(reading in arb_reading()) {
        // Weights are not renormalized, so removing a parameter removes a
        // non-negative contribution and rounding is monotone.
        let full = reading.compute();
        for parameter in Parameter::ALL {
            let mut partial = reading;
            partial.clear(parameter);
            prop_assert!(partial.compute().index <= full.index);
        }
    }

    #[test]
    fn index_is_finite_for_any_input(reading in arb_reading()) {
        // An infinite sub-index (zero hitting a power-law curve without the
        // pure-water short-circuit) would saturate the i32 cast; neither
        // extreme may ever appear.
        let assessment = reading.compute();
        prop_assert!(assessment.index > i32::MIN);
        prop_assert!(assessment.index < i32::MAX);
    }
}
