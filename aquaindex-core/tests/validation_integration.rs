//! Integration tests for the validate-then-score flow
//!
//! Exercises the intended ingestion path: every parameter is checked for
//! plausibility first, and only readings that pass get an index computed.

use aquaindex_core::{
    index::{Classification, Parameter, Reading},
    traits::ValidationContext,
    ColorValidator, ConductivityValidator, HardnessValidator, PhValidator, TdsValidator,
    TurbidityValidator, ValidationError, Validator,
};

/// Validate all present parameters of a reading, as the ingestion layer does
fn validate_reading(reading: &Reading, ctx: &ValidationContext) -> Result<(), ValidationError> {
    if let Some(v) = reading.value(Parameter::Ph) {
        PhValidator::default().validate(v, ctx)?;
    }
    if let Some(v) = reading.value(Parameter::Turbidity) {
        TurbidityValidator::default().validate(v, ctx)?;
    }
    if let Some(v) = reading.value(Parameter::Conductivity) {
        ConductivityValidator::default().validate(v, ctx)?;
    }
    if let Some(v) = reading.value(Parameter::Tds) {
        TdsValidator::default().validate(v, ctx)?;
    }
    if let Some(v) = reading.value(Parameter::Hardness) {
        HardnessValidator::default().validate(v, ctx)?;
    }
    if let Some(v) = reading.value(Parameter::Color) {
        ColorValidator::default().validate(v, ctx)?;
    }
    Ok(())
}

#[test]
fn plausible_reading_validates_and_scores() {
    let reading = Reading {
        ph: Some(7.2),
        turbidity: Some(15.0),
        conductivity: Some(450.0),
        tds: Some(320.0),
        hardness: Some(180.0),
        color: Some(5.0),
    };

    let mut ctx = ValidationContext::default();
    // Pair the EC/TDS readings so the cross-checks actually run
    ctx.conductivity = reading.conductivity;
    ctx.tds = reading.tds;

    assert!(validate_reading(&reading, &ctx).is_ok());

    let assessment = reading.compute();
    assert_eq!(assessment.index, 76);
    assert_eq!(assessment.classification, Classification::Acceptable);
}

#[test]
fn implausible_ph_is_rejected_before_scoring() {
    let reading = Reading {
        ph: Some(15.3), // off the scale: broken electrode or parse error
        turbidity: Some(15.0),
        ..Reading::empty()
    };

    let ctx = ValidationContext::default();
    let result = validate_reading(&reading, &ctx);
    assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
}

#[test]
fn ec_tds_disagreement_caught_from_both_sides() {
    // Conductivity says almost-pure water, TDS says mineral-heavy.
    let mut ctx = ValidationContext::default();
    ctx.conductivity = Some(450.0);
    ctx.tds = Some(900.0);

    let tds_result = TdsValidator::default().validate(900.0, &ctx);
    assert!(matches!(
        tds_result,
        Err(ValidationError::CrossValidationFailed { .. })
    ));

    let ec_result = ConductivityValidator::default().validate(450.0, &ctx);
    assert!(matches!(
        ec_result,
        Err(ValidationError::CrossValidationFailed { .. })
    ));
}

#[test]
fn rate_check_uses_reading_history() {
    let validator = TurbidityValidator::default();
    let mut ctx = ValidationContext::default();

    // One-minute sampling: 10 → 100 NTU over 60s is 1.5 NTU/s, plausible
    ctx.add_reading(10.0, 0);
    ctx.timestamp = 60_000;
    assert!(validator.validate(100.0, &ctx).is_ok());

    // The same jump within one second is not
    let mut fast_ctx = ValidationContext::default();
    fast_ctx.add_reading(10.0, 0);
    fast_ctx.timestamp = 1_000;
    assert!(matches!(
        validator.validate(100.0, &fast_ctx),
        Err(ValidationError::RateExceeded { .. })
    ));
}

#[test]
fn degraded_probe_rejected_across_validators() {
    let mut ctx = ValidationContext::default();
    ctx.sensor_quality = 0.2;

    assert!(PhValidator::default().validate(7.0, &ctx).is_err());
    assert!(TurbidityValidator::default().validate(5.0, &ctx).is_err());
    assert!(HardnessValidator::default().validate(100.0, &ctx).is_err());
    assert!(ColorValidator::default().validate(5.0, &ctx).is_err());
}

#[test]
fn constraints_expose_configured_limits() {
    let validator = TurbidityValidator::drinking_water();
    let constraints = validator.constraints();
    assert_eq!(constraints.min_value, 0.0);
    assert_eq!(constraints.max_value, 5.0);
    assert!(constraints.noise_threshold.is_some());
}

#[test]
fn validation_failure_does_not_change_scoring_semantics() {
    // The calculator itself stays lenient: the same out-of-scale pH that
    // validation rejects still produces a deterministic score if a caller
    // skips validation. Rejection is the ingestion layer's decision.
    let reading = Reading {
        ph: Some(15.3),
        ..Reading::empty()
    };
    let a = reading.compute();
    let b = reading.compute();
    assert_eq!(a, b);
}
