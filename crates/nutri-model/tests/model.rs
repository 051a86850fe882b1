//! Tests for nutri-model types.

use nutri_model::{
    Identifier, InvalidRowPolicy, NutritionError, PipelineOptions, SchemaProfile, ThresholdConfig,
};

#[test]
fn default_thresholds_are_valid() {
    let config = ThresholdConfig::default();
    config.validate().expect("defaults validate");
    assert_eq!(config.bmi.underweight_from, 16.0);
    assert_eq!(config.bmi.obese_from, 30.0);
    assert_eq!(config.muac.child_age_below, 5.0);
    assert_eq!(config.reference.ideal_bmi, 18.5);
    assert_eq!(config.reference.ideal_muac, 22.0);
    assert_eq!(config.risk.bmi_below, 16.0);
    assert_eq!(config.risk.muac_below, 16.0);
}

#[test]
fn partial_json_keeps_defaults() {
    let config = ThresholdConfig::from_json_str(r#"{ "risk": { "muac_below": 15.0 } }"#)
        .expect("parse thresholds");
    assert_eq!(config.risk.muac_below, 15.0);
    assert_eq!(config.risk.bmi_below, 16.0);
    assert_eq!(config.bmi, ThresholdConfig::default().bmi);
}

#[test]
fn empty_json_object_is_the_default() {
    let config = ThresholdConfig::from_json_str("{}").expect("parse thresholds");
    assert_eq!(config, ThresholdConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let error = ThresholdConfig::from_json_str(r#"{ "bmi": { "skinny": 12 } }"#)
        .expect_err("unknown field");
    assert!(matches!(error, NutritionError::Json(_)));
}

#[test]
fn non_ascending_bounds_are_rejected() {
    let error = ThresholdConfig::from_json_str(
        r#"{ "bmi": { "underweight_from": 20.0, "normal_from": 18.5 } }"#,
    )
    .expect_err("bounds out of order");
    assert!(matches!(error, NutritionError::InvalidThresholds(_)));
    assert!(error.to_string().contains("strictly ascending"));
}

#[test]
fn zero_reference_value_is_rejected() {
    let error = ThresholdConfig::from_json_str(r#"{ "reference": { "ideal_muac": 0 } }"#)
        .expect_err("zero reference");
    assert!(error.to_string().contains("reference.ideal_muac"));
}

#[test]
fn identifier_prefers_integers() {
    assert_eq!(Identifier::parse(" 42 "), Identifier::Number(42));
    assert_eq!(
        Identifier::parse("Amina"),
        Identifier::Text("Amina".to_string())
    );
    assert_eq!(Identifier::parse("S-001").to_string(), "S-001");
}

#[test]
fn identifier_serializes_untagged() {
    let json = serde_json::to_string(&vec![
        Identifier::Number(7),
        Identifier::Text("Kofi".to_string()),
    ])
    .expect("serialize identifiers");
    assert_eq!(json, r#"[7,"Kofi"]"#);
}

#[test]
fn profile_parses_case_insensitively() {
    assert_eq!("Dashboard".parse(), Ok(SchemaProfile::Dashboard));
    assert_eq!(" screening".parse(), Ok(SchemaProfile::Screening));
    assert!("legacy".parse::<SchemaProfile>().is_err());
}

#[test]
fn pipeline_options_builder() {
    let options = PipelineOptions::new()
        .with_profile(SchemaProfile::Screening)
        .with_invalid_rows(InvalidRowPolicy::Skip);
    assert_eq!(options.profile, SchemaProfile::Screening);
    assert_eq!(options.invalid_rows, InvalidRowPolicy::Skip);
    assert_eq!(options.thresholds, ThresholdConfig::default());
}
