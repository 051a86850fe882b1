//! Integration tests for the enrichment pipeline.

use nutri_ingest::{RawTable, read_csv_str};
use nutri_model::{
    BmiCategory, InvalidRowPolicy, MuacCategory, NutritionError, PipelineOptions, SchemaProfile,
};
use nutri_transform::run_pipeline;

fn table(rows: &[&str]) -> RawTable {
    let mut text = String::from("Name,Gender,Age,Weight (kg),Height (cm),MUAC (cm)\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    read_csv_str(&text).expect("read csv")
}

#[test]
fn end_to_end_example_row() {
    let raw = table(&["Amina,F,4,10,90,11"]);
    let output = run_pipeline(&raw, &PipelineOptions::default()).expect("pipeline");
    assert!(!output.has_rejections());
    let record = &output.records[0];
    assert!((record.bmi - 12.35).abs() < 0.005);
    assert_eq!(record.bmi_category, BmiCategory::SeverelyUnderweight);
    assert_eq!(record.muac_category, MuacCategory::SevereAcuteMalnutrition);
    assert_eq!(record.growth_efficiency, 0.33);
    assert_eq!(record.record.weight_kg, 10.0);
    assert_eq!(record.record.height_cm, 90.0);
}

#[test]
fn pipeline_is_idempotent() {
    let raw = table(&[
        "Amina,F,4,10,90,11",
        "Kofi,M,9,25.5,130,17.2",
        "Esi,F,12,48,150,23",
    ]);
    let options = PipelineOptions::default();
    let first = run_pipeline(&raw, &options).unwrap();
    let second = run_pipeline(&raw, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.records.len(), 3);
}

#[test]
fn records_keep_source_order() {
    let raw = table(&["B,M,9,25,130,17", "A,F,9,25,130,17"]);
    let output = run_pipeline(&raw, &PipelineOptions::default()).unwrap();
    let ids: Vec<String> = output
        .records
        .iter()
        .map(|r| r.identifier().to_string())
        .collect();
    assert_eq!(ids, vec!["B", "A"]);
}

#[test]
fn zero_height_fails_the_run_by_default() {
    let raw = table(&["Amina,F,4,10,90,11", "Kofi,M,9,25,0,17"]);
    let error = run_pipeline(&raw, &PipelineOptions::default()).expect_err("zero height");
    match error {
        NutritionError::NonPositiveHeight {
            row,
            identifier,
            height_cm,
        } => {
            assert_eq!(row, 2);
            assert_eq!(identifier, "Kofi");
            assert_eq!(height_cm, 0.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn skip_policy_reports_rejected_rows() {
    let raw = table(&[
        "Amina,F,4,10,90,11",
        "Kofi,M,9,25,0,17",
        "Esi,F,x,25,130,17",
    ]);
    let options = PipelineOptions::new().with_invalid_rows(InvalidRowPolicy::Skip);
    let output = run_pipeline(&raw, &options).expect("pipeline");
    assert_eq!(output.records.len(), 1);
    assert_eq!(output.rejected.len(), 2);
    assert_eq!(output.rejected[0].row, Some(2));
    assert_eq!(output.rejected[0].identifier, "Kofi");
    assert!(output.rejected[0].message.contains("must be positive"));
    assert_eq!(output.rejected[1].identifier, "Esi");
    assert!(output.rejected[1].message.contains("age"));
    assert!(output.records.iter().all(|r| r.bmi.is_finite()));
}

#[test]
fn overflowing_bmi_is_rejected_not_passed_on() {
    let raw = table(&[
        "Amina,F,4,10,90,11",
        "Tiny,F,9,10,1e-170,15",
        "Heavy,F,9,1e308,1,15",
    ]);
    let options = PipelineOptions::new().with_invalid_rows(InvalidRowPolicy::Skip);
    let output = run_pipeline(&raw, &options).expect("pipeline");
    assert_eq!(output.records.len(), 1);
    assert!(output.records.iter().all(|r| r.bmi.is_finite()));
    assert!(output.records.iter().all(|r| r.growth_efficiency.is_finite()));
    let rejected: Vec<(Option<usize>, &str)> = output
        .rejected
        .iter()
        .map(|issue| (issue.row, issue.identifier.as_str()))
        .collect();
    assert_eq!(rejected, vec![(Some(2), "Tiny"), (Some(3), "Heavy")]);
    assert!(output.rejected[0].message.contains("non-finite BMI"));

    let error = run_pipeline(&raw, &PipelineOptions::default()).expect_err("overflow");
    assert!(matches!(
        error,
        NutritionError::NonFiniteBmi { row: 2, .. }
    ));
}

#[test]
fn schema_error_aborts_even_when_skipping() {
    let raw = read_csv_str("Name,Gender,Age,Weight (kg),Height (cm)\nAmina,F,4,10,90\n").unwrap();
    let options = PipelineOptions::new().with_invalid_rows(InvalidRowPolicy::Skip);
    let error = run_pipeline(&raw, &options).expect_err("schema error");
    assert!(matches!(error, NutritionError::Schema { .. }));
}

#[test]
fn invalid_thresholds_abort_before_processing() {
    let mut options = PipelineOptions::new().with_profile(SchemaProfile::Dashboard);
    options.thresholds.reference.ideal_bmi = 0.0;
    let error = run_pipeline(&table(&["Amina,F,4,10,90,11"]), &options).expect_err("thresholds");
    assert!(matches!(error, NutritionError::InvalidThresholds(_)));
}

#[test]
fn empty_table_yields_no_records() {
    let output = run_pipeline(&table(&[]), &PipelineOptions::default()).unwrap();
    assert!(output.records.is_empty());
    assert!(output.rejected.is_empty());
}
