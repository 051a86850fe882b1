//! Data model for student nutrition screening.
//!
//! Records, derived categories, threshold configuration and the error
//! taxonomy shared by the ingest, transform and report crates.

pub mod category;
pub mod error;
pub mod options;
pub mod record;
pub mod thresholds;

pub use category::{BmiCategory, MuacCategory};
pub use error::{NutritionError, Result, RowIssue};
pub use options::{InvalidRowPolicy, PipelineOptions, SchemaProfile};
pub use record::{EnrichedRecord, Identifier, StudentRecord};
pub use thresholds::{
    BmiThresholds, MuacThresholds, ReferenceValues, RiskThresholds, ThresholdConfig,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_issue_keeps_row_and_message() {
        let error = NutritionError::NonPositiveHeight {
            row: 3,
            identifier: "S-03".to_string(),
            height_cm: 0.0,
        };
        let issue = RowIssue::from_error("S-03", &error);
        assert_eq!(issue.row, Some(3));
        assert_eq!(issue.identifier, "S-03");
        assert!(issue.message.contains("height 0 cm"));
    }

    #[test]
    fn schema_error_lists_missing_fields() {
        let error = NutritionError::Schema {
            missing: vec!["height".to_string(), "muac".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "missing required columns: height, muac"
        );
        assert_eq!(error.row(), None);
    }
}
