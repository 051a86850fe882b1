use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading, parsing or enriching student records.
#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(String),
    /// Required measurement columns that no header resolved to.
    #[error("missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("row {row}: {field} value {value:?} is not a number")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("row {row}: {field} value {value} is out of range ({expected})")]
    OutOfRange {
        row: usize,
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("row {row} ({identifier}): height {height_cm} cm must be positive to derive BMI")]
    NonPositiveHeight {
        row: usize,
        identifier: String,
        height_cm: f64,
    },
    #[error(
        "row {row} ({identifier}): weight {weight_kg} kg and height {height_cm} cm give a non-finite BMI"
    )]
    /// Height is positive but the BMI quotient overflows.
    NonFiniteBmi {
        row: usize,
        identifier: String,
        weight_kg: f64,
        height_cm: f64,
    },
    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NutritionError {
    /// Data row the error belongs to, when it is row-scoped.
    pub fn row(&self) -> Option<usize> {
        match self {
            NutritionError::InvalidValue { row, .. }
            | NutritionError::OutOfRange { row, .. }
            | NutritionError::NonPositiveHeight { row, .. }
            | NutritionError::NonFiniteBmi { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// Result alias for nutrition operations.
pub type Result<T> = std::result::Result<T, NutritionError>;

/// A record excluded from the enriched table, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// 1-based data row, when the error was row-scoped.
    pub row: Option<usize>,
    /// Identifier cell, or the row number when the table has none.
    pub identifier: String,
    /// Display form of the underlying error.
    pub message: String,
}

impl RowIssue {
    /// Capture a row failure for reporting.
    pub fn from_error(identifier: impl Into<String>, error: &NutritionError) -> Self {
        Self {
            row: error.row(),
            identifier: identifier.into(),
            message: error.to_string(),
        }
    }
}
