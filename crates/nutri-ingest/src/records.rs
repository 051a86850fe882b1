//! Typed record parsing.
//!
//! Malformed numbers are errors, never coerced to zero. Height is only
//! checked for being a number here; a non-positive height is left for BMI
//! derivation to report.

use tracing::debug;

use nutri_model::{Identifier, NutritionError, StudentRecord};

use crate::normalize::NormalizedTable;

/// A row that could not be turned into a `StudentRecord`.
#[derive(Debug)]
pub struct RowFailure {
    /// Identifier cell (or row number) for reporting.
    pub identifier: String,
    pub error: NutritionError,
}

/// Per-row parse outcome, in source order.
pub type RecordParse = Vec<Result<StudentRecord, RowFailure>>;

/// Parses a string as f64, returning None for empty, invalid or non-finite text.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse every row of `table` into a `StudentRecord`, keeping failures in
/// place so callers can apply their own policy.
pub fn parse_records(table: &NormalizedTable) -> RecordParse {
    let records: RecordParse = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| parse_row(table, idx + 1, row))
        .collect();
    debug!(
        rows = records.len(),
        failed = records.iter().filter(|r| r.is_err()).count(),
        "parsed records"
    );
    records
}

fn parse_row(table: &NormalizedTable, row_no: usize, row: &[String]) -> Result<StudentRecord, RowFailure> {
    let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
    let identifier = match table.columns.id.map(cell) {
        Some(raw) if !raw.is_empty() => Identifier::parse(raw),
        _ => Identifier::Number(row_no as i64),
    };
    let fail = |error: NutritionError| RowFailure {
        identifier: identifier.to_string(),
        error,
    };
    let number = |idx: usize, field: &'static str| {
        let raw = cell(idx);
        parse_f64(raw).ok_or_else(|| NutritionError::InvalidValue {
            row: row_no,
            field,
            value: raw.to_string(),
        })
    };

    let age = number(table.columns.age, "age").map_err(fail)?;
    let weight_kg = number(table.columns.weight, "weight").map_err(fail)?;
    let height_cm = number(table.columns.height, "height").map_err(fail)?;
    let muac_cm = number(table.columns.muac, "muac").map_err(fail)?;

    if age < 0.0 {
        return Err(fail(out_of_range(row_no, "age", age, "non-negative years")));
    }
    if weight_kg <= 0.0 {
        return Err(fail(out_of_range(row_no, "weight", weight_kg, "positive kg")));
    }
    if muac_cm < 0.0 {
        return Err(fail(out_of_range(row_no, "muac", muac_cm, "non-negative cm")));
    }

    Ok(StudentRecord {
        row: row_no,
        identifier,
        gender: cell(table.columns.gender).to_string(),
        age,
        weight_kg,
        height_cm,
        muac_cm,
    })
}

fn out_of_range(row: usize, field: &'static str, value: f64, expected: &'static str) -> NutritionError {
    NutritionError::OutOfRange {
        row,
        field,
        value,
        expected,
    }
}
