//! Hand-off formats for the report renderer.

use std::io::Write;

use csv::WriterBuilder;

use nutri_model::{EnrichedRecord, NutritionError, Result};

use crate::aggregate::Summary;

/// Column order of the enriched CSV export.
pub const ENRICHED_HEADERS: [&str; 10] = [
    "id",
    "gender",
    "age",
    "weight",
    "height",
    "bmi",
    "bmi_category",
    "muac",
    "muac_category",
    "growth_efficiency",
];

/// Write the enriched table as CSV. BMI and growth efficiency are written
/// with two decimals; measurements as given.
pub fn write_enriched_csv<W: Write>(writer: W, records: &[EnrichedRecord]) -> Result<()> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record(ENRICHED_HEADERS).map_err(csv_error)?;
    for record in records {
        let source = &record.record;
        csv.write_record([
            source.identifier.to_string(),
            source.gender.clone(),
            source.age.to_string(),
            source.weight_kg.to_string(),
            source.height_cm.to_string(),
            format!("{:.2}", record.bmi),
            record.bmi_category.to_string(),
            source.muac_cm.to_string(),
            record.muac_category.to_string(),
            format!("{:.2}", record.growth_efficiency),
        ])
        .map_err(csv_error)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn enriched_csv_string(records: &[EnrichedRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_enriched_csv(&mut buffer, records)?;
    String::from_utf8(buffer).map_err(|error| NutritionError::Csv(error.to_string()))
}

/// Pretty-printed JSON for the summary.
pub fn summary_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

fn csv_error(error: csv::Error) -> NutritionError {
    NutritionError::Csv(error.to_string())
}
