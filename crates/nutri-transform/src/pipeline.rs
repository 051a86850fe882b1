//! Record enrichment pipeline.
//!
//! Normalize → parse → derive BMI → classify → score, as an explicit map
//! from immutable `StudentRecord`s to new `EnrichedRecord`s. The pipeline
//! holds no state; running it twice on the same table yields the same
//! output.

use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use nutri_ingest::{RawTable, RowFailure, normalize_table, parse_records};
use nutri_model::{
    EnrichedRecord, InvalidRowPolicy, PipelineOptions, Result, RowIssue, StudentRecord,
    ThresholdConfig,
};

use crate::classify::{classify_bmi, classify_muac};
use crate::derive::derive_bmi;
use crate::score::growth_efficiency;

/// Enriched table plus the records excluded under `InvalidRowPolicy::Skip`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    pub records: Vec<EnrichedRecord>,
    pub rejected: Vec<RowIssue>,
}

impl PipelineOutput {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Derive, classify and score a single record.
pub fn enrich_record(record: StudentRecord, thresholds: &ThresholdConfig) -> Result<EnrichedRecord> {
    let bmi = derive_bmi(&record)?;
    let bmi_category = classify_bmi(bmi, &thresholds.bmi);
    let muac_category = classify_muac(
        record.muac_cm,
        record.age,
        &record.gender,
        &thresholds.muac,
    );
    let growth_efficiency = growth_efficiency(bmi, record.muac_cm, &thresholds.reference);
    debug!(
        row = record.row,
        bmi,
        bmi_category = %bmi_category,
        muac_category = %muac_category,
        growth_efficiency,
        "classified record"
    );
    Ok(EnrichedRecord {
        record,
        bmi,
        bmi_category,
        muac_category,
        growth_efficiency,
    })
}

/// Enrich every record, stopping at the first failure.
pub fn enrich_records(
    records: Vec<StudentRecord>,
    thresholds: &ThresholdConfig,
) -> Result<Vec<EnrichedRecord>> {
    records
        .into_iter()
        .map(|record| enrich_record(record, thresholds))
        .collect()
}

/// Run the full pipeline over a raw table.
///
/// A schema error always aborts. Row-level failures abort under
/// `InvalidRowPolicy::Fail` and are collected into
/// [`PipelineOutput::rejected`] under `InvalidRowPolicy::Skip`.
pub fn run_pipeline(raw: &RawTable, options: &PipelineOptions) -> Result<PipelineOutput> {
    options.thresholds.validate()?;
    let span = info_span!("pipeline", profile = %options.profile, rows = raw.len());
    let _guard = span.enter();
    let start = Instant::now();

    let table = normalize_table(raw, options.profile)?;
    let mut output = PipelineOutput::default();
    for parsed in parse_records(&table) {
        let outcome = parsed.and_then(|record| {
            let identifier = record.identifier.to_string();
            enrich_record(record, &options.thresholds)
                .map_err(|error| RowFailure { identifier, error })
        });
        match outcome {
            Ok(enriched) => output.records.push(enriched),
            Err(failure) => match options.invalid_rows {
                InvalidRowPolicy::Fail => return Err(failure.error),
                InvalidRowPolicy::Skip => {
                    warn!(
                        row = ?failure.error.row(),
                        error = %failure.error,
                        "skipping invalid record"
                    );
                    output
                        .rejected
                        .push(RowIssue::from_error(failure.identifier, &failure.error));
                }
            },
        }
    }

    info!(
        records = output.records.len(),
        rejected = output.rejected.len(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(output)
}
