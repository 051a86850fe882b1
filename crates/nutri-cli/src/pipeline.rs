//! Analysis stages driven by the CLI.
//!
//! Each stage runs inside its own span and reports counts and durations:
//!
//! 1. **load**: read the CSV file into a raw table
//! 2. **enrich**: normalize, parse, derive, classify, score
//! 3. **summarize**: aggregate statistics and high-risk subset
//! 4. **output**: optional CSV/JSON hand-off files

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use nutri_ingest::read_csv_table;
use nutri_model::{PipelineOptions, ThresholdConfig};
use nutri_report::{summarize, summary_json, write_enriched_csv};
use nutri_transform::run_pipeline;

use crate::logging::redact_value;
use crate::types::{AnalysisResult, OutputPaths};

/// File name of the enriched table inside the output directory.
pub const ENRICHED_CSV_FILE: &str = "enriched.csv";
/// File name of the summary inside the output directory.
pub const SUMMARY_JSON_FILE: &str = "summary.json";

/// Load a threshold configuration file, or the defaults when `path` is None.
pub fn load_thresholds(path: Option<&Path>) -> Result<ThresholdConfig> {
    let Some(path) = path else {
        return Ok(ThresholdConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read thresholds: {}", path.display()))?;
    let config = ThresholdConfig::from_json_str(&text)
        .with_context(|| format!("parse thresholds: {}", path.display()))?;
    info!(path = %path.display(), "loaded threshold configuration");
    Ok(config)
}

/// Load `input`, run the enrichment pipeline and summarize the result.
pub fn analyze(input: &Path, options: &PipelineOptions) -> Result<AnalysisResult> {
    let span = info_span!("analyze", source = %input.display(), profile = %options.profile);
    let _guard = span.enter();

    let load_start = Instant::now();
    let raw = read_csv_table(input).with_context(|| format!("load {}", input.display()))?;
    info!(
        rows = raw.len(),
        columns = raw.headers.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    let output = run_pipeline(&raw, options)
        .with_context(|| format!("analyze {}", input.display()))?;
    for issue in &output.rejected {
        warn!(
            row = ?issue.row,
            identifier = %redact_value(&issue.identifier),
            "record rejected"
        );
    }

    let summary_start = Instant::now();
    let summary = summarize(&output.records, &options.thresholds.risk);
    info!(
        total = summary.total,
        high_risk = summary.high_risk.len(),
        duration_ms = summary_start.elapsed().as_millis(),
        "summary complete"
    );

    Ok(AnalysisResult {
        source: input.to_path_buf(),
        profile: options.profile,
        thresholds: options.thresholds,
        records: output.records,
        rejected: output.rejected,
        summary,
        outputs: OutputPaths::default(),
    })
}

/// Write `enriched.csv` and `summary.json` into `dir`, creating it if needed.
pub fn write_outputs(result: &AnalysisResult, dir: &Path) -> Result<OutputPaths> {
    let span = info_span!("output", output_dir = %dir.display());
    let _guard = span.enter();
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let csv_path = dir.join(ENRICHED_CSV_FILE);
    let file = File::create(&csv_path).with_context(|| format!("create {}", csv_path.display()))?;
    write_enriched_csv(BufWriter::new(file), &result.records)
        .with_context(|| format!("write {}", csv_path.display()))?;

    let json_path = dir.join(SUMMARY_JSON_FILE);
    let json = summary_json(&result.summary).context("serialize summary")?;
    fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;

    info!(
        records = result.records.len(),
        enriched_csv = %csv_path.display(),
        summary_json = %json_path.display(),
        "outputs written"
    );
    Ok(OutputPaths {
        enriched_csv: Some(csv_path),
        summary_json: Some(json_path),
    })
}
