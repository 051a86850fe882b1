use std::path::PathBuf;

use nutri_model::{EnrichedRecord, RowIssue, SchemaProfile, ThresholdConfig};
use nutri_report::Summary;

/// Everything produced by one `analyze` run.
#[derive(Debug)]
pub struct AnalysisResult {
    /// Input CSV path.
    pub source: PathBuf,
    pub profile: SchemaProfile,
    /// Thresholds the records were classified with.
    pub thresholds: ThresholdConfig,
    /// Enriched records in source order.
    pub records: Vec<EnrichedRecord>,
    /// Rows left out under the skip policy.
    pub rejected: Vec<RowIssue>,
    pub summary: Summary,
    /// Files written, if an output directory was given.
    pub outputs: OutputPaths,
}

impl AnalysisResult {
    /// True when any row was rejected; the CLI exits with status 1.
    pub fn has_errors(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Paths of the hand-off files written for the report renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub enriched_csv: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
}
