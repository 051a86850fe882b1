use anyhow::Result;
use tracing::info_span;

use nutri_cli::pipeline::{analyze, load_thresholds, write_outputs};
use nutri_cli::types::AnalysisResult;
use nutri_model::PipelineOptions;

use crate::cli::{AnalyzeArgs, ThresholdsArgs};
use crate::summary::print_thresholds;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let span = info_span!("run", command = "analyze");
    let _guard = span.enter();

    let thresholds = load_thresholds(args.thresholds.as_deref())?;
    let options = PipelineOptions::new()
        .with_profile(args.profile.into())
        .with_invalid_rows(args.on_invalid.into())
        .with_thresholds(thresholds);

    let mut result = analyze(&args.input, &options)?;
    if let Some(dir) = &args.output_dir {
        result.outputs = write_outputs(&result, dir)?;
    }
    Ok(result)
}

pub fn run_thresholds(args: &ThresholdsArgs) -> Result<()> {
    let thresholds = load_thresholds(args.thresholds.as_deref())?;
    print_thresholds(&thresholds);
    Ok(())
}
