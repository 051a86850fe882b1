//! Nutrition screening transforms.
//!
//! - **derive**: body-mass-index from weight and height
//! - **classify**: BMI and MUAC categories from threshold tables
//! - **score**: growth-efficiency composite score
//! - **pipeline**: normalize, parse and enrich a whole table

pub mod classify;
pub mod derive;
pub mod pipeline;
pub mod score;

pub use classify::{classify_bmi, classify_muac};
pub use derive::{compute_bmi, derive_bmi};
pub use pipeline::{PipelineOutput, enrich_record, enrich_records, run_pipeline};
pub use score::{growth_efficiency, round_to};
