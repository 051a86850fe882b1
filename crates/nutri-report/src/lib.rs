//! Aggregation and export of enriched student tables.
//!
//! - **aggregate**: means, category counts, underweight share and high-risk subset
//! - **export**: enriched table as CSV and summary as JSON for external renderers

pub mod aggregate;
pub mod export;

pub use aggregate::{
    CategoryShare, Summary, category_shares, format_mean, format_pct, high_risk, is_high_risk,
    mean, summarize,
};
pub use export::{ENRICHED_HEADERS, enriched_csv_string, summary_json, write_enriched_csv};
