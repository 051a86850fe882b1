//! Summary statistics over an enriched table.
//!
//! An empty table has no means and no underweight share (`None`, rendered
//! as `n/a` and serialized as `null`), empty count maps and an empty
//! high-risk list.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use nutri_model::{BmiCategory, EnrichedRecord, MuacCategory, RiskThresholds};
use nutri_transform::round_to;

/// Aggregate view of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// Mean BMI, two decimals.
    pub mean_bmi: Option<f64>,
    /// Mean MUAC in cm, two decimals.
    pub mean_muac: Option<f64>,
    pub mean_growth_efficiency: Option<f64>,
    /// Share of Underweight plus Severely Underweight records, one decimal.
    pub underweight_pct: Option<f64>,
    pub bmi_counts: BTreeMap<BmiCategory, usize>,
    pub muac_counts: BTreeMap<MuacCategory, usize>,
    pub gender_counts: BTreeMap<String, usize>,
    /// Records below both risk cut-offs, in source order.
    pub high_risk: Vec<EnrichedRecord>,
}

pub fn summarize(records: &[EnrichedRecord], risk: &RiskThresholds) -> Summary {
    let total = records.len();
    let underweight = records
        .iter()
        .filter(|r| r.bmi_category.is_underweight())
        .count();
    let underweight_pct =
        (total > 0).then(|| round_to(underweight as f64 * 100.0 / total as f64, 1));

    let mut bmi_counts = BTreeMap::new();
    let mut muac_counts = BTreeMap::new();
    let mut gender_counts = BTreeMap::new();
    for record in records {
        *bmi_counts.entry(record.bmi_category).or_insert(0) += 1;
        *muac_counts.entry(record.muac_category).or_insert(0) += 1;
        *gender_counts
            .entry(gender_label(&record.record.gender))
            .or_insert(0) += 1;
    }

    let high_risk = high_risk(records, risk);
    debug!(
        total,
        underweight,
        high_risk = high_risk.len(),
        "summarized records"
    );

    Summary {
        total,
        mean_bmi: mean(records.iter().map(|r| r.bmi)).map(|v| round_to(v, 2)),
        mean_muac: mean(records.iter().map(EnrichedRecord::muac_cm)).map(|v| round_to(v, 2)),
        mean_growth_efficiency: mean(records.iter().map(|r| r.growth_efficiency))
            .map(|v| round_to(v, 2)),
        underweight_pct,
        bmi_counts,
        muac_counts,
        gender_counts,
        high_risk,
    }
}

/// Arithmetic mean, `None` for an empty sequence.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// `bmi < bmi_below AND muac < muac_below`, on the numbers, not the categories.
pub fn is_high_risk(record: &EnrichedRecord, risk: &RiskThresholds) -> bool {
    record.bmi < risk.bmi_below && record.record.muac_cm < risk.muac_below
}

pub fn high_risk(records: &[EnrichedRecord], risk: &RiskThresholds) -> Vec<EnrichedRecord> {
    records
        .iter()
        .filter(|record| is_high_risk(record, risk))
        .cloned()
        .collect()
}

/// One slice of a category distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    /// Percentage of `total`, one decimal.
    pub pct: f64,
}

/// Turn a count map into labelled percentage shares, keeping map order.
pub fn category_shares<K: Display>(counts: &BTreeMap<K, usize>, total: usize) -> Vec<CategoryShare> {
    if total == 0 {
        return Vec::new();
    }
    counts
        .iter()
        .map(|(label, count)| CategoryShare {
            label: label.to_string(),
            count: *count,
            pct: round_to(*count as f64 * 100.0 / total as f64, 1),
        })
        .collect()
}

pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.1}%"),
        None => "n/a".to_string(),
    }
}

pub fn format_mean(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    }
}

fn gender_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "unspecified".to_string()
    } else {
        trimmed.to_string()
    }
}
