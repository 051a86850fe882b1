use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BmiCategory, MuacCategory};

/// Student identifier as it appears in the source table.
///
/// Uniqueness is not enforced; duplicate identifiers are valid input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Identifier {
    /// Parse a raw cell, preferring an integer reading.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Identifier::Number(value),
            Err(_) => Identifier::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(value) => write!(f, "{value}"),
            Identifier::Text(value) => f.write_str(value),
        }
    }
}

/// One row of measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub identifier: Identifier,
    pub gender: String,
    /// Age in years; fractional ages are allowed.
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Mid-upper-arm circumference in centimeters.
    pub muac_cm: f64,
}

/// A student record with its derived metrics and categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// Source measurements, serialized inline.
    #[serde(flatten)]
    pub record: StudentRecord,
    /// Unrounded body-mass index (kg/m²).
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub muac_category: MuacCategory,
    /// Composite score relative to the reference values, two decimals.
    pub growth_efficiency: f64,
}

impl EnrichedRecord {
    pub fn identifier(&self) -> &Identifier {
        &self.record.identifier
    }

    pub fn muac_cm(&self) -> f64 {
        self.record.muac_cm
    }
}
