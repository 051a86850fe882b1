//! Nutritional status categories.
//!
//! Variants are declared from most to least severe, so the derived `Ord`
//! sorts summaries and tables by severity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Body-mass-index category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Severely Underweight")]
    SeverelyUnderweight,
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 5] = [
        BmiCategory::SeverelyUnderweight,
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Label as shown to users and written to exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Returns true for the two categories counted as underweight.
    pub fn is_underweight(&self) -> bool {
        matches!(
            self,
            BmiCategory::SeverelyUnderweight | BmiCategory::Underweight
        )
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BmiCategory {
    type Err = String;

    /// Parse a category label (case-insensitive, `_`/`-` treated as spaces).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        BmiCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("Unknown BMI category: {s}"))
    }
}

/// Mid-upper-arm-circumference category.
///
/// Children under the age cut-off are graded on the acute malnutrition
/// scale (`SevereAcuteMalnutrition`, `ModerateAcuteMalnutrition`, `Normal`);
/// everyone else on `Low`, `Normal`, `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MuacCategory {
    #[serde(rename = "Severe Acute Malnutrition")]
    SevereAcuteMalnutrition,
    #[serde(rename = "Moderate Acute Malnutrition")]
    ModerateAcuteMalnutrition,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "High")]
    High,
}

impl MuacCategory {
    pub const ALL: [MuacCategory; 5] = [
        MuacCategory::SevereAcuteMalnutrition,
        MuacCategory::ModerateAcuteMalnutrition,
        MuacCategory::Low,
        MuacCategory::Normal,
        MuacCategory::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuacCategory::SevereAcuteMalnutrition => "Severe Acute Malnutrition",
            MuacCategory::ModerateAcuteMalnutrition => "Moderate Acute Malnutrition",
            MuacCategory::Low => "Low",
            MuacCategory::Normal => "Normal",
            MuacCategory::High => "High",
        }
    }
}

impl fmt::Display for MuacCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuacCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        MuacCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("Unknown MUAC category: {s}"))
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .split(|ch: char| ch.is_whitespace() || ch == '_' || ch == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
