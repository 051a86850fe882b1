//! Configuration options for a screening run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ThresholdConfig;

/// Named set of accepted column headers.
///
/// Two header conventions exist in collected datasets; `Unified` accepts
/// both, the other two accept only their own aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaProfile {
    #[default]
    Unified,
    /// `Name, Gender, Age, Weight (kg), Height (cm), MUAC (cm)`
    Dashboard,
    /// `Student_ID, Gender, Age, Weight_kg, Height_cm, Arm_Circumference_cm`
    Screening,
}

impl SchemaProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaProfile::Unified => "unified",
            SchemaProfile::Dashboard => "dashboard",
            SchemaProfile::Screening => "screening",
        }
    }
}

impl fmt::Display for SchemaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unified" => Ok(SchemaProfile::Unified),
            "dashboard" => Ok(SchemaProfile::Dashboard),
            "screening" => Ok(SchemaProfile::Screening),
            _ => Err(format!("Unknown schema profile: {s}")),
        }
    }
}

/// What to do with a record that cannot be parsed or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRowPolicy {
    /// Abort the whole run on the first bad record.
    #[default]
    Fail,
    /// Drop the record from the enriched table and report it.
    Skip,
}

/// Options controlling a screening run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub profile: SchemaProfile,
    pub invalid_rows: InvalidRowPolicy,
    pub thresholds: ThresholdConfig,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_profile(mut self, profile: SchemaProfile) -> Self {
        self.profile = profile;
        self
    }

    #[must_use]
    pub fn with_invalid_rows(mut self, policy: InvalidRowPolicy) -> Self {
        self.invalid_rows = policy;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        self.thresholds = thresholds;
        self
    }
}
