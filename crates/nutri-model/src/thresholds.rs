//! Threshold tables for classification, scoring and risk flagging.
//!
//! All bounds are lower-inclusive: a value equal to a bound belongs to the
//! category that starts at that bound. The tables are built once and shared
//! read-only; the `Default` impls carry the standard screening cut-offs and
//! a JSON document can override any subset of them.

use serde::{Deserialize, Serialize};

use crate::{NutritionError, Result};

/// BMI category lower bounds (kg/m²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BmiThresholds {
    /// Below this value a student is severely underweight.
    pub underweight_from: f64,
    /// Start of `Normal`.
    pub normal_from: f64,
    /// Start of `Overweight`.
    pub overweight_from: f64,
    /// Start of `Obese`.
    pub obese_from: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            underweight_from: 16.0,
            normal_from: 18.5,
            overweight_from: 25.0,
            obese_from: 30.0,
        }
    }
}

/// MUAC category bounds (cm) and the age split between the two scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MuacThresholds {
    /// Students younger than this (years) use the acute malnutrition scale.
    pub child_age_below: f64,
    /// Start of `ModerateAcuteMalnutrition` on the child scale.
    pub child_moderate_from: f64,
    /// Start of `Normal` on the child scale.
    pub child_normal_from: f64,
    /// Start of `Normal` for older students; below it is `Low`.
    pub normal_from: f64,
    /// Start of `High` for older students.
    pub high_from: f64,
}

impl Default for MuacThresholds {
    fn default() -> Self {
        Self {
            child_age_below: 5.0,
            child_moderate_from: 11.5,
            child_normal_from: 12.5,
            normal_from: 16.0,
            high_from: 22.0,
        }
    }
}

/// Ideal reference values for the growth-efficiency score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceValues {
    pub ideal_bmi: f64,
    pub ideal_muac: f64,
}

impl Default for ReferenceValues {
    fn default() -> Self {
        Self {
            ideal_bmi: 18.5,
            ideal_muac: 22.0,
        }
    }
}

/// Strict upper limits for the high-risk flag (both must hold).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskThresholds {
    pub bmi_below: f64,
    pub muac_below: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            bmi_below: 16.0,
            muac_below: 16.0,
        }
    }
}

/// Complete threshold configuration injected into the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdConfig {
    pub bmi: BmiThresholds,
    pub muac: MuacThresholds,
    pub reference: ReferenceValues,
    pub risk: RiskThresholds,
}

impl ThresholdConfig {
    /// Parse a JSON document; missing sections and fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ThresholdConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every table is finite and strictly ascending.
    pub fn validate(&self) -> Result<()> {
        ascending(
            "bmi",
            &[
                self.bmi.underweight_from,
                self.bmi.normal_from,
                self.bmi.overweight_from,
                self.bmi.obese_from,
            ],
        )?;
        ascending(
            "muac (under age cut-off)",
            &[self.muac.child_moderate_from, self.muac.child_normal_from],
        )?;
        ascending("muac", &[self.muac.normal_from, self.muac.high_from])?;
        positive("muac.child_age_below", self.muac.child_age_below)?;
        positive("reference.ideal_bmi", self.reference.ideal_bmi)?;
        positive("reference.ideal_muac", self.reference.ideal_muac)?;
        finite("risk.bmi_below", self.risk.bmi_below)?;
        finite("risk.muac_below", self.risk.muac_below)?;
        Ok(())
    }
}

fn ascending(table: &str, bounds: &[f64]) -> Result<()> {
    if let Some(bad) = bounds.iter().find(|value| !value.is_finite()) {
        return Err(NutritionError::InvalidThresholds(format!(
            "{table} bound {bad} is not finite"
        )));
    }
    for pair in bounds.windows(2) {
        if pair[0] >= pair[1] {
            return Err(NutritionError::InvalidThresholds(format!(
                "{table} bounds must be strictly ascending, got {} then {}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}

fn positive(name: &str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(NutritionError::InvalidThresholds(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

fn finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NutritionError::InvalidThresholds(format!(
            "{name} is not finite"
        )))
    }
}
