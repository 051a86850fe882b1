//! Threshold classification.
//!
//! Both functions are total: bounds are checked from the bottom up with
//! lower-inclusive intervals, and any value that fails every `<` check
//! (including NaN) lands in the top category.

use nutri_model::{BmiCategory, BmiThresholds, MuacCategory, MuacThresholds};

pub fn classify_bmi(bmi: f64, thresholds: &BmiThresholds) -> BmiCategory {
    if bmi < thresholds.underweight_from {
        BmiCategory::SeverelyUnderweight
    } else if bmi < thresholds.normal_from {
        BmiCategory::Underweight
    } else if bmi < thresholds.overweight_from {
        BmiCategory::Normal
    } else if bmi < thresholds.obese_from {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Classify arm circumference on the scale selected by age.
///
/// Gender is accepted but no cut-off depends on it.
pub fn classify_muac(
    muac_cm: f64,
    age: f64,
    _gender: &str,
    thresholds: &MuacThresholds,
) -> MuacCategory {
    if age < thresholds.child_age_below {
        if muac_cm < thresholds.child_moderate_from {
            MuacCategory::SevereAcuteMalnutrition
        } else if muac_cm < thresholds.child_normal_from {
            MuacCategory::ModerateAcuteMalnutrition
        } else {
            MuacCategory::Normal
        }
    } else if muac_cm < thresholds.normal_from {
        MuacCategory::Low
    } else if muac_cm < thresholds.high_from {
        MuacCategory::Normal
    } else {
        MuacCategory::High
    }
}
