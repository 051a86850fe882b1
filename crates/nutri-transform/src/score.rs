use nutri_model::ReferenceValues;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `(bmi / ideal_bmi) * (muac / ideal_muac)`, rounded to two decimals.
///
/// Non-finite inputs propagate into the result.
pub fn growth_efficiency(bmi: f64, muac_cm: f64, reference: &ReferenceValues) -> f64 {
    round_to(
        (bmi / reference.ideal_bmi) * (muac_cm / reference.ideal_muac),
        2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_values_score_one() {
        assert_eq!(growth_efficiency(18.5, 22.0, &ReferenceValues::default()), 1.0);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(33.333_333, 1), 33.3);
    }

    #[test]
    fn nan_propagates() {
        assert!(growth_efficiency(f64::NAN, 22.0, &ReferenceValues::default()).is_nan());
    }
}
