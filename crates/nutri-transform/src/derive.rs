use nutri_model::{NutritionError, Result, StudentRecord};

/// `weight / (height/100)^2`, or `None` when height is not positive or the
/// division does not yield a finite number.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm.is_nan() || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m)).filter(|bmi| bmi.is_finite())
}

/// BMI for a record.
///
/// Zero or negative height is a `NonPositiveHeight` error; a height so
/// small (or weight so large) that the quotient overflows is `NonFiniteBmi`.
pub fn derive_bmi(record: &StudentRecord) -> Result<f64> {
    if record.height_cm.is_nan() || record.height_cm <= 0.0 {
        return Err(NutritionError::NonPositiveHeight {
            row: record.row,
            identifier: record.identifier.to_string(),
            height_cm: record.height_cm,
        });
    }
    compute_bmi(record.weight_kg, record.height_cm).ok_or_else(|| NutritionError::NonFiniteBmi {
        row: record.row,
        identifier: record.identifier.to_string(),
        weight_kg: record.weight_kg,
        height_cm: record.height_cm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_uses_height_in_meters() {
        let bmi = compute_bmi(10.0, 90.0).unwrap();
        assert!((bmi - 12.345_679).abs() < 1e-6);
        let bmi = compute_bmi(72.0, 180.0).unwrap();
        assert!((bmi - 22.222_222).abs() < 1e-6);
    }

    #[test]
    fn non_positive_height_has_no_bmi() {
        assert_eq!(compute_bmi(10.0, 0.0), None);
        assert_eq!(compute_bmi(10.0, -120.0), None);
        assert_eq!(compute_bmi(10.0, f64::NAN), None);
    }

    #[test]
    fn overflowing_bmi_is_rejected() {
        assert_eq!(compute_bmi(10.0, 1e-170), None);
        assert_eq!(compute_bmi(1e308, 1.0), None);

        let record = StudentRecord {
            row: 4,
            identifier: nutri_model::Identifier::Text("Esi".to_string()),
            gender: "F".to_string(),
            age: 9.0,
            weight_kg: 10.0,
            height_cm: 1e-170,
            muac_cm: 15.0,
        };
        match derive_bmi(&record) {
            Err(NutritionError::NonFiniteBmi { row, identifier, .. }) => {
                assert_eq!(row, 4);
                assert_eq!(identifier, "Esi");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
