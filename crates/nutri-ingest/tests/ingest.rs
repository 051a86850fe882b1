use std::io::Write;

use nutri_ingest::{
    RawTable, normalize_table, parse_records, read_csv_str, read_csv_table,
};
use nutri_model::{Identifier, NutritionError, SchemaProfile};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const DASHBOARD_CSV: &str = "Name, Gender, Age, Weight (kg), Height (cm), MUAC (cm)\n\
Amina,F,4,10,90,11\n\
Kofi,M,9,25.5,130,17.2\n";

const SCREENING_CSV: &str = "Student_ID,Gender,Age,Weight_kg,Height_cm,Arm_Circumference_cm\n\
101,F,4,10,90,11\n\
102,M,9,25.5,130,17.2\n";

#[test]
fn reads_dashboard_headers_from_file() {
    let file = create_temp_csv(DASHBOARD_CSV);
    let raw = read_csv_table(file.path()).expect("read csv");
    let table = normalize_table(&raw, SchemaProfile::Unified).expect("normalize");
    assert_eq!(
        table.headers,
        vec!["id", "gender", "age", "weight", "height", "muac"]
    );
    let records: Vec<_> = parse_records(&table)
        .into_iter()
        .map(|r| r.expect("valid row"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].identifier, Identifier::Text("Amina".to_string()));
    assert_eq!(records[0].age, 4.0);
    assert_eq!(records[1].weight_kg, 25.5);
    assert_eq!(records[1].muac_cm, 17.2);
    assert_eq!(records[1].row, 2);
}

#[test]
fn both_conventions_yield_the_same_measurements() {
    let dashboard = normalize_table(&read_csv_str(DASHBOARD_CSV).unwrap(), SchemaProfile::Unified)
        .expect("dashboard headers");
    let screening = normalize_table(&read_csv_str(SCREENING_CSV).unwrap(), SchemaProfile::Unified)
        .expect("screening headers");
    assert_eq!(dashboard.headers, screening.headers);

    let left = parse_records(&dashboard);
    let right = parse_records(&screening);
    for (a, b) in left.iter().zip(&right) {
        let (a, b) = (a.as_ref().unwrap(), b.as_ref().unwrap());
        assert_eq!(a.gender, b.gender);
        assert_eq!(a.height_cm, b.height_cm);
        assert_eq!(a.muac_cm, b.muac_cm);
    }
    assert_eq!(right[0].as_ref().unwrap().identifier, Identifier::Number(101));
}

#[test]
fn named_profiles_only_accept_their_own_headers() {
    let raw = read_csv_str(SCREENING_CSV).unwrap();
    assert!(normalize_table(&raw, SchemaProfile::Screening).is_ok());
    let error = normalize_table(&raw, SchemaProfile::Dashboard).expect_err("wrong profile");
    match error {
        NutritionError::Schema { missing } => {
            assert_eq!(missing, vec!["weight", "height", "muac"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn normalization_does_not_touch_the_input() {
    let raw = read_csv_str(DASHBOARD_CSV).unwrap();
    let before = raw.clone();
    let _ = normalize_table(&raw, SchemaProfile::Unified).unwrap();
    assert_eq!(raw, before);
}

#[test]
fn missing_identifier_falls_back_to_row_number() {
    let raw = RawTable::new(
        ["gender", "age", "weight", "height", "muac"]
            .map(String::from)
            .to_vec(),
        vec![["F", "7", "20", "120", "15"].map(String::from).to_vec()],
    );
    let table = normalize_table(&raw, SchemaProfile::Unified).unwrap();
    let record = parse_records(&table).remove(0).unwrap();
    assert_eq!(record.identifier, Identifier::Number(1));
}

#[test]
fn malformed_numbers_are_reported_not_coerced() {
    let raw = read_csv_str(
        "name,gender,age,weight (kg),height (cm),muac (cm)\n\
         Amina,F,four,10,90,11\n\
         Kofi,M,9,,130,17\n\
         Esi,F,9,25,0,17\n",
    )
    .unwrap();
    let table = normalize_table(&raw, SchemaProfile::Unified).unwrap();
    let parsed = parse_records(&table);

    let first = parsed[0].as_ref().expect_err("non-numeric age");
    assert_eq!(first.identifier, "Amina");
    assert!(matches!(
        &first.error,
        NutritionError::InvalidValue { row: 1, field: "age", value } if value == "four"
    ));

    let second = parsed[1].as_ref().expect_err("empty weight");
    assert!(matches!(
        second.error,
        NutritionError::InvalidValue { row: 2, field: "weight", .. }
    ));

    // Zero height parses; BMI derivation reports it.
    assert_eq!(parsed[2].as_ref().unwrap().height_cm, 0.0);
}

#[test]
fn negative_measurements_are_out_of_range() {
    let raw = read_csv_str("gender,age,weight,height,muac\nF,-1,20,120,15\nM,8,20,120,-2\n").unwrap();
    let table = normalize_table(&raw, SchemaProfile::Unified).unwrap();
    let parsed = parse_records(&table);
    assert!(matches!(
        parsed[0].as_ref().unwrap_err().error,
        NutritionError::OutOfRange { field: "age", .. }
    ));
    assert!(matches!(
        parsed[1].as_ref().unwrap_err().error,
        NutritionError::OutOfRange { field: "muac", .. }
    ));
}
