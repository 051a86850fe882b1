//! Header normalization and alias resolution.

use std::fmt;

use tracing::{debug, warn};

use nutri_model::{NutritionError, Result, SchemaProfile};

use crate::csv_table::RawTable;

/// Canonical measurement fields a student table must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalField {
    Id,
    Gender,
    Age,
    Weight,
    Height,
    Muac,
}

impl CanonicalField {
    /// Fields whose absence is a schema error, in reporting order.
    pub const REQUIRED: [CanonicalField; 5] = [
        CanonicalField::Age,
        CanonicalField::Gender,
        CanonicalField::Weight,
        CanonicalField::Height,
        CanonicalField::Muac,
    ];

    /// Canonical column name written into normalized headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Id => "id",
            CanonicalField::Gender => "gender",
            CanonicalField::Age => "age",
            CanonicalField::Weight => "weight",
            CanonicalField::Height => "height",
            CanonicalField::Muac => "muac",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CANONICAL: &[(&str, CanonicalField)] = &[
    ("id", CanonicalField::Id),
    ("gender", CanonicalField::Gender),
    ("age", CanonicalField::Age),
    ("weight", CanonicalField::Weight),
    ("height", CanonicalField::Height),
    ("muac", CanonicalField::Muac),
];

const DASHBOARD_ALIASES: &[(&str, CanonicalField)] = &[
    ("name", CanonicalField::Id),
    ("weight (kg)", CanonicalField::Weight),
    ("height (cm)", CanonicalField::Height),
    ("muac (cm)", CanonicalField::Muac),
];

const SCREENING_ALIASES: &[(&str, CanonicalField)] = &[
    ("student_id", CanonicalField::Id),
    ("weight_kg", CanonicalField::Weight),
    ("height_cm", CanonicalField::Height),
    ("arm_circumference_cm", CanonicalField::Muac),
];

/// Trim, drop byte-order marks, collapse inner whitespace and lower-case.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Look up the canonical field for an already-normalized header.
pub fn canonical_field(header: &str, profile: SchemaProfile) -> Option<CanonicalField> {
    let alias_sets: &[&[(&str, CanonicalField)]] = match profile {
        SchemaProfile::Unified => &[CANONICAL, DASHBOARD_ALIASES, SCREENING_ALIASES],
        SchemaProfile::Dashboard => &[CANONICAL, DASHBOARD_ALIASES],
        SchemaProfile::Screening => &[CANONICAL, SCREENING_ALIASES],
    };
    alias_sets
        .iter()
        .flat_map(|set| set.iter())
        .find(|(alias, _)| *alias == header)
        .map(|(_, field)| *field)
}

/// Column positions of the canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Identifier column; rows fall back to their row number without it.
    pub id: Option<usize>,
    pub gender: usize,
    /// Age in years.
    pub age: usize,
    /// Weight in kilograms.
    pub weight: usize,
    /// Height in centimeters.
    pub height: usize,
    /// Mid-upper-arm circumference in centimeters.
    pub muac: usize,
}

/// Map normalized headers to canonical field positions.
///
/// The first column that resolves to a field wins; later duplicates are
/// reported and ignored.
pub fn resolve_columns(headers: &[String], profile: SchemaProfile) -> Result<ColumnMap> {
    let mut found: [Option<usize>; 6] = [None; 6];
    for (idx, header) in headers.iter().enumerate() {
        let Some(field) = canonical_field(header, profile) else {
            continue;
        };
        if let Some(first) = found[field as usize] {
            warn!(
                field = %field,
                kept_column = first,
                ignored_column = idx,
                "duplicate column for field"
            );
        } else {
            found[field as usize] = Some(idx);
        }
    }
    let missing: Vec<String> = CanonicalField::REQUIRED
        .iter()
        .filter(|field| found[**field as usize].is_none())
        .map(|field| field.as_str().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(NutritionError::Schema { missing });
    }
    let required = |field: CanonicalField| found[field as usize].unwrap_or_default();
    Ok(ColumnMap {
        id: found[CanonicalField::Id as usize],
        gender: required(CanonicalField::Gender),
        age: required(CanonicalField::Age),
        weight: required(CanonicalField::Weight),
        height: required(CanonicalField::Height),
        muac: required(CanonicalField::Muac),
    })
}

/// A table with normalized headers and resolved canonical columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    /// Normalized headers; resolved columns carry their canonical name.
    pub headers: Vec<String>,
    /// Data rows, unchanged from the raw table.
    pub rows: Vec<Vec<String>>,
    pub columns: ColumnMap,
    /// Profile the headers were resolved against.
    pub profile: SchemaProfile,
}

impl NormalizedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build a normalized copy of `table`; the input is left untouched.
pub fn normalize_table(table: &RawTable, profile: SchemaProfile) -> Result<NormalizedTable> {
    let mut headers: Vec<String> = table
        .headers
        .iter()
        .map(|header| normalize_header(header))
        .collect();
    let columns = resolve_columns(&headers, profile)?;
    let resolved = [
        (columns.id, CanonicalField::Id),
        (Some(columns.gender), CanonicalField::Gender),
        (Some(columns.age), CanonicalField::Age),
        (Some(columns.weight), CanonicalField::Weight),
        (Some(columns.height), CanonicalField::Height),
        (Some(columns.muac), CanonicalField::Muac),
    ];
    for (idx, field) in resolved {
        if let Some(idx) = idx {
            headers[idx] = field.as_str().to_string();
        }
    }
    debug!(
        profile = %profile,
        headers = ?headers,
        has_identifier = columns.id.is_some(),
        "normalized headers"
    );
    Ok(NormalizedTable {
        headers,
        rows: table.rows.clone(),
        columns,
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| normalize_header(h)).collect()
    }

    #[test]
    fn normalize_header_collapses_and_lowercases() {
        assert_eq!(normalize_header("  Weight   (KG) "), "weight (kg)");
        assert_eq!(normalize_header("\u{feff}Name"), "name");
        assert_eq!(normalize_header("Arm_Circumference_cm"), "arm_circumference_cm");
    }

    #[test]
    fn profiles_restrict_aliases() {
        assert_eq!(
            canonical_field("weight_kg", SchemaProfile::Unified),
            Some(CanonicalField::Weight)
        );
        assert_eq!(canonical_field("weight_kg", SchemaProfile::Dashboard), None);
        assert_eq!(canonical_field("muac (cm)", SchemaProfile::Screening), None);
        assert_eq!(
            canonical_field("muac", SchemaProfile::Screening),
            Some(CanonicalField::Muac)
        );
    }

    #[test]
    fn missing_fields_are_listed_in_order() {
        let error = resolve_columns(&headers(&["Name", "Age", "Weight (kg)"]), SchemaProfile::Unified)
            .expect_err("schema error");
        match error {
            NutritionError::Schema { missing } => {
                assert_eq!(missing, vec!["gender", "height", "muac"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_duplicate_wins() {
        let map = resolve_columns(
            &headers(&["Gender", "Age", "Weight_kg", "Weight (kg)", "Height_cm", "MUAC (cm)"]),
            SchemaProfile::Unified,
        )
        .expect("columns resolve");
        assert_eq!(map.weight, 2);
        assert_eq!(map.id, None);
    }
}
