//! Ingestion of student measurement tables.
//!
//! - **csv_table**: raw CSV loading into a header + rows table
//! - **normalize**: header normalization and alias resolution per schema profile
//! - **records**: typed `StudentRecord` parsing from a normalized table

pub mod csv_table;
pub mod normalize;
pub mod records;

pub use csv_table::{RawTable, read_csv_reader, read_csv_str, read_csv_table};
pub use normalize::{
    CanonicalField, ColumnMap, NormalizedTable, canonical_field, normalize_header,
    normalize_table, resolve_columns,
};
pub use records::{RecordParse, RowFailure, parse_f64, parse_records};
