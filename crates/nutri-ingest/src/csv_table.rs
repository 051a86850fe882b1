use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use nutri_model::{NutritionError, Result};

/// A table exactly as read from the source: first non-blank row as headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header cells as written, trimmed.
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` cells wide.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file from disk.
///
/// # Errors
///
/// Returns `Io` when the file cannot be opened and `Csv` when it is not
/// valid CSV.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path)?;
    let table = read_csv_reader(file)
        .map_err(|error| NutritionError::Csv(format!("{}: {error}", path.display())))?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

/// Read CSV held in memory.
pub fn read_csv_str(text: &str) -> Result<RawTable> {
    read_csv_reader(text.as_bytes()).map_err(|error| NutritionError::Csv(error.to_string()))
}

/// Read CSV from any reader. Blank lines are skipped, cells are trimmed and
/// rows are padded or cut to the header width.
pub fn read_csv_reader<R: Read>(reader: R) -> std::result::Result<RawTable, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    let mut raw_rows = raw_rows.into_iter();
    let Some(headers) = raw_rows.next() else {
        return Ok(RawTable::default());
    };
    let width = headers.len();
    let rows = raw_rows
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();
    Ok(RawTable { headers, rows })
}
