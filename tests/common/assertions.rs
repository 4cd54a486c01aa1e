//! Helpers for inspecting exported CSV files

use std::path::Path;

/// Parsed CSV file
#[derive(Debug)]
pub struct CsvContents {
    /// Header row
    pub headers: Vec<String>,
    /// Data rows as raw field text
    pub rows: Vec<Vec<String>>,
}

impl CsvContents {
    /// All values of one column
    pub fn column(&self, name: &str) -> Vec<&str> {
        let index = self
            .headers
            .iter()
            .position(|h| h == name)
            .unwrap_or_else(|| panic!("column {} not in {:?}", name, self.headers));
        self.rows.iter().map(|row| row[index].as_str()).collect()
    }
}

/// Read back a CSV file written by the exporter
pub fn read_csv(path: &Path) -> CsvContents {
    let mut reader = csv::Reader::from_path(path).expect("failed to open CSV");
    let headers = reader
        .headers()
        .expect("failed to read CSV header")
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("failed to read CSV record")
                .iter()
                .map(String::from)
                .collect()
        })
        .collect();
    CsvContents { headers, rows }
}
