//! CSV file loading.
//!
//! The first record is the header row. Header cells are trimmed and stripped
//! of a UTF-8 BOM; data cells are trimmed, with empty cells becoming
//! [`CellValue::Missing`]. Short records are padded with `Missing` so the
//! resulting table is always rectangular; fully empty records are skipped.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use tabalign_model::{CellValue, Table};

fn clean_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Read a CSV file into a [`Table`].
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.with_context(|| format!("read header: {}", path.display()))?;
            record.iter().map(clean_header).collect()
        }
        None => Vec::new(),
    };

    let mut table = Table::new(headers);
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.column_count());
        for idx in 0..table.column_count() {
            let value = record.get(idx).unwrap_or("");
            row.push(clean_cell(value));
        }
        table
            .push_row(row)
            .with_context(|| format!("append row from {}", path.display()))?;
    }
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "csv loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_headers_and_rows() {
        let (_dir, path) = write_csv("customer id,full name\n1,Ada\n2,Bob\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.columns, vec!["customer id", "full name"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], CellValue::Text("Ada".to_string()));
    }

    #[test]
    fn strips_bom_and_pads_short_records() {
        let (_dir, path) = write_csv("\u{feff}id,name,email\n1,Ada\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.columns[0], "id");
        assert_eq!(table.rows[0][2], CellValue::Missing);
    }

    #[test]
    fn empty_cells_become_missing_and_blank_rows_are_skipped() {
        let (_dir, path) = write_csv("id,name\n1,\n,\n2,Bob\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], CellValue::Missing);
        assert_eq!(table.rows[1][0], CellValue::Text("2".to_string()));
    }

    #[test]
    fn header_only_file_yields_zero_rows() {
        let (_dir, path) = write_csv("id,name\n");
        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
    }
}
