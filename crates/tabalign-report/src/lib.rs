#![deny(unsafe_code)]

//! Writes an aligned [`Table`] back out as CSV.
//!
//! Missing cells serialize as empty fields.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use tabalign_model::Table;

/// Write `table` to `path` as CSV, header row first.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create output file: {}", path.display()))?;
    write_csv(file, table).with_context(|| format!("write csv: {}", path.display()))
}

/// Write `table` as CSV to any writer.
pub fn write_csv<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut out = WriterBuilder::new().from_writer(writer);
    out.write_record(&table.columns).context("write header")?;
    for row in &table.rows {
        out.write_record(row.iter().map(|cell| cell.as_str()))
            .context("write row")?;
    }
    out.flush().context("flush csv")?;
    Ok(())
}
