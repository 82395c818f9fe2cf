#![deny(unsafe_code)]

//! Projection of a content table into a reference schema.
//!
//! The reference schema supplies column names and order only; every output
//! value comes from the content table or is a missing-value placeholder.

use tabalign_model::{CellValue, ColumnMapping, Table};
use tracing::debug;

/// Re-materializes `content` in the reference schema's exact column order.
///
/// For each reference column, the mapped content column is copied value for
/// value. A reference column whose mapping entry is absent, or whose mapped
/// column no longer exists in `content` (a stale mapping), is filled with
/// [`CellValue::Missing`] for every row. The output is rectangular, aligned
/// row for row with the content table; zero content rows project to zero
/// output rows.
pub fn project(
    reference_columns: &[String],
    content: &Table,
    mapping: &ColumnMapping,
) -> Table {
    let row_count = content.row_count();

    // Source index per output column; None means fill with Missing.
    let source_indices: Vec<Option<usize>> = reference_columns
        .iter()
        .map(|reference| {
            let source = mapping.source_for(reference);
            let index = source.and_then(|name| content.column_index(name));
            if let Some(name) = source
                && index.is_none()
            {
                debug!(
                    reference_column = %reference,
                    source_column = %name,
                    "mapped column absent from content table, filling with missing"
                );
            }
            index
        })
        .collect();

    let mut output = Table::new(reference_columns.to_vec());
    for row in &content.rows {
        let projected: Vec<CellValue> = source_indices
            .iter()
            .map(|index| match index {
                Some(idx) => row[*idx].clone(),
                None => CellValue::Missing,
            })
            .collect();
        // Width matches the schema by construction.
        output.rows.push(projected);
    }
    debug_assert_eq!(output.row_count(), row_count);
    output
}
