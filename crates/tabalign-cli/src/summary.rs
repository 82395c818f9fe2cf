//! Review rendering for suggested mappings and run summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabalign_model::ColumnMapping;

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Print the suggested mapping, one row per reference column, in
/// reference-schema order.
pub fn print_mapping(mapping: &ColumnMapping) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Reference Column"),
        header_cell("Source Column"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for entry in mapping.iter() {
        let (source, score) = match (&entry.source_column, entry.confidence) {
            (Some(source), Some(confidence)) => {
                let color = if confidence >= 1.0 {
                    Color::Green
                } else {
                    Color::Yellow
                };
                (
                    Cell::new(source),
                    Cell::new(format!("{confidence:.2}")).fg(color),
                )
            }
            (Some(source), None) => (Cell::new(source), Cell::new("manual").fg(Color::Green)),
            (None, _) => (
                Cell::new("(unmatched)").fg(Color::Red),
                Cell::new("-").fg(Color::DarkGrey),
            ),
        };
        table.add_row(vec![Cell::new(&entry.reference_column), source, score]);
    }
    println!("{table}");
    println!(
        "{} of {} reference columns matched, {} unmatched",
        mapping.matched_count(),
        mapping.len(),
        mapping.unmatched_count()
    );
}

/// Print the outcome of an `align` run.
pub fn print_align_summary(outcome: &crate::commands::AlignOutcome) {
    println!(
        "Aligned {} rows into {} columns ({} matched, {} filled with missing values)",
        outcome.rows, outcome.columns, outcome.matched, outcome.unmatched
    );
    println!("Output: {}", outcome.output.display());
}
