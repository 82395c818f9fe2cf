//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tabalign_ingest::read_csv_table;
use tabalign_map::MappingEngine;
use tabalign_map::repository::{load_mapping, save_mapping};
use tabalign_model::{ColumnMapping, Table};
use tabalign_report::write_csv_table;
use tabalign_transform::project;

use crate::cli::{AlignArgs, SuggestArgs};

/// Outcome of an `align` run, for the summary printer.
#[derive(Debug, Clone)]
pub struct AlignOutcome {
    pub rows: usize,
    pub columns: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub output: PathBuf,
}

fn load_inputs(reference: &Path, content: &Path) -> Result<(Table, Table)> {
    let reference = read_csv_table(reference).context("load reference table")?;
    let content = read_csv_table(content).context("load content table")?;
    info!(
        reference_columns = reference.column_count(),
        content_columns = content.column_count(),
        content_rows = content.row_count(),
        "inputs loaded"
    );
    Ok((reference, content))
}

pub fn run_suggest(args: &SuggestArgs) -> Result<ColumnMapping> {
    let span = info_span!("suggest", cutoff = args.cutoff);
    let _guard = span.enter();
    let start = Instant::now();

    let (reference, content) = load_inputs(&args.reference, &args.content)?;
    let engine = MappingEngine::new(args.cutoff)?;
    let mapping = engine.suggest(&reference.columns, &content.columns);
    info!(
        matched = mapping.matched_count(),
        unmatched = mapping.unmatched_count(),
        duration_ms = start.elapsed().as_millis(),
        "suggestion complete"
    );

    if let Some(path) = &args.mapping_out {
        save_mapping(path, &mapping)?;
        info!(path = %path.display(), "mapping written");
    }
    Ok(mapping)
}

pub fn run_align(args: &AlignArgs) -> Result<AlignOutcome> {
    let span = info_span!("align", cutoff = args.cutoff);
    let _guard = span.enter();
    let start = Instant::now();

    let (reference, content) = load_inputs(&args.reference, &args.content)?;

    // A reviewer-edited mapping replaces the suggestion wholesale; it is
    // re-totalized so the projector sees one entry per reference column.
    let mapping = match &args.mapping {
        Some(path) => {
            let edited = load_mapping(path)?;
            edited.totalized_over(&reference.columns)
        }
        None => {
            let engine = MappingEngine::new(args.cutoff)?;
            engine.suggest(&reference.columns, &content.columns)
        }
    };

    let output = project(&reference.columns, &content, &mapping);
    write_csv_table(&args.output, &output)?;
    info!(
        rows = output.row_count(),
        columns = output.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "alignment complete"
    );

    Ok(AlignOutcome {
        rows: output.row_count(),
        columns: output.column_count(),
        matched: mapping.matched_count(),
        unmatched: mapping.unmatched_count(),
        output: args.output.clone(),
    })
}
