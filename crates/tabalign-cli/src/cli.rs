//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabalign",
    version,
    about = "Align a content table's columns to a reference table's schema",
    long_about = "Align a content CSV to the exact column order of a reference CSV.\n\n\
                  Column names are paired by normalized-name matching with a\n\
                  configurable similarity threshold; the suggested mapping can be\n\
                  exported, hand-edited, and fed back in before projection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Suggest a column mapping and print it for review.
    Suggest(SuggestArgs),

    /// Project the content table into the reference schema and write CSV.
    Align(AlignArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Reference CSV supplying the target column schema.
    #[arg(value_name = "REFERENCE_CSV")]
    pub reference: PathBuf,

    /// Content CSV supplying the data to align.
    #[arg(value_name = "CONTENT_CSV")]
    pub content: PathBuf,

    /// Similarity threshold in [0.0, 1.0]; lower accepts weaker matches.
    #[arg(long = "cutoff", default_value_t = 0.6)]
    pub cutoff: f64,

    /// Write the suggested mapping to a JSON file for hand editing.
    #[arg(long = "mapping-out", value_name = "PATH")]
    pub mapping_out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AlignArgs {
    /// Reference CSV supplying the target column schema.
    #[arg(value_name = "REFERENCE_CSV")]
    pub reference: PathBuf,

    /// Content CSV supplying the data to align.
    #[arg(value_name = "CONTENT_CSV")]
    pub content: PathBuf,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH", default_value = "outputdata.csv")]
    pub output: PathBuf,

    /// Similarity threshold in [0.0, 1.0]; lower accepts weaker matches.
    #[arg(long = "cutoff", default_value_t = 0.6)]
    pub cutoff: f64,

    /// Use a hand-edited mapping JSON instead of a fresh suggestion.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
