//! Table alignment CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use tabalign_cli::cli::{Cli, Command, LogFormatArg};
use tabalign_cli::commands::{run_align, run_suggest};
use tabalign_cli::logging::{LogConfig, LogFormat, init_logging};
use tabalign_cli::summary::{print_align_summary, print_mapping};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match cli.command {
        Command::Suggest(args) => match run_suggest(&args) {
            Ok(mapping) => {
                print_mapping(&mapping);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Align(args) => match run_align(&args) {
            Ok(outcome) => {
                print_align_summary(&outcome);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
        use_env_filter: !cli.verbosity.is_present(),
    }
}
