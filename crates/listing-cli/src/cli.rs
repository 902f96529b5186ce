//! CLI argument definitions for the listing preprocessor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use listing_cli::types::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "listing-prep",
    version,
    about = "Preprocess rental listing exports into a numeric feature table",
    long_about = "Preprocess a rental listings CSV export into a numeric feature table.\n\n\
                  Renames the columns, removes duplicates and missing values, encodes\n\
                  categorical columns and scales review and availability counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the preprocessing pipeline and write the processed table.
    Run(RunArgs),

    /// Print the expected input schema and what happens to each column.
    Schema,

    /// Load a file and report column types and missing values.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Raw listings CSV export.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination of the processed CSV.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write the fitted encoders and scale factors as JSON.
    #[arg(long = "artifacts", value_name = "PATH")]
    pub artifacts: Option<PathBuf>,

    /// Continue with the original column names when the column count does
    /// not match the listing schema.
    ///
    /// By default a mismatch aborts the run.
    #[arg(long = "lenient-schema")]
    pub lenient_schema: bool,

    /// Warn when one-hot encoding generates more than N columns.
    #[arg(long = "one-hot-warning", value_name = "N", default_value_t = 64)]
    pub one_hot_warning: usize,

    /// Field separator of the input file.
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV file to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field separator of the input file.
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,
}

/// Accepts a single ASCII character, or `tab` / `\t` for a tab.
fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' => Ok(*byte),
            _ => Err(format!("expected a single ASCII character, got '{value}'")),
        },
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::parse_from(["listing-prep", "run"]);
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(args.artifacts.is_none());
        assert!(!args.lenient_schema);
        assert_eq!(args.one_hot_warning, 64);
        assert_eq!(args.delimiter, b',');
    }

    #[test]
    fn test_delimiter_values() {
        let cli = Cli::parse_from([
            "listing-prep",
            "inspect",
            "listings.tsv",
            "--delimiter",
            "tab",
        ]);
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(args.delimiter, b'\t');

        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("\"").is_err());
        assert!(Cli::try_parse_from(["listing-prep", "run", "--delimiter", "é"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "listing-prep",
            "inspect",
            "listings.csv",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ]);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
        assert!(matches!(cli.command, Command::Inspect(_)));
    }
}
