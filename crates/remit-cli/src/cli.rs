//! CLI argument definitions for the remittance generator.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "remit",
    version,
    about = "Generate X12 835 health care claim payment/advice files",
    long_about = "Generate X12 835 (005010X221A1) remittance advice files from JSON \
                  payment advice documents.\n\n\
                  Envelopes, segment counts and control numbers are computed; the \
                  payment total is always recomputed from the claims."
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

    /// Allow patient-level values (names, control numbers) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate an 835 file from a JSON payment advice.
    Generate(GenerateArgs),

    /// Write a built-in sample payment advice as JSON.
    Sample(SampleArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the payment advice JSON document.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Mark the interchange as test data (ISA15 = T).
    #[arg(long = "test")]
    pub test: bool,

    /// First control number for ISA13, GS06 and ST02.
    #[arg(long = "control-number", value_name = "N", default_value_t = 1)]
    pub control_number: u64,

    /// Fix the generation time (YYYY-MM-DDTHH:MM[:SS]); default is now.
    #[arg(long = "generated-at", value_name = "DATETIME", value_parser = parse_generated_at)]
    pub generated_at: Option<NaiveDateTime>,

    /// Interchange sender id (default: payer id).
    #[arg(long = "sender-id", value_name = "ID")]
    pub sender_id: Option<String>,

    /// Interchange receiver id (default: payee tax id).
    #[arg(long = "receiver-id", value_name = "ID")]
    pub receiver_id: Option<String>,

    /// Element separator.
    #[arg(long = "element-separator", value_name = "CHAR", default_value_t = '*')]
    pub element_separator: char,

    /// Component (sub-element) separator.
    #[arg(long = "component-separator", value_name = "CHAR", default_value_t = ':')]
    pub component_separator: char,

    /// Segment terminator.
    #[arg(long = "segment-terminator", value_name = "CHAR", default_value_t = '~')]
    pub segment_terminator: char,

    /// Write a line break after every segment terminator.
    #[arg(long = "line-breaks")]
    pub line_breaks: bool,

    /// Fail when a data value contains an active separator.
    #[arg(long = "reject-delimiters")]
    pub reject_delimiters: bool,

    /// Do not print the summary table.
    #[arg(long = "quiet-summary")]
    pub quiet_summary: bool,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Which sample to write.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: SampleKindArg,

    /// Output file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Built-in sample documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SampleKindArg {
    /// One claim with one service line.
    Simple,
    /// Two claims with three service lines each.
    Complex,
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

/// Parse `--generated-at`.
pub fn parse_generated_at(value: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y%m%d%H%M"];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM[:SS] or YYYYMMDDHHMM, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_generated_at() {
        let dt = parse_generated_at("2023-11-20T14:30").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2023, 11, 20));
        assert_eq!((dt.hour(), dt.minute()), (14, 30));

        assert_eq!(
            parse_generated_at("2023-11-20T14:30:15").unwrap().second(),
            15
        );
        assert_eq!(parse_generated_at("202311201430").unwrap(), dt);
        assert!(parse_generated_at("20231120").is_err());
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["remit", "generate", "advice.json"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.control_number, 1);
        assert_eq!(args.element_separator, '*');
        assert_eq!(args.component_separator, ':');
        assert_eq!(args.segment_terminator, '~');
        assert!(!args.test);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_sample_kind() {
        let cli = Cli::try_parse_from(["remit", "sample", "complex", "-o", "x.json"]).unwrap();
        let Command::Sample(args) = cli.command else {
            panic!("expected sample");
        };
        assert_eq!(args.kind, SampleKindArg::Complex);
        assert_eq!(args.output, Some(PathBuf::from("x.json")));
    }
}
