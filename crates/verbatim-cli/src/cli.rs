//! CLI argument definitions for the testimonial classifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default location of the raw dataset.
pub const DEFAULT_INPUT: &str = "public/data.json";

/// Default location of the classified dataset.
pub const DEFAULT_OUTPUT: &str = "public/data-2.json";

#[derive(Parser)]
#[command(
    name = "verbatim",
    version,
    about = "Classify patient testimonials by disease category",
    long_about = "Classify patient testimonials by disease category.\n\n\
                  Streams a region-keyed JSON dataset, tags every positive and negative\n\
                  testimonial with a classification, and reports classification counts."
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
    /// Classify every testimonial and write an augmented copy of the dataset.
    Rewrite(RewriteArgs),

    /// Count classifications in a classified dataset.
    Analyze(AnalyzeArgs),

    /// Classify a single testimonial.
    Classify(ClassifyArgs),

    /// List the categories and their keywords.
    Categories,
}

#[derive(Parser)]
pub struct RewriteArgs {
    /// Raw dataset to read.
    #[arg(
        long = "input",
        value_name = "PATH",
        env = "VERBATIM_INPUT",
        default_value = DEFAULT_INPUT
    )]
    pub input: PathBuf,

    /// Classified dataset to write.
    #[arg(
        long = "output",
        value_name = "PATH",
        env = "VERBATIM_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: PathBuf,

    /// How non-integer numbers are written back.
    ///
    /// `number` keeps them as JSON numbers with their exact digits;
    /// `string` writes them as strings holding the same digits.
    #[arg(long = "decimals", value_enum, default_value = "number")]
    pub decimals: DecimalsArg,

    /// Log a progress line every N regions (0 disables).
    #[arg(long = "progress-every", value_name = "N", default_value_t = 500)]
    pub progress_every: usize,

    /// Hide offending values in warnings (testimonials are patient data).
    #[arg(long = "redact-previews")]
    pub redact_previews: bool,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Classified dataset to read.
    #[arg(
        long = "input",
        value_name = "PATH",
        env = "VERBATIM_CLASSIFIED",
        default_value = DEFAULT_OUTPUT
    )]
    pub input: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Hide offending values in warnings (testimonials are patient data).
    #[arg(long = "redact-previews")]
    pub redact_previews: bool,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Value of the testimonial's disease field.
    #[arg(long = "disease", value_name = "TEXT")]
    pub disease: Option<String>,

    /// Free text of the testimonial.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DecimalsArg {
    Number,
    String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    /// Plain text report.
    Text,
    /// Table report.
    Table,
    /// JSON document.
    Json,
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
