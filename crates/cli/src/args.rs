// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};

use crate::{options::CliOutputFormat, parsers};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "invalid_ids",
    version = crate::VERSION,
    about = "Sum every repeated-digit identifier (55, 6464, 123123) inside comma-separated ranges",
    long_about = None
)]
pub struct Args {
    /// File holding `lower-upper,lower-upper,...` ranges ("-" or omitted reads stdin)
    #[arg(value_hint = ValueHint::FilePath, conflicts_with = "ranges")]
    pub input: Option<PathBuf>,

    /// Ranges given inline instead of a file, e.g. "11-22,95-115"
    #[arg(long, short = 'r', help_heading = "Input")]
    pub ranges: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

/// Output-related options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "plain", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Include one entry per range with its windows and partial sum
    #[arg(long, help_heading = "Output")]
    pub breakdown: bool,
}

/// Execution-related options
#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct BehaviorOptions {
    /// Skip malformed segments with a warning instead of aborting
    #[arg(long, help_heading = "Behavior")]
    pub lenient: bool,

    /// Worker threads (default: number of CPUs)
    #[arg(long, short = 'j', value_parser = parsers::parse_usize_1_to_512, help_heading = "Behavior")]
    pub jobs: Option<usize>,

    /// Cross-check every range against a linear scan
    #[arg(long, help_heading = "Behavior")]
    pub verify: bool,

    /// Largest range span the --verify scan will walk
    #[arg(long, requires = "verify", value_parser = parsers::parse_positive_u64, help_heading = "Behavior")]
    pub verify_limit: Option<u64>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}
