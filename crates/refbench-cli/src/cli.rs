//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// refbench - Grade refactoring detectors against an oracle.
#[derive(Debug, Parser)]
#[command(name = "refbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REFBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Plain text report
    Text,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Grade every group listed in a manifest
    Compare(CompareArgs),

    /// Print the canonical form of entity signatures
    Normalize(NormalizeArgs),

    /// Re-encode a detector result file as relationship lines
    Convert(ConvertArgs),
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Manifest file (TOML)
    pub manifest: PathBuf,

    /// Category abbreviations to grade (e.g. MM,RC); all when omitted
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Also print the per-relationship labels
    #[arg(short, long)]
    pub details: bool,
}

/// Arguments for the normalize command.
#[derive(Debug, Parser)]
pub struct NormalizeArgs {
    /// Signatures to normalize
    #[arg(required = true)]
    pub signatures: Vec<String>,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Result file to read
    pub input: PathBuf,

    /// Format of the input (lines, tuple, marker, description)
    #[arg(short = 'i', long = "input-format")]
    pub input_format: String,

    /// Project clone URL
    #[arg(short, long)]
    pub project: String,

    /// Revision identifier
    #[arg(short, long)]
    pub revision: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Text => crate::config::OutputFormat::Text,
        }
    }
}
