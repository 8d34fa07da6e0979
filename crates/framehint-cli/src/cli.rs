//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// framehint - column-name completion for data-frame expressions
#[derive(Parser, Debug)]
#[command(name = "framehint")]
#[command(about = "Suggest column names for partially typed data-frame calls", long_about = None)]
#[command(version)]
pub struct Args {
    /// Texts to complete, each ending at the cursor (reads one per line from stdin if none provided)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Session file describing the data frames in scope
    #[arg(short, long, value_name = "FILE")]
    pub session: PathBuf,

    /// Complete inside a multi-line cell read from FILE (requires --cursor)
    #[arg(long, value_name = "FILE", requires = "cursor", conflicts_with = "texts")]
    pub cell: Option<PathBuf>,

    /// Byte offset of the cursor in the --cell file
    #[arg(long, value_name = "OFFSET", requires = "cell")]
    pub cursor: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,

    /// Include the resolved call site and keyword bindings in the output
    #[arg(long)]
    pub context: bool,

    /// Log pipeline decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Table,
    /// JSON output
    Json,
}
