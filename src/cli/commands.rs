//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query a REST collection lazily, one page at a time
#[derive(Parser, Debug)]
#[command(name = "rest-queryset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection definition file (YAML)
    #[arg(short, long, global = true)]
    pub collection: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the number of records (fetches every page)
    Len,

    /// Print the record at an index
    Get {
        /// Zero-based record index
        index: usize,
    },

    /// Print the records in [start, stop)
    Slice {
        /// First index, inclusive
        start: usize,

        /// Last index, exclusive
        stop: usize,
    },

    /// Print every record
    List,
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Len => "len",
            Commands::Get { .. } => "get",
            Commands::Slice { .. } => "slice",
            Commands::List => "list",
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
