//! CLI module
//!
//! Command-line interface for querying a collection.
//!
//! # Commands
//!
//! - `len` - Count the records
//! - `get` - Print one record
//! - `slice` - Print a range of records
//! - `list` - Print every record

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
