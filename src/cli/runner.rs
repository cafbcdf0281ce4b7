//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_collection, CollectionConfig};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::record::JsonRecords;
use crate::sequence::LazyResultSequence;
use crate::types::JsonValue;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let collection = self.load_collection()?;
        let sequence = Self::build_sequence(&collection)?;

        let started = Instant::now();
        let output = Self::execute(&self.cli.command, &sequence).await?;
        let stats = sequence.stats().await;
        info!(
            "{}: {} pages, {} records fetched in {:?}",
            collection.name,
            stats.pages_fetched,
            stats.records_fetched,
            started.elapsed()
        );

        for value in &output {
            println!("{}", self.render(value)?);
        }
        Ok(())
    }

    /// Load the collection definition
    fn load_collection(&self) -> Result<CollectionConfig> {
        let path = self
            .cli
            .collection
            .as_ref()
            .ok_or_else(|| Error::config("Collection file not specified (use -c flag)"))?;
        load_collection(path)
    }

    /// Sequence over the collection, reached through the HTTP client
    pub fn build_sequence(collection: &CollectionConfig) -> Result<LazyResultSequence<JsonRecords>> {
        let client = HttpClient::with_config(collection.http.client_config())?;
        Ok(LazyResultSequence::json(
            collection.descriptor()?,
            Arc::new(client),
        ))
    }

    /// Evaluate a command against a sequence, returning the values to print
    pub async fn execute(
        command: &Commands,
        sequence: &LazyResultSequence<JsonRecords>,
    ) -> Result<Vec<JsonValue>> {
        match command {
            Commands::Len => Ok(vec![json!(sequence.len().await?)]),
            Commands::Get { index } => Ok(vec![sequence.get(*index).await?]),
            Commands::Slice { start, stop } => sequence.slice(*start, *stop).await,
            Commands::List => Ok(sequence.iterate().await?.collect()),
        }
    }

    /// Format one value for stdout
    fn render(&self, value: &JsonValue) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(rendered)
    }
}
