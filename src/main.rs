// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]

//! rest-queryset CLI
//!
//! Command-line interface for querying a collection

use anyhow::Context;
use clap::Parser;
use rest_queryset::cli::{Cli, Runner};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.name();
    Runner::new(cli)
        .run()
        .await
        .with_context(|| format!("'{command}' failed"))
}
