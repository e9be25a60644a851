mod cli;
mod config;
mod error;
mod export;
mod frequency;
mod parser;
mod text;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> Result<()> {
    // Only show warnings by default, use RUST_LOG=info for more detail.
    // Logs go to stderr so stdout carries just the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    cli::report::run(cli)
}
