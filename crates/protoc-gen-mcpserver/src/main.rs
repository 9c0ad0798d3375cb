//! protoc-gen-mcpserver entry point.

use anyhow::Result;
use clap::Parser;
use protoc_gen_mcpserver::cli::{Cli, VERSION_LINE};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{VERSION_LINE}");
        return Ok(());
    }

    // Logs go to stderr; stdout carries the encoded response
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    protoc_gen_mcpserver::run(std::io::stdin().lock(), std::io::stdout().lock())
}
