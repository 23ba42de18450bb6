//! Promptweave CLI
//!
//! Compile and render prompt templates from the command line.
//!
//! ```bash
//! promptweave render --config prompt.toml --memory memory.json
//! promptweave render --config prompt.yaml --set temp.input="hello" --text
//! promptweave compile --template "Hi {{\$name}} {{date.now}}"
//! promptweave functions
//! ```
//!
//! Set RUST_LOG=debug for verbose logging.

mod args;
mod commands;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with environment-based filtering
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::run(cli).await
}
