use anyhow::Context;
use clap::Parser;
use coolify_mcp::{cli::Cli, config};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let file = config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let settings = config::resolve(cli.overrides(), file)?;

    coolify_mcp::serve_stdio(&settings).await?;
    Ok(())
}
