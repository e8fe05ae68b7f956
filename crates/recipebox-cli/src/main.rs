use anyhow::Context;
use clap::Parser;

use recipebox_cli::{execute, logging, AppContext, Cli, ConfigLoader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader
        .load()
        .with_context(|| format!("loading {}", loader.config_path().display()))?;

    logging::init_logging(&config.log_level)?;
    tracing::debug!(config = ?config, "Configuration loaded");

    let context = AppContext::build(config).context("seeding demo data")?;
    let output = execute(&context.service, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
