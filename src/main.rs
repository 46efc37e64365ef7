use clap::Parser;
use plantscan::utils::{logger, validation::Validate};
use plantscan::{CliConfig, GeminiClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting plantscan API server");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        model = %config.model,
        bind = %config.bind_address,
        port = config.port,
        "configuration loaded"
    );

    let model = Arc::new(GeminiClient::new(&config));

    plantscan::server::run_server(&config, model).await?;

    Ok(())
}
