use dotenv::dotenv;
use etherscan_mcp::{config, etherscan, server, tools};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Etherscan MCP Server...");

    let config = config::Config::from_env()?;
    let client = Arc::new(etherscan::EtherscanClient::new(&config)?);

    let mut registry = tools::ToolRegistry::new();
    tools::etherscan::register_etherscan_tools(&mut registry, client)?;

    server::run(registry).await?;

    Ok(())
}
