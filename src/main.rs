//! Contract Gateway MCP Server
//!
//! Serves BallotToken and TokenizedBallot operations over MCP stdio.

use std::sync::Arc;

use rmcp::ServiceExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use contract_gateway::{Config, ContractGateway, ContractGatewayServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; stdout carries MCP traffic
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("Starting Contract Gateway MCP Server");

    // Composition root: clients and gateway are built once and shared
    let gateway = Arc::new(ContractGateway::from_config(&config)?);
    let server = ContractGatewayServer::new(gateway);

    // Run with stdio transport
    let transport = rmcp::transport::stdio();
    let running = server.serve(transport).await?;

    // Wait for the server to finish
    running.waiting().await?;

    Ok(())
}
