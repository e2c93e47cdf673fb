//! Common utilities for integration tests.

use std::sync::Arc;

use contract_gateway::{Config, ContractGateway, ContractGatewayServer};

/// Helper to create a test server from environment variables.
pub fn create_test_server() -> Option<ContractGatewayServer> {
    // Config::from_env loads .env itself and rejects blank values
    let mut config = Config::from_env().ok()?;
    config.log_level = "warn".to_string();

    let gateway = ContractGateway::from_config(&config).ok()?;
    Some(ContractGatewayServer::new(Arc::new(gateway)))
}

/// Skip test if server cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_server {
    () => {
        match common::create_test_server() {
            Some(server) => server,
            None => {
                eprintln!(
                    "Skipping test: RPC_ENDPOINT_URL, PRIVATE_KEY, TOKEN_ADDRESS or BALLOT_ADDRESS not set"
                );
                return;
            }
        }
    };
}
