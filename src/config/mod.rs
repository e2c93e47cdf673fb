//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use crate::{error::AppError, ethereum::constants::DEFAULT_CHAIN_ID};

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Operator private key (hex string, `0x` prefix optional).
    pub private_key: String,
    /// BallotToken contract address, kept exactly as configured.
    pub token_address: String,
    /// TokenizedBallot contract address, kept exactly as configured.
    pub ballot_address: String,
    /// Chain the operator signs for.
    pub chain_id: u64,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RPC_ENDPOINT_URL`: Ethereum JSON-RPC endpoint
    /// - `PRIVATE_KEY`: Operator private key (hex)
    /// - `TOKEN_ADDRESS`: BallotToken contract address
    /// - `BALLOT_ADDRESS`: TokenizedBallot contract address
    ///
    /// Optional environment variables:
    /// - `CHAIN_ID`: Target chain (default: Sepolia, 11155111)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let rpc_url = required("RPC_ENDPOINT_URL")?;
        let private_key = required("PRIVATE_KEY")?;
        let token_address = required("TOKEN_ADDRESS")?;
        let ballot_address = required("BALLOT_ADDRESS")?;

        let chain_id = match env::var("CHAIN_ID") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::InvalidConfig(format!("CHAIN_ID '{}' is not a number: {}", raw, e))
            })?,
            Err(_) => DEFAULT_CHAIN_ID,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { rpc_url, private_key, token_address, ballot_address, chain_id, log_level })
    }
}

/// Read a required variable, treating blank values as unset.
fn required(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigMissing(format!("{} environment variable not set", name))),
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("token_address", &self.token_address)
            .field("ballot_address", &self.ballot_address)
            .field("chain_id", &self.chain_id)
            .field("log_level", &self.log_level)
            .finish()
    }
}
