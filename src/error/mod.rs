//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required configuration value is absent.
    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    /// Configuration value is present but malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Signing key is malformed.
    #[error("Credential error: {0}")]
    Credential(String),

    /// Caller supplied a malformed address or hash.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport, node or response decoding failure.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// The dry-run of a state-changing call reverted.
    #[error("Simulation failed: {0}")]
    SimulationFailed(String),

    /// Returned bytes could not be interpreted as expected.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The queried transaction or receipt is unknown.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The node serves a different chain than configured.
    #[error("Chain mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Rpc(err.to_string())
    }
}

impl From<alloy::sol_types::Error> for AppError {
    fn from(err: alloy::sol_types::Error) -> Self {
        AppError::Rpc(format!("malformed contract response: {err}"))
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Credential(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidArgument(_) => McpError::invalid_params(err.to_string(), None),
            AppError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
            AppError::ConfigMissing(_) | AppError::InvalidConfig(_) => {
                McpError::invalid_request(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
