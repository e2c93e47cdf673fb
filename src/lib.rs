//! Contract Gateway Library
//!
//! Server-side façade over a BallotToken (ERC-20 with AccessControl) and a
//! TokenizedBallot contract, reached through an Ethereum JSON-RPC endpoint.
//!
//! # Features
//!
//! - **Token Reads**: name, total supply and balances, losslessly as decimal strings
//! - **Role Checks**: `MINTER_ROLE` membership on the token
//! - **Minting**: simulate-then-submit mint of one token from the server wallet
//! - **Ballot Reads**: winning proposal name
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use contract_gateway::{Config, ContractGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let gateway = Arc::new(ContractGateway::from_config(&config)?);
//!     println!("{}", gateway.token_name().await?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod mcp;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::constants::*;
pub use mcp::ContractGatewayServer;
pub use services::ContractGateway;
