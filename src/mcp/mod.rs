//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::ContractGatewayServer;
pub use server::{AddressInput, TransactionHashInput};
