//! Ethereum interaction module.
//!
//! Contains the RPC clients, the operator wallet, and contract bindings.

pub mod client;
pub mod constants;
pub mod contracts;
pub mod wallet;

pub use client::{ChainReader, EthereumClient, TransactionSender, WalletClient};
pub use wallet::WalletManager;
