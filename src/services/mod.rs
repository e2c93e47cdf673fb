//! Business logic services module.

pub mod gateway;

pub use gateway::{ContractAddress, ContractGateway};
