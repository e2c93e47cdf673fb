//! Ethereum network and contract constants.

use alloy::primitives::{b256, B256, U256};

// ============================================================================
// Chain IDs
// ============================================================================

/// Sepolia testnet chain ID.
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// Default chain ID (Sepolia, where the ballot contracts are deployed).
pub const DEFAULT_CHAIN_ID: u64 = SEPOLIA_CHAIN_ID;

// ============================================================================
// BallotToken
// ============================================================================

/// Decimals of the BallotToken.
pub const TOKEN_DECIMALS: u8 = 18;

/// AccessControl role identifier allowed to mint, `keccak256("MINTER_ROLE")`.
pub const MINTER_ROLE: B256 =
    b256!("9f2df0fed2c77648de5860a4cc508cd0818c85b8b8a1ab4ceeef8d981c8956a6");

/// Base units minted per `mint_tokens` call: one whole token.
pub const MINT_AMOUNT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);
