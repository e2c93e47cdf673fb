//! Token-related response types.

use alloy::primitives::{Address, TxHash, B256, U256};
use serde::{Deserialize, Serialize};

use crate::ethereum::constants::TOKEN_DECIMALS;

/// A token quantity in both raw and human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    /// Human-readable amount with the token's decimals applied.
    pub formatted: String,
    /// Exact amount in base units as a decimal string.
    pub raw: String,
}

impl TokenAmount {
    /// Describe a BallotToken base-unit quantity.
    pub fn from_base_units(value: U256) -> Self {
        Self { formatted: format_units(value, TOKEN_DECIMALS), raw: value.to_string() }
    }
}

/// Balance of one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceInfo {
    /// Account address.
    pub address: String,
    /// Token balance.
    pub balance: TokenAmount,
}

/// Result of an AccessControl membership query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCheck {
    /// Queried account.
    pub address: String,
    /// Role identifier (bytes32 hex).
    pub role: String,
    /// Whether the account holds the role.
    pub has_role: bool,
}

impl RoleCheck {
    /// Build a role check result.
    pub fn new(address: Address, role: B256, has_role: bool) -> Self {
        Self { address: address.to_string(), role: role.to_string(), has_role }
    }
}

/// A submitted mint transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintReceipt {
    /// Recipient of the minted tokens.
    pub recipient: String,
    /// Minted amount.
    pub amount: TokenAmount,
    /// Hash of the broadcast transaction.
    pub transaction_hash: String,
}

impl MintReceipt {
    /// Build a mint result.
    pub fn new(recipient: Address, amount: U256, hash: TxHash) -> Self {
        Self {
            recipient: recipient.to_string(),
            amount: TokenAmount::from_base_units(amount),
            transaction_hash: hash.to_string(),
        }
    }
}

/// Format a U256 value with decimals to a human-readable string.
pub fn format_units(value: U256, decimals: u8) -> String {
    let value_str = value.to_string();
    let decimals = decimals as usize;

    if value.is_zero() || decimals == 0 {
        return value_str;
    }

    // Left-pad so there is always at least one integer digit
    let padded = if value_str.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - value_str.len()), value_str)
    } else {
        value_str
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}
