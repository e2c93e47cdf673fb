//! Validation of caller-supplied addresses and hashes.

use alloy::primitives::{Address, TxHash};

use crate::error::{AppError, Result};

/// Parse and validate an Ethereum address from a string.
///
/// Validates:
/// - `0x` prefix
/// - length (0x + 40 hex characters)
/// - hex digits
///
/// Mixed-case input is accepted without enforcing the EIP-55 checksum.
pub fn parse_address(s: &str) -> Result<Address> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidArgument("Address cannot be empty".into()));
    }

    if !trimmed.starts_with("0x") {
        return Err(AppError::InvalidArgument(format!("Address must start with '0x': {}", s)));
    }

    // 0x + 40 hex chars = 42 total
    if trimmed.len() != 42 {
        return Err(AppError::InvalidArgument(format!(
            "Address must be 42 characters (0x + 40 hex chars), got {}: {}",
            trimmed.len(),
            s
        )));
    }

    trimmed
        .parse::<Address>()
        .map_err(|e| AppError::InvalidArgument(format!("Invalid address format '{}': {}", s, e)))
}

/// Parse and validate a transaction hash (0x + 64 hex characters).
pub fn parse_tx_hash(s: &str) -> Result<TxHash> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidArgument("Transaction hash cannot be empty".into()));
    }

    if !trimmed.starts_with("0x") {
        return Err(AppError::InvalidArgument(format!(
            "Transaction hash must start with '0x': {}",
            s
        )));
    }

    if trimmed.len() != 66 {
        return Err(AppError::InvalidArgument(format!(
            "Transaction hash must be 66 characters (0x + 64 hex chars), got {}: {}",
            trimmed.len(),
            s
        )));
    }

    trimmed.parse::<TxHash>().map_err(|e| {
        AppError::InvalidArgument(format!("Invalid transaction hash '{}': {}", s, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    #[test]
    fn test_parse_address_valid() {
        let addr = parse_address("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
        assert_eq!(addr, address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
    }

    #[test]
    fn test_parse_address_lowercase_and_whitespace() {
        let addr = parse_address("  0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266 ").unwrap();
        assert_eq!(addr, address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
    }

    #[test]
    fn test_parse_address_rejects_garbage() {
        for bad in [
            "",
            "not-an-address",
            "f39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "0x1234",
            "0xZZZZd6e51aad88f6f4ce6ab8827279cfffb92266",
        ] {
            assert!(
                matches!(parse_address(bad), Err(AppError::InvalidArgument(_))),
                "expected InvalidArgument for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_tx_hash_valid() {
        let hash = parse_tx_hash(
            "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
        )
        .unwrap();
        assert_eq!(hash, b256!("88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"));
    }

    #[test]
    fn test_parse_tx_hash_rejects_address_sized_input() {
        let result = parse_tx_hash("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_tx_hash_rejects_bad_hex() {
        let result = parse_tx_hash(
            "0xgg5f016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
        );
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }
}
