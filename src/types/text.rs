//! Decoding of fixed-size on-chain text.

use alloy::primitives::B256;

use crate::error::{AppError, Result};

/// Decode a `bytes32` string as UTF-8.
///
/// Solidity right-pads short strings with NUL bytes; the padding is removed.
/// Invalid UTF-8 is an error rather than lossy output.
pub fn bytes32_to_string(value: B256) -> Result<String> {
    let bytes = value.as_slice();
    let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);

    std::str::from_utf8(&bytes[..end])
        .map(str::to_owned)
        .map_err(|e| AppError::Decode(format!("bytes32 value {} is not valid UTF-8: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(text: &[u8]) -> B256 {
        B256::right_padding_from(text)
    }

    #[test]
    fn test_bytes32_to_string_strips_padding() {
        assert_eq!(bytes32_to_string(padded(b"Alice")).unwrap(), "Alice");
    }

    #[test]
    fn test_bytes32_to_string_full_width() {
        let text = b"abcdefghijklmnopqrstuvwxyz012345";
        assert_eq!(bytes32_to_string(padded(text)).unwrap(), "abcdefghijklmnopqrstuvwxyz012345");
    }

    #[test]
    fn test_bytes32_to_string_zero_is_empty() {
        assert_eq!(bytes32_to_string(B256::ZERO).unwrap(), "");
    }

    #[test]
    fn test_bytes32_to_string_multibyte() {
        let text = "Zoë ✓".as_bytes();
        assert_eq!(bytes32_to_string(padded(text)).unwrap(), "Zoë ✓");
    }

    #[test]
    fn test_bytes32_to_string_invalid_utf8() {
        let result = bytes32_to_string(padded(&[0xff, 0xfe, 0x41]));
        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
