//! Operator signing identity.

use alloy::{
    network::{EthereumWallet, TxSigner},
    primitives::Address,
    signers::{local::PrivateKeySigner, Signature},
};

use crate::error::{AppError, Result};

/// Signing identity used by the write client.
///
/// Any [`TxSigner`] can back it, so the key may live in memory, a keystore or
/// a remote signer without the gateway noticing.
#[derive(Clone)]
pub struct WalletManager {
    /// Network wallet handed to the provider's signing filler.
    wallet: EthereumWallet,
    /// Wallet address.
    address: Address,
}

impl WalletManager {
    /// Create a wallet manager from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let key = private_key.trim();
        // Remove 0x prefix if present
        let key = key.strip_prefix("0x").unwrap_or(key);

        if key.is_empty() {
            return Err(AppError::Credential("private key is empty".into()));
        }

        let signer: PrivateKeySigner = key.parse()?;

        Ok(Self::from_signer(signer))
    }

    /// Create a wallet manager from any transaction signer.
    pub fn from_signer<S>(signer: S) -> Self
    where
        S: TxSigner<Signature> + Send + Sync + 'static,
    {
        let address = signer.address();
        let wallet = EthereumWallet::new(signer);

        tracing::info!(address = %address, "Wallet initialized");

        Self { wallet, address }
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the network wallet for transaction signing.
    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::network::NetworkWallet;
    use alloy::network::Ethereum;

    // Well-known Hardhat/Foundry test key (DO NOT use in production!)
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_PRIVATE_KEY_NO_PREFIX: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn test_wallet_from_private_key_without_prefix() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY_NO_PREFIX).unwrap();
        let addr_str = format!("{:?}", wallet.address()).to_lowercase();
        assert_eq!(addr_str, TEST_ADDRESS);
    }

    #[test]
    fn test_wallet_from_private_key_with_prefix() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let addr_str = format!("{:?}", wallet.address()).to_lowercase();
        assert_eq!(addr_str, TEST_ADDRESS);
    }

    #[test]
    fn test_wallet_invalid_private_key() {
        for bad in ["0x1234", "0xZZZZ", "", "   ", "0x"] {
            match WalletManager::from_private_key(bad) {
                Err(AppError::Credential(msg)) => assert!(!msg.is_empty()),
                other => panic!("Expected Credential error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_wallet_from_signer() {
        let signer: PrivateKeySigner = TEST_PRIVATE_KEY_NO_PREFIX.parse().unwrap();
        let expected = signer.address();

        let wallet = WalletManager::from_signer(signer);

        assert_eq!(wallet.address(), expected);
        assert_eq!(
            NetworkWallet::<Ethereum>::default_signer_address(wallet.wallet()),
            expected
        );
    }

    #[test]
    fn test_wallet_debug_hides_key() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let debug_str = format!("{:?}", wallet);

        assert!(debug_str.contains("WalletManager"));
        assert!(debug_str.contains("address"));
        assert!(!debug_str.contains(TEST_PRIVATE_KEY_NO_PREFIX));
    }

    #[test]
    fn test_wallet_different_keys_different_addresses() {
        // Second Hardhat test account
        let key2 = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

        let wallet1 = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let wallet2 = WalletManager::from_private_key(key2).unwrap();

        assert_ne!(wallet1.address(), wallet2.address());
    }
}
