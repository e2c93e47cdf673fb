//! Ethereum RPC clients.
//!
//! [`EthereumClient`] serves every read. [`WalletClient`] shares its transport
//! and adds the operator's signing identity for state-changing calls.

use alloy::{
    network::Ethereum,
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder, RootProvider},
    rpc::{
        json_rpc::ErrorPayload,
        types::{TransactionReceipt, TransactionRequest},
    },
    sol_types::{decode_revert_reason, SolError},
    transports::http::reqwest::Url,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::{
    error::{AppError, Result},
    ethereum::{contracts::IBallotToken, WalletManager},
};

type HttpProvider = RootProvider<Ethereum>;

/// Non-mutating chain access used by the gateway.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Execute an `eth_call` and return the raw return data.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes>;

    /// Dry-run a transaction.
    ///
    /// A node-reported revert yields [`AppError::SimulationFailed`]; transport
    /// and other node failures yield [`AppError::Rpc`].
    async fn simulate(&self, tx: TransactionRequest) -> Result<()>;

    /// Fetch a receipt, `None` if the transaction is unknown or not yet mined.
    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>>;

    /// Chain id reported by the node.
    async fn chain_id(&self) -> Result<u64>;
}

/// Signs and broadcasts transactions for a single identity.
#[async_trait]
pub trait TransactionSender: Send + Sync {
    /// Address of the signing identity.
    fn address(&self) -> Address;

    /// Sign and broadcast, returning the transaction hash.
    async fn send(&self, tx: TransactionRequest) -> Result<TxHash>;
}

/// Parse and validate an RPC endpoint URL.
pub fn parse_rpc_url(rpc_url: &str) -> Result<Url> {
    let trimmed = rpc_url.trim();
    if trimmed.is_empty() {
        return Err(AppError::ConfigMissing("RPC endpoint URL is empty".into()));
    }

    let url: Url = trimmed
        .parse()
        .map_err(|e| AppError::InvalidConfig(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::InvalidConfig(format!(
            "Unsupported RPC URL scheme '{}': {}",
            scheme, rpc_url
        ))),
    }
}

/// Read-only Ethereum RPC client with lazy chain id lookup.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// RPC URL for logging.
    rpc_url: String,
    /// Lazily fetched chain ID.
    chain_id: Arc<OnceCell<u64>>,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Fails immediately on a missing or malformed URL, but does NOT make any
    /// network calls.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = parse_rpc_url(rpc_url)?;

        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!(rpc_url = %rpc_url, "Ethereum client created (lazy initialization)");

        Ok(Self::with_provider(provider, rpc_url))
    }

    fn with_provider(provider: HttpProvider, rpc_url: &str) -> Self {
        Self {
            provider: Arc::new(provider),
            rpc_url: rpc_url.to_string(),
            chain_id: Arc::new(OnceCell::new()),
        }
    }

    fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}

#[async_trait]
impl ChainReader for EthereumClient {
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes> {
        let result = self.provider.call(tx).await?;
        Ok(result)
    }

    async fn simulate(&self, tx: TransactionRequest) -> Result<()> {
        match self.provider.call(tx).await {
            Ok(_) => Ok(()),
            Err(err) => match err.as_error_resp() {
                Some(payload) if is_revert(payload) => {
                    Err(AppError::SimulationFailed(revert_reason(payload)))
                }
                _ => Err(AppError::Rpc(err.to_string())),
            },
        }
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>> {
        let receipt = self.provider.get_transaction_receipt(hash).await?;
        Ok(receipt)
    }

    async fn chain_id(&self) -> Result<u64> {
        self.chain_id
            .get_or_try_init(|| async {
                let chain_id = self.provider.get_chain_id().await?;
                tracing::info!(chain_id = chain_id, rpc_url = %self.rpc_url, "Connected to Ethereum node");
                Ok(chain_id)
            })
            .await
            .copied()
    }
}

impl std::fmt::Debug for EthereumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumClient").field("rpc_url", &self.rpc_url).finish()
    }
}

/// Signing client sharing the read client's transport.
#[derive(Clone)]
pub struct WalletClient {
    provider: DynProvider<Ethereum>,
    address: Address,
}

impl WalletClient {
    /// Wrap the read client's transport with nonce, gas and signing fillers.
    pub fn new(client: &EthereumClient, wallet: &WalletManager) -> Self {
        let provider = ProviderBuilder::new()
            .wallet(wallet.wallet().clone())
            .connect_provider(client.provider().clone())
            .erased();

        Self { provider, address: wallet.address() }
    }
}

#[async_trait]
impl TransactionSender for WalletClient {
    fn address(&self) -> Address {
        self.address
    }

    async fn send(&self, tx: TransactionRequest) -> Result<TxHash> {
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }
}

impl std::fmt::Debug for WalletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletClient").field("address", &self.address).finish()
    }
}

/// Whether an error response reports an EVM revert rather than a node failure.
///
/// Geth-style nodes use code 3 for reverts carrying data; others only say so
/// in the message.
fn is_revert(payload: &ErrorPayload) -> bool {
    payload.code == 3
        || payload.as_revert_data().is_some()
        || payload.message.to_lowercase().contains("execution reverted")
}

/// Best available description of a node-reported revert.
///
/// Tries the token's AccessControl error, then `Error(string)` and
/// `Panic(uint256)`, then falls back to the node's message.
pub fn revert_reason(payload: &ErrorPayload) -> String {
    let Some(data) = payload.as_revert_data() else {
        return payload.message.to_string();
    };

    if let Ok(err) = IBallotToken::AccessControlUnauthorizedAccount::abi_decode(&data) {
        return format!("account {} is missing role {}", err.account, err.neededRole);
    }

    if let Some(reason) = decode_revert_reason(&data) {
        return reason;
    }

    format!("{} (data: {})", payload.message, data)
}
