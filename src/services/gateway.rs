//! Contract gateway service.
//!
//! Reads BallotToken and TokenizedBallot state and mints BallotToken through
//! a simulate-then-submit sequence.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash},
    rpc::types::{TransactionReceipt, TransactionRequest},
    sol_types::SolCall,
};
use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, Result},
    ethereum::{
        constants::{MINTER_ROLE, MINT_AMOUNT},
        contracts::{IBallotToken, ITokenizedBallot},
        ChainReader, EthereumClient, TransactionSender, WalletClient, WalletManager,
    },
    types::{bytes32_to_string, parse_address, parse_tx_hash, TokenAmount},
};

/// A configured contract address.
#[derive(Debug, Clone)]
pub struct ContractAddress {
    /// The value exactly as configured.
    configured: String,
    /// Parsed address used for calls.
    address: Address,
}

impl ContractAddress {
    /// Validate a configured address. `name` identifies the setting in errors.
    pub fn parse(name: &str, configured: &str) -> Result<Self> {
        if configured.trim().is_empty() {
            return Err(AppError::ConfigMissing(format!("{} is not set", name)));
        }

        let address = parse_address(configured)
            .map_err(|e| AppError::InvalidConfig(format!("{}: {}", name, e)))?;

        Ok(Self { configured: configured.to_string(), address })
    }

    /// The configured string, unmodified.
    pub fn as_str(&self) -> &str {
        &self.configured
    }
}

/// Read/write façade over the BallotToken and TokenizedBallot contracts.
#[derive(Clone)]
pub struct ContractGateway {
    reader: Arc<dyn ChainReader>,
    sender: Arc<dyn TransactionSender>,
    token: ContractAddress,
    ballot: ContractAddress,
    chain_id: u64,
}

impl ContractGateway {
    /// Build the gateway and its clients from configuration.
    ///
    /// Every configuration value is validated here. No network call is made.
    pub fn from_config(config: &Config) -> Result<Self> {
        let wallet = WalletManager::from_private_key(&config.private_key)?;
        let client = EthereumClient::new(&config.rpc_url)?;
        let writer = WalletClient::new(&client, &wallet);

        Self::new(
            Arc::new(client),
            Arc::new(writer),
            &config.token_address,
            &config.ballot_address,
            config.chain_id,
        )
    }

    /// Build the gateway over existing clients.
    pub fn new(
        reader: Arc<dyn ChainReader>,
        sender: Arc<dyn TransactionSender>,
        token_address: &str,
        ballot_address: &str,
        chain_id: u64,
    ) -> Result<Self> {
        let token = ContractAddress::parse("TOKEN_ADDRESS", token_address)?;
        let ballot = ContractAddress::parse("BALLOT_ADDRESS", ballot_address)?;

        tracing::info!(
            token = %token.address,
            ballot = %ballot.address,
            operator = %sender.address(),
            chain_id = chain_id,
            "Contract gateway initialized"
        );

        Ok(Self { reader, sender, token, ballot, chain_id })
    }

    /// Configured BallotToken address, verbatim.
    pub fn token_contract_address(&self) -> &str {
        self.token.as_str()
    }

    /// Configured TokenizedBallot address, verbatim.
    pub fn ballot_contract_address(&self) -> &str {
        self.ballot.as_str()
    }

    /// Address of the operator that signs mint transactions.
    pub fn server_wallet_address(&self) -> Address {
        self.sender.address()
    }

    /// Human-readable token name.
    pub async fn token_name(&self) -> Result<String> {
        tracing::debug!(token = %self.token.address, "Querying token name");
        self.read(self.token.address, IBallotToken::nameCall {}).await
    }

    /// Total token supply in base units.
    pub async fn total_supply(&self) -> Result<TokenAmount> {
        tracing::debug!(token = %self.token.address, "Querying total supply");
        let supply = self.read(self.token.address, IBallotToken::totalSupplyCall {}).await?;
        Ok(TokenAmount::from_base_units(supply))
    }

    /// Token balance of `address` in base units.
    pub async fn token_balance(&self, address: &str) -> Result<TokenAmount> {
        let account = parse_address(address)?;
        tracing::debug!(account = %account, "Querying token balance");

        let balance =
            self.read(self.token.address, IBallotToken::balanceOfCall { account }).await?;
        Ok(TokenAmount::from_base_units(balance))
    }

    /// Receipt of a mined transaction.
    pub async fn transaction_receipt(&self, hash: &str) -> Result<TransactionReceipt> {
        let hash = parse_tx_hash(hash)?;
        tracing::debug!(hash = %hash, "Querying transaction receipt");

        self.reader
            .transaction_receipt(hash)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no receipt for transaction {}", hash)))
    }

    /// Whether `address` holds `MINTER_ROLE` on the token.
    pub async fn check_minter_role(&self, address: &str) -> Result<bool> {
        let account = parse_address(address)?;
        tracing::debug!(account = %account, "Checking minter role");

        self.read(self.token.address, IBallotToken::hasRoleCall { role: MINTER_ROLE, account })
            .await
    }

    /// Mint one whole token to `recipient`.
    ///
    /// The call is first simulated from the operator address; a revert there
    /// aborts before anything is signed. Returns the broadcast transaction hash.
    pub async fn mint_tokens(&self, recipient: &str) -> Result<TxHash> {
        let to = parse_address(recipient)?;
        let operator = self.sender.address();

        let request = TransactionRequest::default()
            .with_from(operator)
            .with_to(self.token.address)
            .with_input(IBallotToken::mintCall { to, amount: MINT_AMOUNT }.abi_encode())
            .with_chain_id(self.chain_id);

        if let Err(err) = self.reader.simulate(request.clone()).await {
            tracing::warn!(recipient = %to, operator = %operator, error = %err, "Mint simulation failed");
            return Err(err);
        }

        let hash = self.sender.send(request).await?;

        tracing::info!(recipient = %to, amount = %MINT_AMOUNT, hash = %hash, "Mint transaction submitted");

        Ok(hash)
    }

    /// Name of the leading proposal on the ballot.
    pub async fn winner_name(&self) -> Result<String> {
        tracing::debug!(ballot = %self.ballot.address, "Querying winner name");
        let raw = self.read(self.ballot.address, ITokenizedBallot::winnerNameCall {}).await?;
        bytes32_to_string(raw)
    }

    /// Check that the node serves the configured chain.
    pub async fn verify_chain(&self) -> Result<()> {
        let actual = self.reader.chain_id().await?;
        if actual != self.chain_id {
            return Err(AppError::ChainMismatch { expected: self.chain_id, actual });
        }
        Ok(())
    }

    /// `eth_call` a view function and decode its return value.
    async fn read<C: SolCall>(&self, to: Address, call: C) -> Result<C::Return> {
        let request = TransactionRequest::default().with_to(to).with_input(call.abi_encode());
        let data = self.reader.call(request).await?;
        Ok(C::abi_decode_returns(&data)?)
    }
}

impl std::fmt::Debug for ContractGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractGateway")
            .field("token", &self.token.address)
            .field("ballot", &self.ballot.address)
            .field("operator", &self.sender.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
