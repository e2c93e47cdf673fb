//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Serialize;

use crate::{
    ethereum::constants::{MINTER_ROLE, MINT_AMOUNT},
    services::ContractGateway,
    types::{parse_address, BalanceInfo, MintReceipt, RoleCheck},
};

/// Contract Gateway MCP Server.
///
/// Exposes BallotToken and TokenizedBallot operations as MCP tools.
#[derive(Clone)]
pub struct ContractGatewayServer {
    gateway: Arc<ContractGateway>,
    tool_router: ToolRouter<Self>,
}

impl ContractGatewayServer {
    /// Create a server over an already constructed gateway.
    pub fn new(gateway: Arc<ContractGateway>) -> Self {
        Self { gateway, tool_router: Self::tool_router() }
    }

    /// The gateway backing this server.
    pub fn gateway(&self) -> &ContractGateway {
        &self.gateway
    }
}

/// Input for tools taking an account address.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct AddressInput {
    /// Account address (0x + 40 hex chars).
    pub address: String,
}

/// Input for the get_transaction_receipt tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct TransactionHashInput {
    /// Transaction hash (0x + 64 hex chars).
    pub hash: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl ContractGatewayServer {
    /// Configured BallotToken contract address.
    #[tool(description = "Get the configured BallotToken contract address")]
    pub async fn get_token_contract_address(&self) -> Result<String, McpError> {
        to_json(&serde_json::json!({ "address": self.gateway.token_contract_address() }))
    }

    /// Configured TokenizedBallot contract address.
    #[tool(description = "Get the configured TokenizedBallot contract address")]
    pub async fn get_ballot_contract_address(&self) -> Result<String, McpError> {
        to_json(&serde_json::json!({ "address": self.gateway.ballot_contract_address() }))
    }

    /// Token name as reported by the contract.
    #[tool(description = "Get the BallotToken name")]
    pub async fn get_token_name(&self) -> Result<String, McpError> {
        tracing::info!("get_token_name called");
        let name = self.gateway.token_name().await?;
        to_json(&serde_json::json!({ "name": name }))
    }

    /// Total supply in base units and whole tokens.
    #[tool(description = "Get the BallotToken total supply")]
    pub async fn get_total_supply(&self) -> Result<String, McpError> {
        tracing::info!("get_total_supply called");
        let supply = self.gateway.total_supply().await?;
        to_json(&serde_json::json!({ "total_supply": supply }))
    }

    /// Balance of an account in base units and whole tokens.
    #[tool(description = "Get the BallotToken balance of an address")]
    pub async fn get_token_balance(
        &self,
        Parameters(input): Parameters<AddressInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.address, "get_token_balance called");

        let account = parse_address(&input.address)?;
        let balance = self.gateway.token_balance(&input.address).await?;

        to_json(&BalanceInfo { address: account.to_string(), balance })
    }

    /// Receipt of a mined transaction; fails with not-found while pending.
    #[tool(description = "Get the receipt of a transaction by hash")]
    pub async fn get_transaction_receipt(
        &self,
        Parameters(input): Parameters<TransactionHashInput>,
    ) -> Result<String, McpError> {
        tracing::info!(hash = %input.hash, "get_transaction_receipt called");
        let receipt = self.gateway.transaction_receipt(&input.hash).await?;
        to_json(&receipt)
    }

    /// Operator address; no network call.
    #[tool(description = "Get the address of the server wallet that signs mint transactions")]
    pub async fn get_server_wallet_address(&self) -> Result<String, McpError> {
        to_json(&serde_json::json!({ "address": self.gateway.server_wallet_address() }))
    }

    /// Whether an account holds `MINTER_ROLE` on the token.
    #[tool(description = "Check whether an address holds MINTER_ROLE on the BallotToken")]
    pub async fn check_minter_role(
        &self,
        Parameters(input): Parameters<AddressInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.address, "check_minter_role called");

        let account = parse_address(&input.address)?;
        let has_role = self.gateway.check_minter_role(&input.address).await?;

        to_json(&RoleCheck::new(account, MINTER_ROLE, has_role))
    }

    /// Mint one BallotToken to an address.
    ///
    /// The mint is simulated first and only broadcast if the simulation
    /// succeeds. Returns the transaction hash without waiting for inclusion.
    #[tool(
        description = "Mint 1 BallotToken to an address. The transaction is simulated first and only broadcast if it would succeed."
    )]
    pub async fn mint_tokens(
        &self,
        Parameters(input): Parameters<AddressInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.address, "mint_tokens called");

        let recipient = parse_address(&input.address)?;
        let hash = self.gateway.mint_tokens(&input.address).await?;

        to_json(&MintReceipt::new(recipient, MINT_AMOUNT, hash))
    }

    /// Winning proposal name, decoded from its `bytes32` form.
    #[tool(description = "Get the name of the winning proposal on the TokenizedBallot")]
    pub async fn get_winner_name(&self) -> Result<String, McpError> {
        tracing::info!("get_winner_name called");
        let name = self.gateway.winner_name().await?;
        to_json(&serde_json::json!({ "winner_name": name }))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ContractGatewayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "contract-gateway".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Contract Gateway MCP Server. Reads BallotToken and TokenizedBallot state \
                 and mints BallotToken from the server wallet."
                    .to_string(),
            ),
        }
    }
}
