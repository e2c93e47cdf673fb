//! Integration tests for the BallotToken read tools.
//!
//! Run with: `cargo test --test test_token_reads -- --ignored`

mod common;

use contract_gateway::mcp::AddressInput;
use rmcp::handler::server::wrapper::Parameters;

/// Test reading the token name.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_get_token_name() {
    let server = skip_if_no_server!();

    let result = server.get_token_name().await;
    assert!(result.is_ok(), "get_token_name should succeed: {:?}", result.err());

    let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    assert!(!parsed["name"].as_str().unwrap().is_empty());
}

/// Test reading the total supply as an exact decimal string.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_get_total_supply() {
    let server = skip_if_no_server!();

    let result = server.get_total_supply().await;
    assert!(result.is_ok(), "get_total_supply should succeed: {:?}", result.err());

    let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    let raw = parsed["total_supply"]["raw"].as_str().unwrap();
    assert!(raw.chars().all(|c| c.is_ascii_digit()));
    assert!(parsed["total_supply"].get("formatted").is_some());
}

/// Test querying the server wallet's own balance.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_get_token_balance_of_server_wallet() {
    let server = skip_if_no_server!();
    let address = server.gateway().server_wallet_address().to_string();

    let result = server.get_token_balance(Parameters(AddressInput { address })).await;
    assert!(result.is_ok(), "get_token_balance should succeed: {:?}", result.err());

    let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    assert!(parsed.get("address").is_some());
    assert!(parsed["balance"].get("raw").is_some());
}

/// Test invalid address handling.
#[tokio::test]
async fn test_get_token_balance_invalid_address() {
    let server = skip_if_no_server!();

    let input = AddressInput { address: "not-an-address".to_string() };
    let result = server.get_token_balance(Parameters(input)).await;

    assert!(result.is_err(), "get_token_balance should fail for invalid address");
}

/// Test role lookup for an address that holds no roles.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_check_minter_role_for_unprivileged_address() {
    let server = skip_if_no_server!();

    let input = AddressInput { address: "0x000000000000000000000000000000000000dEaD".to_string() };
    let result = server.check_minter_role(Parameters(input)).await;
    assert!(result.is_ok(), "check_minter_role should succeed: {:?}", result.err());

    let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    assert_eq!(parsed["has_role"], false);
}
