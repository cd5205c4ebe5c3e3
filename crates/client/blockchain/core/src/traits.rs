//! Blockchain abstraction traits.
//!
//! This module defines a layered blockchain abstraction:
//! - Layer 0: WalletProvider (pure request/response infrastructure)
//! - Layer 1: CharacterGateway (game domain)
//!
//! The authorization flow that sits on top lives in [`crate::wallet`].

use async_trait::async_trait;
use serde_json::Value;

use crate::types::{Account, Boss, CharacterLookup, CharacterTemplate, NetworkId, TransactionId};

/// EIP-1193 error code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

// ============================================================================
// Error Types
// ============================================================================

/// Provider (transport) layer errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Request rejected by the wallet")]
    Rejected,

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("No wallet provider available")]
    Unavailable,
}

impl ProviderError {
    /// Classifies an RPC error object, mapping the EIP-1193 rejection code.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        if code == USER_REJECTED_CODE {
            ProviderError::Rejected
        } else {
            ProviderError::Rpc {
                code,
                message: message.into(),
            }
        }
    }
}

/// Account authorization errors.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("No wallet provider detected")]
    ProviderMissing,

    #[error("Authorization rejected by the user")]
    Rejected,

    #[error("Provider returned no accounts")]
    NoAccounts,

    #[error("Provider error: {0}")]
    Provider(ProviderError),
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected => WalletError::Rejected,
            other => WalletError::Provider(other),
        }
    }
}

/// Contract call errors.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("Invalid account for contract call: {0}")]
    InvalidAccount(String),

    #[error("ABI encoding error: {0}")]
    Encoding(String),

    #[error("ABI decoding error: {0}")]
    Decoding(String),

    #[error("Value of {field} does not fit in u64")]
    NumericOverflow { field: &'static str },

    #[error("Transaction {0} reverted")]
    Reverted(TransactionId),

    #[error("No receipt for transaction {0} after {1} attempts")]
    ReceiptTimeout(TransactionId, u32),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

// ============================================================================
// Layer 0: Pure Infrastructure
// ============================================================================

/// Request/response wallet provider.
///
/// Mirrors the injected-provider `request({method, params})` call so the
/// authorization flow and contract calls stay backend-agnostic.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Issue a single JSON-RPC request and return its `result`.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Network the provider is currently attached to.
    async fn network_version(&self) -> Result<NetworkId, ProviderError> {
        let value = self.request("net_version", Value::Array(Vec::new())).await?;
        match value {
            Value::String(id) => Ok(NetworkId::new(id)),
            Value::Number(n) => Ok(NetworkId::new(n.to_string())),
            other => Err(ProviderError::MalformedResponse(format!(
                "net_version returned {other}"
            ))),
        }
    }
}

/// Stand-in provider for an environment with no wallet at all.
///
/// Every request fails with [`ProviderError::Unavailable`], so contract
/// calls made without a wallet surface as ordinary provider errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProvider;

#[async_trait]
impl WalletProvider for UnavailableProvider {
    async fn request(&self, method: &str, _params: Value) -> Result<Value, ProviderError> {
        tracing::debug!("Dropping {} request: no wallet provider", method);
        Err(ProviderError::Unavailable)
    }
}

// ============================================================================
// Layer 1: Game Domain Traits
// ============================================================================

/// Typed access to the deployed game contract.
///
/// Every call that needs a signer takes the authorized [`Account`]; the
/// implementation binds the contract to it.
#[async_trait]
pub trait CharacterGateway: Send + Sync {
    /// Look up the character owned by `account`.
    async fn fetch_character_for(
        &self,
        account: &Account,
    ) -> Result<CharacterLookup, ContractError>;

    /// Characters available for minting.
    async fn default_characters(&self) -> Result<Vec<CharacterTemplate>, ContractError>;

    /// Mint the default character at `index` and wait for the receipt.
    async fn mint_character(
        &self,
        account: &Account,
        index: u64,
    ) -> Result<TransactionId, ContractError>;

    /// Current boss state.
    async fn big_boss(&self) -> Result<Boss, ContractError>;

    /// Attack the boss with `account`'s character and wait for the receipt.
    async fn attack_boss(&self, account: &Account) -> Result<TransactionId, ContractError>;
}

/// Backend-specific configuration.
///
/// This is a trait to allow different chains to provide their own config types.
pub trait BlockchainConfig: Send + Sync {
    /// Human-readable network name (e.g., "goerli", "local")
    fn network_name(&self) -> &str;

    /// Provider endpoint URL, if a wallet is configured at all
    fn rpc_url(&self) -> Option<&str>;

    /// Validate configuration (e.g., URL format, address length)
    fn validate(&self) -> Result<(), String>;
}
