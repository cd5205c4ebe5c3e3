//! Account authorization over an optional wallet provider.
//!
//! The provider may be absent entirely (no wallet installed / configured).
//! The adapter keeps that case explicit instead of failing at construction.

use std::sync::Arc;

use serde_json::Value;

use crate::traits::{ProviderError, WalletError, WalletProvider};
use crate::types::{Account, NetworkId};

/// Authorization flow built on top of a [`WalletProvider`].
#[derive(Clone, Default)]
pub struct WalletAdapter {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl WalletAdapter {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    /// Adapter for an environment with no wallet provider.
    pub fn without_provider() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: impl WalletProvider + 'static) -> Self {
        Self {
            provider: Some(Arc::new(provider)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider(&self) -> Option<&Arc<dyn WalletProvider>> {
        self.provider.as_ref()
    }

    /// Non-interactive `eth_accounts` query.
    ///
    /// Never fails: a missing provider or a provider error is logged and
    /// reported as "no account".
    pub async fn check_existing_authorization(&self) -> Option<Account> {
        let Some(provider) = &self.provider else {
            tracing::info!("No wallet provider detected; skipping authorization check");
            return None;
        };

        match provider.request("eth_accounts", Value::Array(Vec::new())).await {
            Ok(value) => match first_account(value) {
                Ok(Some(account)) => {
                    tracing::info!("Found authorized account: {}", account);
                    Some(account)
                }
                Ok(None) => {
                    tracing::info!("No authorized account found");
                    None
                }
                Err(e) => {
                    tracing::warn!("Unexpected eth_accounts response: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Authorization check failed: {}", e);
                None
            }
        }
    }

    /// Interactive `eth_requestAccounts` prompt.
    pub async fn request_authorization(&self) -> Result<Account, WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderMissing)?;

        let value = provider
            .request("eth_requestAccounts", Value::Array(Vec::new()))
            .await?;

        let account = first_account(value)?.ok_or(WalletError::NoAccounts)?;
        tracing::info!("Connected account: {}", account);
        Ok(account)
    }

    /// Network the provider is attached to, if it can be determined.
    pub async fn network_version(&self) -> Option<NetworkId> {
        let provider = self.provider.as_ref()?;
        match provider.network_version().await {
            Ok(network) => Some(network),
            Err(e) => {
                tracing::warn!("Failed to query network version: {}", e);
                None
            }
        }
    }
}

/// The account at index 0 of an `eth_accounts`-shaped response.
///
/// A blank first entry means "no account"; later entries are never used.
fn first_account(value: Value) -> Result<Option<Account>, ProviderError> {
    let accounts: Vec<String> = serde_json::from_value(value)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    Ok(accounts.into_iter().next().and_then(Account::new))
}
