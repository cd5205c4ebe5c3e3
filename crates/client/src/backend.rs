//! Wallet provider detection and contract gateway assembly.
use std::sync::Arc;

use anyhow::{Context, Result};
use client_blockchain_core::{
    BlockchainConfig, CharacterGateway, NetworkId, UnavailableProvider, WalletAdapter,
    WalletProvider,
};
use client_blockchain_evm::{EvmCharacterGateway, EvmConfig, HttpWalletProvider};
use client_session::SessionConfig;

/// Wallet and contract access shared by the session and the frontend.
pub struct Backend {
    pub wallet: WalletAdapter,
    pub gateway: Arc<dyn CharacterGateway>,
    pub expected_network: NetworkId,
}

impl Backend {
    /// Validate `config` and probe for a wallet provider.
    ///
    /// A missing or unreachable provider is not an error: the session starts
    /// without one and alerts when the user tries to connect.
    pub async fn connect(config: &EvmConfig) -> Result<Self> {
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .context("Invalid EVM configuration")?;

        let provider = HttpWalletProvider::detect(config)
            .await
            .map(|provider| Arc::new(provider) as Arc<dyn WalletProvider>);

        Self::from_provider(provider, config)
    }

    /// Assemble from an already detected provider (or none).
    pub fn from_provider(
        provider: Option<Arc<dyn WalletProvider>>,
        config: &EvmConfig,
    ) -> Result<Self> {
        // Contract calls without a wallet fail like any other provider error
        let gateway_provider = provider
            .clone()
            .unwrap_or_else(|| Arc::new(UnavailableProvider) as Arc<dyn WalletProvider>);

        let gateway = EvmCharacterGateway::new(gateway_provider, config)
            .context("Failed to create contract gateway")?;

        tracing::info!(
            "Backend ready: network={}, contract={}, wallet={}",
            config.network_name(),
            config.contract_address,
            if provider.is_some() { "detected" } else { "none" }
        );

        Ok(Self {
            wallet: WalletAdapter::new(provider),
            gateway: Arc::new(gateway),
            expected_network: config.expected_network(),
        })
    }

    /// `base` with this backend's network as the one to check against.
    pub fn session_config(&self, base: SessionConfig) -> SessionConfig {
        base.with_expected_network(self.expected_network.clone())
    }
}
