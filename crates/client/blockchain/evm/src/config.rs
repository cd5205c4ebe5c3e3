//! EVM chain configuration.

use std::env;
use std::time::Duration;

use alloy_primitives::Address;
use client_blockchain_core::{BlockchainConfig, NetworkId};

use crate::core::EvmError;

/// Address of the deployed game contract.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xf3D41d3aA3A532768331bd131661AF0FE1B2f608";

/// EVM network types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvmNetwork {
    /// Goerli testnet (where the game contract is deployed)
    Goerli,
    /// Sepolia testnet
    Sepolia,
    /// Local dev node (anvil / hardhat)
    Local,
}

impl EvmNetwork {
    /// `net_version` value the provider reports on this network.
    pub fn network_id(&self) -> NetworkId {
        let id = match self {
            EvmNetwork::Goerli => "5",
            EvmNetwork::Sepolia => "11155111",
            EvmNetwork::Local => "31337",
        };
        NetworkId::new(id)
    }

    /// Only a local node has a well-known endpoint; public networks need
    /// an explicit wallet endpoint.
    pub fn default_rpc_url(&self) -> Option<&'static str> {
        match self {
            EvmNetwork::Local => Some("http://127.0.0.1:8545"),
            EvmNetwork::Goerli | EvmNetwork::Sepolia => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EvmNetwork::Goerli => "goerli",
            EvmNetwork::Sepolia => "sepolia",
            EvmNetwork::Local => "local",
        }
    }
}

/// EVM-specific configuration.
#[derive(Debug, Clone)]
pub struct EvmConfig {
    /// Network the contract is deployed on
    pub network: EvmNetwork,

    /// Wallet provider endpoint (overrides network default)
    pub rpc_url: Option<String>,

    /// Address of the game contract
    pub contract_address: String,

    /// Per-request HTTP timeout
    pub request_timeout: Duration,

    /// Delay between receipt polls
    pub receipt_poll_interval: Duration,

    /// Receipt polls before giving up on a transaction
    pub receipt_poll_attempts: u32,
}

impl EvmConfig {
    /// Create a new configuration for `network` with default contract address.
    pub fn new(network: EvmNetwork) -> Self {
        Self {
            network,
            rpc_url: None,
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            request_timeout: Duration::from_millis(10_000),
            receipt_poll_interval: Duration::from_millis(1_000),
            receipt_poll_attempts: 60,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVM_NETWORK` - Network name (goerli, sepolia, local) (default: goerli)
    /// - `EVM_RPC_URL` - Wallet provider endpoint (default: none, or local node)
    /// - `GAME_CONTRACT_ADDRESS` - Game contract address
    /// - `EVM_REQUEST_TIMEOUT_MS` - HTTP timeout (default: 10000)
    /// - `EVM_RECEIPT_POLL_MS` - Receipt poll interval (default: 1000)
    /// - `EVM_RECEIPT_POLL_ATTEMPTS` - Receipt polls before timeout (default: 60)
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`EvmConfig::from_env`] with an injectable variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let network = match var("EVM_NETWORK")
            .unwrap_or_else(|| "goerli".to_string())
            .to_lowercase()
            .as_str()
        {
            "goerli" => EvmNetwork::Goerli,
            "sepolia" => EvmNetwork::Sepolia,
            "local" => EvmNetwork::Local,
            other => {
                return Err(format!(
                    "Invalid EVM_NETWORK: {}. Must be goerli, sepolia, or local",
                    other
                ));
            }
        };

        let mut config = Self::new(network);
        config.rpc_url = var("EVM_RPC_URL").filter(|url| !url.trim().is_empty());

        if let Some(address) = var("GAME_CONTRACT_ADDRESS") {
            config.contract_address = address;
        }

        if let Some(ms) = var("EVM_REQUEST_TIMEOUT_MS").and_then(|s| s.parse::<u64>().ok()) {
            config.request_timeout = Duration::from_millis(ms.max(1));
        }

        if let Some(ms) = var("EVM_RECEIPT_POLL_MS").and_then(|s| s.parse::<u64>().ok()) {
            config.receipt_poll_interval = Duration::from_millis(ms);
        }

        if let Some(attempts) =
            var("EVM_RECEIPT_POLL_ATTEMPTS").and_then(|s| s.parse::<u32>().ok())
        {
            config.receipt_poll_attempts = attempts.max(1);
        }

        Ok(config)
    }

    /// Set wallet provider endpoint.
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = Some(url.into());
        self
    }

    /// Set contract address.
    pub fn with_contract_address(mut self, address: impl Into<String>) -> Self {
        self.contract_address = address.into();
        self
    }

    /// Set receipt polling policy.
    pub fn with_receipt_polling(mut self, interval: Duration, attempts: u32) -> Self {
        self.receipt_poll_interval = interval;
        self.receipt_poll_attempts = attempts.max(1);
        self
    }

    /// Get the provider URL (custom or default for network).
    pub fn get_rpc_url(&self) -> Option<&str> {
        self.rpc_url
            .as_deref()
            .or_else(|| self.network.default_rpc_url())
    }

    /// Network id the wallet is expected to report.
    pub fn expected_network(&self) -> NetworkId {
        self.network.network_id()
    }

    /// Parsed contract address.
    pub fn contract(&self) -> Result<Address, EvmError> {
        self.contract_address
            .parse::<Address>()
            .map_err(|e| EvmError::InvalidAddress(format!("{}: {}", self.contract_address, e)))
    }
}

impl BlockchainConfig for EvmConfig {
    fn network_name(&self) -> &str {
        self.network.name()
    }

    fn rpc_url(&self) -> Option<&str> {
        self.get_rpc_url()
    }

    fn validate(&self) -> Result<(), String> {
        // Validate RPC URL format
        if let Some(url) = self.get_rpc_url()
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            return Err(format!("Invalid RPC URL format: {}", url));
        }

        // Validate contract address
        self.contract().map_err(|e| e.to_string())?;

        if self.receipt_poll_attempts == 0 {
            return Err("Receipt poll attempts must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for EvmConfig {
    fn default() -> Self {
        Self::new(EvmNetwork::Goerli)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_target_goerli_without_wallet() {
        let config = EvmConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.network, EvmNetwork::Goerli);
        assert_eq!(config.expected_network(), NetworkId::new("5"));
        assert_eq!(config.get_rpc_url(), None);
        assert_eq!(config.contract_address, DEFAULT_CONTRACT_ADDRESS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn local_network_has_default_endpoint() {
        let config = EvmConfig::from_vars(vars(&[("EVM_NETWORK", "LOCAL")])).unwrap();
        assert_eq!(config.get_rpc_url(), Some("http://127.0.0.1:8545"));
        assert_eq!(config.expected_network(), NetworkId::new("31337"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = EvmConfig::from_vars(vars(&[
            ("EVM_NETWORK", "sepolia"),
            ("EVM_RPC_URL", "https://rpc.example"),
            ("EVM_RECEIPT_POLL_ATTEMPTS", "0"),
            ("EVM_RECEIPT_POLL_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.get_rpc_url(), Some("https://rpc.example"));
        assert_eq!(config.receipt_poll_attempts, 1);
        assert_eq!(config.receipt_poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn unknown_network_is_rejected() {
        assert!(EvmConfig::from_vars(vars(&[("EVM_NETWORK", "mainnet")])).is_err());
    }

    #[test]
    fn validate_rejects_bad_url_and_address() {
        let config = EvmConfig::default().with_rpc_url("ws://127.0.0.1:8545");
        assert!(config.validate().is_err());

        let config = EvmConfig::default().with_contract_address("0x1234");
        assert!(config.validate().is_err());
    }
}
