//! EVM chain integration for the Epic Game client.
//!
//! This crate talks to the deployed game contract through a JSON-RPC wallet
//! provider, including:
//! - Provider detection and `eth_*` requests over HTTP
//! - ABI encoding/decoding of the game contract's calls
//! - Normalization of `uint256` fields into plain numbers
//! - Transaction submission and receipt polling
//!
//! # Architecture
//!
//! ```text
//! client-blockchain-core (WalletProvider, CharacterGateway)
//!          ↑ implemented by
//! HttpWalletProvider ──→ EpicGameContract (ABI) ──→ EvmCharacterGateway
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_evm::{EvmCharacterGateway, EvmConfig, HttpWalletProvider};
//!
//! let config = EvmConfig::from_env()?;
//! if let Some(provider) = HttpWalletProvider::detect(&config).await {
//!     let provider = std::sync::Arc::new(provider);
//!     let gateway = EvmCharacterGateway::new(provider, &config)?;
//!     let lookup = gateway.fetch_character_for(&account).await?;
//! }
//! ```

pub mod config;
pub mod contracts;
pub mod core;
pub mod gateway;
pub mod provider;
pub mod utils;

pub use config::{DEFAULT_CONTRACT_ADDRESS, EvmConfig, EvmNetwork};
pub use contracts::EpicGameContract;
pub use crate::core::{EvmError, Result};
pub use gateway::EvmCharacterGateway;
pub use provider::HttpWalletProvider;
