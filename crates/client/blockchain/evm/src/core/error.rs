//! Error types for EVM setup.
//!
//! Runtime call failures use [`client_blockchain_core::ContractError`]; these
//! cover construction of the provider and gateway.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvmError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, EvmError>;
