//! Blockchain abstraction layer for the Epic Game client.
//!
//! This crate provides a layered abstraction over the wallet and the deployed
//! game contract.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: WalletAdapter (authorization flow over a provider)
//!
//! Layer 1: CharacterGateway (game concepts: characters, boss, minting)
//!
//! Layer 0: WalletProvider (pure request/response infrastructure)
//! ```
//!
//! # Design Philosophy
//!
//! - **Layer 0 (Provider)**: EIP-1193 style `request(method, params)`, no game knowledge
//! - **Layer 1 (Domain)**: Typed contract calls returning normalized game types
//! - **Layer 2 (Adapter)**: Account authorization built on top of an optional provider
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_core::{CharacterGateway, CharacterLookup, WalletAdapter};
//!
//! async fn find_character(wallet: &WalletAdapter, gateway: &dyn CharacterGateway) {
//!     if let Some(account) = wallet.check_existing_authorization().await {
//!         match gateway.fetch_character_for(&account).await? {
//!             CharacterLookup::Owned(character) => println!("{}", character.name),
//!             CharacterLookup::NotOwned => println!("mint one first"),
//!         }
//!     }
//! }
//! ```

pub mod traits;
pub mod types;
pub mod wallet;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export all traits
pub use traits::{
    BlockchainConfig, CharacterGateway, ContractError, ProviderError, UnavailableProvider,
    WalletError, WalletProvider,
};

// Re-export all types
pub use types::{
    Account, Boss, CharacterLookup, CharacterNft, CharacterTemplate, NetworkId, TransactionId,
    TransactionStatus,
};

pub use wallet::WalletAdapter;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCharacterGateway, MockWalletProvider};
