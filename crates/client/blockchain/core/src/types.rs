//! Common types for wallet and contract interactions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wallet account identifier as reported by the provider.
///
/// The provider's spelling is kept verbatim. Chain backends parse it into
/// their own address type when they need one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account(String);

impl Account {
    /// Returns `None` for blank input.
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        let trimmed = address.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Network identifier as returned by `net_version` (e.g. "5" for Goerli).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub String);

impl NetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game character held by an account, with numeric fields already
/// normalized from the contract's `uint256` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterNft {
    pub name: String,
    pub image_uri: String,
    pub hp: u64,
    pub max_hp: u64,
    pub attack_damage: u64,
}

impl CharacterNft {
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// Presence result of a character lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterLookup {
    Owned(CharacterNft),
    NotOwned,
}

impl CharacterLookup {
    pub fn into_character(self) -> Option<CharacterNft> {
        match self {
            CharacterLookup::Owned(character) => Some(character),
            CharacterLookup::NotOwned => None,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, CharacterLookup::Owned(_))
    }
}

/// A mintable default character and its index in the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTemplate {
    pub index: u64,
    pub character: CharacterNft,
}

/// The contract's single boss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub image_uri: String,
    pub hp: u64,
    pub max_hp: u64,
    pub attack_damage: u64,
}

/// Transaction hash returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction status on the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// No receipt yet
    Pending,

    /// Included and executed successfully
    Confirmed { block_number: u64 },

    /// Included but reverted
    Reverted,
}
