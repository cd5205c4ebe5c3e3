//! Game contract integration.
//!
//! This module provides direct interaction with the deployed game contract.
//!
//! ## Solidity Reference
//!
//! ```solidity
//! contract MyEpicGame is ERC721 {
//!     struct CharacterAttributes {
//!         uint characterIndex; string name; string imageURI;
//!         uint hp; uint maxHp; uint attackDamage;
//!     }
//!     struct BigBoss { string name; string imageURI; uint hp; uint maxHp; uint attackDamage; }
//!
//!     mapping(address => uint256) public nftHolders;
//!
//!     function mintCharacterNFT(uint _characterIndex) external;
//!     function attackBoss() public;
//!     function checkIfUserHasNFT() public view returns (CharacterAttributes memory);
//!     function getAllDefaultCharacters() public view returns (CharacterAttributes[] memory);
//!     function getBigBoss() public view returns (BigBoss memory);
//! }
//! ```

use alloy_primitives::{Address, U256};
use alloy_sol_types::{SolCall, sol};
use serde_json::{Map, Value, json};

use client_blockchain_core::{ContractError, TransactionId, WalletProvider};

use crate::utils::conversion::{decode_hex_bytes, encode_calldata};

sol! {
    #[derive(Debug, PartialEq, Eq)]
    struct CharacterAttributes {
        uint256 characterIndex;
        string name;
        string imageURI;
        uint256 hp;
        uint256 maxHp;
        uint256 attackDamage;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct BigBoss {
        string name;
        string imageURI;
        uint256 hp;
        uint256 maxHp;
        uint256 attackDamage;
    }

    function nftHolders(address holder) external view returns (uint256 tokenId);
    function checkIfUserHasNFT() external view returns (CharacterAttributes character);
    function getAllDefaultCharacters() external view returns (CharacterAttributes[] characters);
    function getBigBoss() external view returns (BigBoss boss);
    function mintCharacterNFT(uint256 characterIndex) external;
    function attackBoss() external;
}

// ============================================================================
// EpicGameContract - Contract metadata and call builders
// ============================================================================

/// Game contract metadata and call builders.
///
/// Holds only the contract address. The provider is passed to every call,
/// so the same binding works for any signer the wallet authorizes.
#[derive(Debug, Clone)]
pub struct EpicGameContract {
    pub address: Address,
}

impl EpicGameContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    /// Token id held by `holder`; zero means no character was minted.
    pub async fn holder_token_id(
        &self,
        provider: &dyn WalletProvider,
        holder: Address,
    ) -> Result<U256, ContractError> {
        let ret = self
            .call(provider, Some(holder), &nftHoldersCall { holder })
            .await?;
        Ok(ret.tokenId)
    }

    /// Raw character record as seen by `caller` (`msg.sender`).
    pub async fn character_of(
        &self,
        provider: &dyn WalletProvider,
        caller: Address,
    ) -> Result<CharacterAttributes, ContractError> {
        let ret = self
            .call(provider, Some(caller), &checkIfUserHasNFTCall {})
            .await?;
        Ok(ret.character)
    }

    pub async fn default_characters(
        &self,
        provider: &dyn WalletProvider,
    ) -> Result<Vec<CharacterAttributes>, ContractError> {
        let ret = self
            .call(provider, None, &getAllDefaultCharactersCall {})
            .await?;
        Ok(ret.characters)
    }

    pub async fn big_boss(&self, provider: &dyn WalletProvider) -> Result<BigBoss, ContractError> {
        let ret = self.call(provider, None, &getBigBossCall {}).await?;
        Ok(ret.boss)
    }

    /// Submit `mintCharacterNFT(index)` signed by `sender`.
    pub async fn mint_character(
        &self,
        provider: &dyn WalletProvider,
        sender: Address,
        index: u64,
    ) -> Result<TransactionId, ContractError> {
        let call = mintCharacterNFTCall {
            characterIndex: U256::from(index),
        };
        self.send(provider, sender, &call).await
    }

    /// Submit `attackBoss()` signed by `sender`.
    pub async fn attack_boss(
        &self,
        provider: &dyn WalletProvider,
        sender: Address,
    ) -> Result<TransactionId, ContractError> {
        self.send(provider, sender, &attackBossCall {}).await
    }

    /// Execute a read-only call via `eth_call`.
    async fn call<C: SolCall>(
        &self,
        provider: &dyn WalletProvider,
        from: Option<Address>,
        call: &C,
    ) -> Result<C::Return, ContractError> {
        let request = self.transaction_object(from, call);

        tracing::debug!("eth_call {} on {}", C::SIGNATURE, self.address);

        let value = provider
            .request("eth_call", json!([request, "latest"]))
            .await?;
        let bytes = decode_hex_bytes(&value)?;

        C::abi_decode_returns(&bytes, true)
            .map_err(|e| ContractError::Decoding(format!("{}: {}", C::SIGNATURE, e)))
    }

    /// Submit a transaction via `eth_sendTransaction`; the wallet signs.
    async fn send<C: SolCall>(
        &self,
        provider: &dyn WalletProvider,
        sender: Address,
        call: &C,
    ) -> Result<TransactionId, ContractError> {
        let request = self.transaction_object(Some(sender), call);

        tracing::info!("Sending {} from {}", C::SIGNATURE, sender);

        let value = provider
            .request("eth_sendTransaction", json!([request]))
            .await?;

        match value {
            Value::String(hash) => Ok(TransactionId::new(hash)),
            other => Err(ContractError::Decoding(format!(
                "eth_sendTransaction returned {other}"
            ))),
        }
    }

    fn transaction_object<C: SolCall>(&self, from: Option<Address>, call: &C) -> Value {
        let mut object = Map::new();
        if let Some(from) = from {
            object.insert("from".to_string(), Value::String(from.to_string()));
        }
        object.insert("to".to_string(), Value::String(self.address.to_string()));
        object.insert(
            "data".to_string(),
            Value::String(encode_calldata(&call.abi_encode())),
        );
        Value::Object(object)
    }
}
