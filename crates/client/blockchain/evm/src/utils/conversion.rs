//! Type conversion utilities for the EVM backend.
//!
//! ## Conversion Categories
//!
//! 1. **Records**: contract structs → normalized domain types (`uint256` → `u64`)
//! 2. **Addresses**: [`Account`] → [`Address`]
//! 3. **Encoding**: bytes ↔ `0x`-prefixed hex, JSON-RPC quantities

use alloy_primitives::{Address, U256};
use serde_json::Value;

use client_blockchain_core::{
    Account, Boss, CharacterLookup, CharacterNft, CharacterTemplate, ContractError,
};

use crate::contracts::{BigBoss, CharacterAttributes};

// ============================================================================
// Record Normalization
// ============================================================================

/// Convert a chain integer into a plain number, failing on overflow.
pub fn u256_to_u64(value: U256, field: &'static str) -> Result<u64, ContractError> {
    u64::try_from(value).map_err(|_| ContractError::NumericOverflow { field })
}

pub fn to_character(record: &CharacterAttributes) -> Result<CharacterNft, ContractError> {
    Ok(CharacterNft {
        name: record.name.clone(),
        image_uri: record.imageURI.clone(),
        hp: u256_to_u64(record.hp, "hp")?,
        max_hp: u256_to_u64(record.maxHp, "maxHp")?,
        attack_damage: u256_to_u64(record.attackDamage, "attackDamage")?,
    })
}

pub fn to_template(record: &CharacterAttributes) -> Result<CharacterTemplate, ContractError> {
    Ok(CharacterTemplate {
        index: u256_to_u64(record.characterIndex, "characterIndex")?,
        character: to_character(record)?,
    })
}

pub fn to_boss(record: &BigBoss) -> Result<Boss, ContractError> {
    Ok(Boss {
        name: record.name.clone(),
        image_uri: record.imageURI.clone(),
        hp: u256_to_u64(record.hp, "hp")?,
        max_hp: u256_to_u64(record.maxHp, "maxHp")?,
        attack_damage: u256_to_u64(record.attackDamage, "attackDamage")?,
    })
}

/// Classify a `checkIfUserHasNFT` record for a holder whose token id is
/// non-zero.
///
/// The contract answers with a zeroed struct when it has no record, so an
/// empty name here means the holder mapping and the attribute storage
/// disagree. That is reported as `NotOwned`.
pub fn lookup_from_record(record: &CharacterAttributes) -> Result<CharacterLookup, ContractError> {
    if record.name.is_empty() {
        tracing::warn!("Holder has a token id but the character record is empty");
        return Ok(CharacterLookup::NotOwned);
    }
    Ok(CharacterLookup::Owned(to_character(record)?))
}

// ============================================================================
// Address Conversions
// ============================================================================

/// Parse an account into an EVM address.
pub fn account_to_address(account: &Account) -> Result<Address, ContractError> {
    account
        .as_str()
        .parse::<Address>()
        .map_err(|e| ContractError::InvalidAccount(format!("{}: {}", account, e)))
}

// ============================================================================
// Encoding Utilities
// ============================================================================

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn encode_calldata(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a `0x`-prefixed hex string result.
pub fn decode_hex_bytes(value: &Value) -> Result<Vec<u8>, ContractError> {
    let text = value
        .as_str()
        .ok_or_else(|| ContractError::Decoding(format!("expected hex string, got {value}")))?;
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits).map_err(|e| ContractError::Decoding(format!("invalid hex: {e}")))
}

/// Parse a JSON-RPC quantity such as `"0x1a"`.
pub fn parse_quantity(text: &str) -> Option<u64> {
    let digits = text.strip_prefix("0x")?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CharacterAttributes {
        CharacterAttributes {
            characterIndex: U256::from(2u64),
            name: name.to_string(),
            imageURI: "ipfs://kakashi".to_string(),
            hp: U256::from(180u64),
            maxHp: U256::from(200u64),
            attackDamage: U256::from(45u64),
        }
    }

    #[test]
    fn character_fields_are_normalized() {
        let character = to_character(&record("Kakashi")).unwrap();
        assert_eq!(
            character,
            CharacterNft {
                name: "Kakashi".to_string(),
                image_uri: "ipfs://kakashi".to_string(),
                hp: 180,
                max_hp: 200,
                attack_damage: 45,
            }
        );

        let template = to_template(&record("Kakashi")).unwrap();
        assert_eq!(template.index, 2);
    }

    #[test]
    fn oversized_values_are_rejected() {
        let mut oversized = record("Kakashi");
        oversized.hp = U256::MAX;

        assert!(matches!(
            to_character(&oversized),
            Err(ContractError::NumericOverflow { field: "hp" })
        ));
    }

    #[test]
    fn empty_name_record_is_not_owned() {
        assert_eq!(
            lookup_from_record(&record("")).unwrap(),
            CharacterLookup::NotOwned
        );
        assert!(lookup_from_record(&record("Kakashi")).unwrap().is_owned());
    }

    #[test]
    fn short_accounts_are_not_addresses() {
        let account = Account::new("0xABC").unwrap();
        assert!(matches!(
            account_to_address(&account),
            Err(ContractError::InvalidAccount(_))
        ));

        let account = Account::new("0xf3D41d3aA3A532768331bd131661AF0FE1B2f608").unwrap();
        assert!(account_to_address(&account).is_ok());
    }

    #[test]
    fn quantities_and_hex() {
        assert_eq!(parse_quantity("0x1"), Some(1));
        assert_eq!(parse_quantity("0x1a"), Some(26));
        assert_eq!(parse_quantity("26"), None);
        assert_eq!(parse_quantity("0x"), None);

        assert_eq!(encode_calldata(&[0xde, 0xad]), "0xdead");
        assert_eq!(
            decode_hex_bytes(&Value::String("0xdead".into())).unwrap(),
            vec![0xde, 0xad]
        );
        assert!(decode_hex_bytes(&Value::Null).is_err());
    }
}
