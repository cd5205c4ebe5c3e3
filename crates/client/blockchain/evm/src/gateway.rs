//! EVM implementation of [`CharacterGateway`].
//!
//! Binds [`EpicGameContract`] to a wallet provider. Each call resolves the
//! signer from the authorized account; transactions are followed until a
//! receipt arrives or the polling budget runs out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use client_blockchain_core::{
    Account, Boss, CharacterGateway, CharacterLookup, CharacterTemplate, ContractError,
    TransactionId, TransactionStatus, WalletProvider,
};

use crate::config::EvmConfig;
use crate::contracts::EpicGameContract;
use crate::core::Result;
use crate::utils::conversion::{
    account_to_address, lookup_from_record, parse_quantity, to_boss, to_template,
};

/// Game contract gateway backed by a JSON-RPC wallet provider.
#[derive(Clone)]
pub struct EvmCharacterGateway {
    provider: Arc<dyn WalletProvider>,
    contract: EpicGameContract,
    receipt_poll_interval: Duration,
    receipt_poll_attempts: u32,
}

impl EvmCharacterGateway {
    pub fn new(provider: Arc<dyn WalletProvider>, config: &EvmConfig) -> Result<Self> {
        let contract = EpicGameContract::new(config.contract()?);

        tracing::info!(
            "Game contract at {} on {}",
            contract.address,
            config.network.name()
        );

        Ok(Self {
            provider,
            contract,
            receipt_poll_interval: config.receipt_poll_interval,
            receipt_poll_attempts: config.receipt_poll_attempts.max(1),
        })
    }

    pub fn contract(&self) -> &EpicGameContract {
        &self.contract
    }

    /// Single receipt query for `tx`.
    pub async fn transaction_status(
        &self,
        tx: &TransactionId,
    ) -> std::result::Result<TransactionStatus, ContractError> {
        let receipt = self
            .provider
            .request("eth_getTransactionReceipt", json!([tx.as_str()]))
            .await?;

        Ok(receipt_status(&receipt))
    }

    /// Poll until `tx` is mined.
    ///
    /// Reverted receipts and an exhausted budget are errors.
    pub async fn wait_for_receipt(
        &self,
        tx: TransactionId,
    ) -> std::result::Result<TransactionId, ContractError> {
        for attempt in 1..=self.receipt_poll_attempts {
            match self.transaction_status(&tx).await? {
                TransactionStatus::Confirmed { block_number } => {
                    tracing::info!("✓ {} mined in block {}", tx, block_number);
                    return Ok(tx);
                }
                TransactionStatus::Reverted => {
                    tracing::warn!("{} reverted", tx);
                    return Err(ContractError::Reverted(tx));
                }
                TransactionStatus::Pending => {
                    tracing::debug!(
                        "{} pending ({}/{})",
                        tx,
                        attempt,
                        self.receipt_poll_attempts
                    );
                    if attempt < self.receipt_poll_attempts {
                        tokio::time::sleep(self.receipt_poll_interval).await;
                    }
                }
            }
        }

        Err(ContractError::ReceiptTimeout(tx, self.receipt_poll_attempts))
    }
}

/// Classify an `eth_getTransactionReceipt` result.
fn receipt_status(receipt: &Value) -> TransactionStatus {
    if receipt.is_null() {
        return TransactionStatus::Pending;
    }

    let block_number = receipt
        .get("blockNumber")
        .and_then(Value::as_str)
        .and_then(parse_quantity);
    let Some(block_number) = block_number else {
        return TransactionStatus::Pending;
    };

    match receipt.get("status").and_then(Value::as_str) {
        Some("0x0") => TransactionStatus::Reverted,
        _ => TransactionStatus::Confirmed { block_number },
    }
}

#[async_trait]
impl CharacterGateway for EvmCharacterGateway {
    async fn fetch_character_for(
        &self,
        account: &Account,
    ) -> std::result::Result<CharacterLookup, ContractError> {
        let holder = account_to_address(account)?;
        let provider = self.provider.as_ref();

        let token_id = self.contract.holder_token_id(provider, holder).await?;
        if token_id.is_zero() {
            tracing::debug!("{} holds no character", account);
            return Ok(CharacterLookup::NotOwned);
        }

        let record = self.contract.character_of(provider, holder).await?;
        lookup_from_record(&record)
    }

    async fn default_characters(
        &self,
    ) -> std::result::Result<Vec<CharacterTemplate>, ContractError> {
        let records = self
            .contract
            .default_characters(self.provider.as_ref())
            .await?;

        records.iter().map(to_template).collect()
    }

    async fn mint_character(
        &self,
        account: &Account,
        index: u64,
    ) -> std::result::Result<TransactionId, ContractError> {
        let sender = account_to_address(account)?;
        let tx = self
            .contract
            .mint_character(self.provider.as_ref(), sender, index)
            .await?;

        self.wait_for_receipt(tx).await
    }

    async fn big_boss(&self) -> std::result::Result<Boss, ContractError> {
        let record = self.contract.big_boss(self.provider.as_ref()).await?;
        to_boss(&record)
    }

    async fn attack_boss(
        &self,
        account: &Account,
    ) -> std::result::Result<TransactionId, ContractError> {
        let sender = account_to_address(account)?;
        let tx = self
            .contract
            .attack_boss(self.provider.as_ref(), sender)
            .await?;

        self.wait_for_receipt(tx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::epic_game::{
        BigBoss, CharacterAttributes, checkIfUserHasNFTCall, getAllDefaultCharactersCall,
        getBigBossCall, nftHoldersCall,
    };
    use crate::utils::conversion::encode_calldata;
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;
    use client_blockchain_core::{MockWalletProvider, ProviderError};
    use std::sync::Mutex;

    const HOLDER: &str = "0x00000000000000000000000000000000000000aa";

    fn attributes(index: u64, name: &str, hp: u64) -> CharacterAttributes {
        CharacterAttributes {
            characterIndex: U256::from(index),
            name: name.to_string(),
            imageURI: format!("ipfs://{}", name.to_lowercase()),
            hp: U256::from(hp),
            maxHp: U256::from(300u64),
            attackDamage: U256::from(50u64),
        }
    }

    /// Contract node answering by selector.
    fn contract_node(token_id: u64, record: CharacterAttributes) -> MockWalletProvider {
        MockWalletProvider::new().with_handler(move |method, params| {
            assert_eq!(method, "eth_call");
            let data = params[0]["data"].as_str().unwrap_or_default();

            let encoded = if data.starts_with(&encode_calldata(&nftHoldersCall::SELECTOR)) {
                nftHoldersCall::abi_encode_returns(&(U256::from(token_id),))
            } else if data.starts_with(&encode_calldata(&checkIfUserHasNFTCall::SELECTOR)) {
                assert_eq!(params[0]["from"].as_str().unwrap(), HOLDER);
                checkIfUserHasNFTCall::abi_encode_returns(&(record.clone(),))
            } else if data.starts_with(&encode_calldata(&getAllDefaultCharactersCall::SELECTOR)) {
                getAllDefaultCharactersCall::abi_encode_returns(&(vec![
                    attributes(0, "Naruto", 300),
                    attributes(1, "Sasuke", 250),
                ],))
            } else if data.starts_with(&encode_calldata(&getBigBossCall::SELECTOR)) {
                getBigBossCall::abi_encode_returns(&(BigBoss {
                    name: "Kurama".to_string(),
                    imageURI: "ipfs://kurama".to_string(),
                    hp: U256::from(900u64),
                    maxHp: U256::from(1000u64),
                    attackDamage: U256::from(40u64),
                },))
            } else {
                return Err(ProviderError::from_rpc(-32000, "unknown selector"));
            };

            Ok(Value::String(encode_calldata(&encoded)))
        })
    }

    fn gateway(provider: MockWalletProvider) -> EvmCharacterGateway {
        let config = EvmConfig::default().with_receipt_polling(Duration::from_millis(10), 3);
        EvmCharacterGateway::new(Arc::new(provider), &config).unwrap()
    }

    fn holder() -> Account {
        Account::new(HOLDER).unwrap()
    }

    #[tokio::test]
    async fn owned_character_is_normalized() {
        let provider = contract_node(1, attributes(0, "Naruto", 120));
        let lookup = gateway(provider.clone())
            .fetch_character_for(&holder())
            .await
            .unwrap();

        let character = lookup.into_character().unwrap();
        assert_eq!(character.name, "Naruto");
        assert_eq!(character.hp, 120);
        assert_eq!(character.max_hp, 300);
        assert_eq!(provider.calls("eth_call"), 2);
    }

    #[tokio::test]
    async fn zero_token_id_skips_the_record_call() {
        let provider = contract_node(0, attributes(0, "Naruto", 120));
        let lookup = gateway(provider.clone())
            .fetch_character_for(&holder())
            .await
            .unwrap();

        assert_eq!(lookup, CharacterLookup::NotOwned);
        assert_eq!(provider.calls("eth_call"), 1);
    }

    #[tokio::test]
    async fn empty_record_is_not_owned() {
        // Holder has a token id, yet the record carries no name
        let provider = contract_node(3, attributes(0, "", 0));
        let lookup = gateway(provider.clone())
            .fetch_character_for(&holder())
            .await
            .unwrap();

        assert_eq!(lookup, CharacterLookup::NotOwned);
        assert_eq!(provider.calls("eth_call"), 2);
    }

    #[tokio::test]
    async fn non_address_accounts_fail_before_any_request() {
        let provider = contract_node(1, attributes(0, "Naruto", 120));
        let result = gateway(provider.clone())
            .fetch_character_for(&Account::new("0xABC").unwrap())
            .await;

        assert!(matches!(result, Err(ContractError::InvalidAccount(_))));
        assert_eq!(provider.calls("eth_call"), 0);
    }

    #[tokio::test]
    async fn templates_and_boss_are_read() {
        let gateway = gateway(contract_node(0, attributes(0, "", 0)));

        let templates = gateway.default_characters().await.unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[1].index, 1);
        assert_eq!(templates[1].character.name, "Sasuke");

        let boss = gateway.big_boss().await.unwrap();
        assert_eq!(boss.name, "Kurama");
        assert_eq!(boss.hp, 900);
    }

    #[tokio::test(start_paused = true)]
    async fn transactions_wait_for_receipts() {
        let polls = Arc::new(Mutex::new(0u32));
        let counter = polls.clone();
        let provider = MockWalletProvider::new().with_handler(move |method, _| match method {
            "eth_sendTransaction" => Ok(json!("0xbeef")),
            "eth_getTransactionReceipt" => {
                let mut polls = counter.lock().unwrap();
                *polls += 1;
                if *polls < 2 {
                    Ok(Value::Null)
                } else {
                    Ok(json!({"status": "0x1", "blockNumber": "0x10"}))
                }
            }
            other => panic!("unexpected {other}"),
        });

        let tx = gateway(provider).attack_boss(&holder()).await.unwrap();
        assert_eq!(tx.as_str(), "0xbeef");
        assert_eq!(*polls.lock().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reverted_and_missing_receipts_are_errors() {
        let provider = MockWalletProvider::new().with_handler(|method, _| match method {
            "eth_sendTransaction" => Ok(json!("0xdead")),
            _ => Ok(json!({"status": "0x0", "blockNumber": "0x11"})),
        });
        let result = gateway(provider).mint_character(&holder(), 1).await;
        assert!(matches!(result, Err(ContractError::Reverted(_))));

        let provider = MockWalletProvider::new().with_handler(|method, _| match method {
            "eth_sendTransaction" => Ok(json!("0xdead")),
            _ => Ok(Value::Null),
        });
        let result = gateway(provider).mint_character(&holder(), 1).await;
        assert!(matches!(result, Err(ContractError::ReceiptTimeout(_, 3))));
    }

    #[test]
    fn receipt_classification() {
        assert_eq!(receipt_status(&Value::Null), TransactionStatus::Pending);
        assert_eq!(
            receipt_status(&json!({"status": "0x1", "blockNumber": "0x2"})),
            TransactionStatus::Confirmed { block_number: 2 }
        );
        assert_eq!(
            receipt_status(&json!({"status": "0x0", "blockNumber": "0x2"})),
            TransactionStatus::Reverted
        );
        assert_eq!(
            receipt_status(&json!({"blockNumber": null})),
            TransactionStatus::Pending
        );
    }
}
