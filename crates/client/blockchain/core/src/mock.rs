//! Mock provider and gateway for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::traits::{CharacterGateway, ContractError, ProviderError, WalletProvider};
use crate::types::{
    Account, Boss, CharacterLookup, CharacterNft, CharacterTemplate, TransactionId,
};

type Handler = dyn Fn(&str, &Value) -> Result<Value, ProviderError> + Send + Sync;

/// Scriptable wallet provider that counts requests per method.
#[derive(Clone)]
pub struct MockWalletProvider {
    handler: Arc<Handler>,
    calls: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockWalletProvider {
    /// Provider with no authorized accounts on network "5".
    pub fn new() -> Self {
        Self::default().with_accounts(&[])
    }

    /// Answer `eth_accounts` and `eth_requestAccounts` with `accounts`.
    pub fn with_accounts(self, accounts: &[&str]) -> Self {
        let accounts: Vec<String> = accounts.iter().map(|a| a.to_string()).collect();
        self.with_handler(move |method, _| match method {
            "eth_accounts" | "eth_requestAccounts" => Ok(json!(accounts)),
            "net_version" => Ok(json!("5")),
            other => Err(ProviderError::Rpc {
                code: -32601,
                message: format!("method {other} not mocked"),
            }),
        })
    }

    /// Replace the response logic entirely.
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value, ProviderError> + Send + Sync + 'static,
    {
        self.handler = Arc::new(handler);
        self
    }

    /// Number of requests issued for `method`.
    pub fn calls(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(method)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for MockWalletProvider {
    fn default() -> Self {
        Self {
            handler: Arc::new(|_, _| Ok(Value::Null)),
            calls: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        *self
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(method.to_string())
            .or_insert(0) += 1;
        (self.handler)(method, &params)
    }
}

/// In-memory stand-in for the game contract.
///
/// Minting copies the chosen template to the account; attacking trades
/// damage between the account's character and the boss.
#[derive(Clone)]
pub struct MockCharacterGateway {
    records: Arc<Mutex<HashMap<Account, CharacterLookup>>>,
    lookups: Arc<Mutex<HashMap<Account, usize>>>,
    templates: Vec<CharacterTemplate>,
    boss: Arc<Mutex<Boss>>,
    lookup_delay: Option<Duration>,
    fail_lookups: bool,
    tx_counter: Arc<Mutex<u64>>,
}

impl MockCharacterGateway {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            lookups: Arc::new(Mutex::new(HashMap::new())),
            templates: vec![
                CharacterTemplate {
                    index: 0,
                    character: sample_character("Naruto", 300, 50),
                },
                CharacterTemplate {
                    index: 1,
                    character: sample_character("Sasuke", 250, 70),
                },
            ],
            boss: Arc::new(Mutex::new(Boss {
                name: "Kurama".to_string(),
                image_uri: "ipfs://kurama".to_string(),
                hp: 1000,
                max_hp: 1000,
                attack_damage: 40,
            })),
            lookup_delay: None,
            fail_lookups: false,
            tx_counter: Arc::new(Mutex::new(0)),
        }
    }

    /// Give `account` a character.
    pub fn with_character(self, account: &Account, character: CharacterNft) -> Self {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(account.clone(), CharacterLookup::Owned(character));
        self
    }

    /// Delay every lookup, for exercising in-flight behavior.
    pub fn with_lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay = Some(delay);
        self
    }

    /// Make every lookup fail with a provider error.
    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    /// Number of lookups issued for `account`.
    pub fn lookups_for(&self, account: &Account) -> usize {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .copied()
            .unwrap_or(0)
    }

    /// Total lookups across all accounts.
    pub fn total_lookups(&self) -> usize {
        self.lookups.lock().unwrap_or_else(PoisonError::into_inner).values().sum()
    }

    pub fn boss(&self) -> Boss {
        self.boss.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn next_tx_id(&self) -> TransactionId {
        let mut counter = self.tx_counter.lock().unwrap_or_else(PoisonError::into_inner);
        *counter += 1;
        TransactionId::new(format!("0x{:064x}", *counter))
    }
}

impl Default for MockCharacterGateway {
    fn default() -> Self {
        Self::new()
    }
}

/// Character with full health, for tests.
pub fn sample_character(name: &str, max_hp: u64, attack_damage: u64) -> CharacterNft {
    CharacterNft {
        name: name.to_string(),
        image_uri: format!("ipfs://{}", name.to_lowercase()),
        hp: max_hp,
        max_hp,
        attack_damage,
    }
}

#[async_trait]
impl CharacterGateway for MockCharacterGateway {
    async fn fetch_character_for(
        &self,
        account: &Account,
    ) -> Result<CharacterLookup, ContractError> {
        *self
            .lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(account.clone())
            .or_insert(0) += 1;

        if let Some(delay) = self.lookup_delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_lookups {
            return Err(ContractError::Provider(ProviderError::NetworkError(
                "mock lookup failure".to_string(),
            )));
        }

        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .cloned()
            .unwrap_or(CharacterLookup::NotOwned))
    }

    async fn default_characters(&self) -> Result<Vec<CharacterTemplate>, ContractError> {
        Ok(self.templates.clone())
    }

    async fn mint_character(
        &self,
        account: &Account,
        index: u64,
    ) -> Result<TransactionId, ContractError> {
        let template = self
            .templates
            .iter()
            .find(|t| t.index == index)
            .ok_or_else(|| ContractError::Encoding(format!("no template {index}")))?;

        self.records.lock().unwrap_or_else(PoisonError::into_inner).insert(
            account.clone(),
            CharacterLookup::Owned(template.character.clone()),
        );

        Ok(self.next_tx_id())
    }

    async fn big_boss(&self) -> Result<Boss, ContractError> {
        Ok(self.boss())
    }

    async fn attack_boss(&self, account: &Account) -> Result<TransactionId, ContractError> {
        let tx_id = self.next_tx_id();
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(CharacterLookup::Owned(character)) = records.get_mut(account) else {
            return Err(ContractError::Reverted(tx_id));
        };

        let mut boss = self.boss.lock().unwrap_or_else(PoisonError::into_inner);
        if character.hp == 0 || boss.hp == 0 {
            return Err(ContractError::Reverted(tx_id));
        }

        boss.hp = boss.hp.saturating_sub(character.attack_damage);
        character.hp = character.hp.saturating_sub(boss.attack_damage);

        Ok(tx_id)
    }
}
