//! Contract calls issued by screens.
//!
//! Jobs run on the event loop's `JoinSet` and report back a [`JobOutcome`];
//! they never touch UI state themselves.
use std::sync::Arc;

use client_blockchain_core::{
    Account, Boss, CharacterGateway, CharacterLookup, CharacterTemplate, ContractError,
};

/// Work requested by a screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Job {
    /// Fetch the mintable default characters.
    LoadTemplates,
    /// Mint a default character, then look up what the account now owns.
    Mint { account: Account, index: u64 },
    /// Fetch the boss.
    LoadBoss,
    /// Attack, then refresh both the boss and the player's character.
    Attack { account: Account },
}

/// Boss and character after a confirmed attack.
#[derive(Clone, Debug)]
pub struct AttackReport {
    pub boss: Boss,
    pub character: CharacterLookup,
}

#[derive(Debug)]
pub enum JobOutcome {
    Templates(Result<Vec<CharacterTemplate>, ContractError>),
    Minted(Result<CharacterLookup, ContractError>),
    Boss(Result<Boss, ContractError>),
    Attacked(Result<AttackReport, ContractError>),
}

impl Job {
    pub async fn execute(self, gateway: Arc<dyn CharacterGateway>) -> JobOutcome {
        match self {
            Job::LoadTemplates => JobOutcome::Templates(gateway.default_characters().await),
            Job::Mint { account, index } => {
                JobOutcome::Minted(mint_and_lookup(gateway.as_ref(), &account, index).await)
            }
            Job::LoadBoss => JobOutcome::Boss(gateway.big_boss().await),
            Job::Attack { account } => {
                JobOutcome::Attacked(attack_and_refresh(gateway.as_ref(), &account).await)
            }
        }
    }
}

async fn mint_and_lookup(
    gateway: &dyn CharacterGateway,
    account: &Account,
    index: u64,
) -> Result<CharacterLookup, ContractError> {
    let tx = gateway.mint_character(account, index).await?;
    tracing::info!("Minted character {} for {} in {}", index, account, tx);
    gateway.fetch_character_for(account).await
}

async fn attack_and_refresh(
    gateway: &dyn CharacterGateway,
    account: &Account,
) -> Result<AttackReport, ContractError> {
    let tx = gateway.attack_boss(account).await?;
    tracing::info!("Attack by {} confirmed in {}", account, tx);

    let (boss, character) =
        tokio::try_join!(gateway.big_boss(), gateway.fetch_character_for(account))?;
    Ok(AttackReport { boss, character })
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_blockchain_core::mock::{MockCharacterGateway, sample_character};

    fn account() -> Account {
        Account::new("0xABC").unwrap()
    }

    #[tokio::test]
    async fn mint_reports_the_new_character() {
        let gateway = Arc::new(MockCharacterGateway::new());

        let outcome = Job::Mint {
            account: account(),
            index: 1,
        }
        .execute(gateway.clone())
        .await;

        let JobOutcome::Minted(Ok(CharacterLookup::Owned(character))) = outcome else {
            panic!("expected minted character, got {outcome:?}");
        };
        assert_eq!(character.name, "Sasuke");
        assert_eq!(gateway.lookups_for(&account()), 1);
    }

    #[tokio::test]
    async fn attack_refreshes_boss_and_character() {
        let gateway = Arc::new(
            MockCharacterGateway::new()
                .with_character(&account(), sample_character("Naruto", 300, 50)),
        );

        let outcome = Job::Attack { account: account() }
            .execute(gateway.clone())
            .await;

        let JobOutcome::Attacked(Ok(report)) = outcome else {
            panic!("expected attack report, got {outcome:?}");
        };
        assert_eq!(report.boss.hp, 950);
        assert_eq!(report.character.into_character().map(|c| c.hp), Some(260));
    }

    #[tokio::test]
    async fn attack_without_character_fails() {
        let gateway = Arc::new(MockCharacterGateway::new());

        let outcome = Job::Attack { account: account() }.execute(gateway).await;

        assert!(matches!(
            outcome,
            JobOutcome::Attacked(Err(ContractError::Reverted(_)))
        ));
    }
}
