//! Inspect on-chain game state command
//!
//! Looks up the character held by an address through the configured wallet
//! provider, plus optionally the boss and the mintable default characters.
//! Uses the same `EVM_*` environment as the client.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use client_blockchain_core::{Account, BlockchainConfig, CharacterGateway, CharacterLookup};
use client_blockchain_evm::{EvmCharacterGateway, EvmConfig, HttpWalletProvider};
use console::style;

/// Look up an account's character, the boss, and the mintable characters
#[derive(Parser, Debug)]
pub struct InspectCharacter {
    /// Account address to look up
    pub address: String,

    /// Also show the boss
    #[arg(long)]
    pub boss: bool,

    /// Also list the mintable default characters
    #[arg(long)]
    pub templates: bool,
}

impl InspectCharacter {
    pub fn execute(self) -> Result<()> {
        tokio::runtime::Runtime::new()?.block_on(self.execute_async())
    }

    async fn execute_async(self) -> Result<()> {
        let account = Account::new(&self.address).context("Address must not be empty")?;

        let config = EvmConfig::from_env().map_err(anyhow::Error::msg)?;
        config.validate().map_err(anyhow::Error::msg)?;

        let Some(provider) = HttpWalletProvider::detect(&config).await else {
            eprintln!("{}", style("✗ No wallet provider reachable").red().bold());
            eprintln!("  Set {} or use EVM_NETWORK=local", style("EVM_RPC_URL").cyan());
            anyhow::bail!("No provider for network {}", config.network_name());
        };

        println!("{}", style("🔎 Epic Game Inspector").green().bold());
        println!("  Network:  {}", style(config.network_name()).cyan());
        println!("  Provider: {}", style(provider.url()).dim());
        println!("  Contract: {}", style(&config.contract_address).dim());
        println!();

        let gateway = EvmCharacterGateway::new(Arc::new(provider), &config)?;

        match gateway.fetch_character_for(&account).await? {
            CharacterLookup::Owned(character) => {
                println!("{} {}", style("Character of").bold(), account);
                println!("  Name:   {}", style(&character.name).cyan().bold());
                println!("  HP:     {}/{}", character.hp, character.max_hp);
                println!("  Damage: {}", character.attack_damage);
                println!("  Image:  {}", style(&character.image_uri).dim());
            }
            CharacterLookup::NotOwned => {
                println!("{} holds no character", style(&account).yellow());
            }
        }

        if self.boss {
            let boss = gateway.big_boss().await?;
            println!();
            println!("{}", style("Boss").bold());
            println!("  Name:   {}", style(&boss.name).red().bold());
            println!("  HP:     {}/{}", boss.hp, boss.max_hp);
            println!("  Damage: {}", boss.attack_damage);
        }

        if self.templates {
            let templates = gateway.default_characters().await?;
            println!();
            println!("{}", style("Mintable characters").bold());
            for template in templates {
                let character = template.character;
                println!(
                    "  [{}] {} (HP {}, DMG {})",
                    template.index, character.name, character.max_hp, character.attack_damage
                );
            }
        }

        Ok(())
    }
}
