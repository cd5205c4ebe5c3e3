//! Presentation-ready views of characters and the boss.
//!
//! Frontends style these through [`PresentationMapper`] so the health and
//! message colouring rules stay the same across UI toolkits.
use client_blockchain_core::{Account, Boss, CharacterNft};

use crate::message::MessageLevel;

/// Framework-agnostic styling rules.
///
/// Each frontend provides its own `Style` type (ratatui `Style`, CSS class
/// names, ...).
pub trait PresentationMapper {
    type Style;

    /// Style for a health value, usually graded by the remaining fraction.
    fn style_health(&self, current: u64, maximum: u64) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Highlight the focused entry of a list.
    fn emphasize_current(&self, base_style: Self::Style) -> Self::Style;
}

/// Anything with a health bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantView {
    pub name: String,
    pub image_uri: String,
    pub hp: u64,
    pub max_hp: u64,
    pub attack_damage: u64,
}

impl CombatantView {
    /// Health as a fraction in `[0, 1]`.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        (self.hp.min(self.max_hp) as f64) / (self.max_hp as f64)
    }

    pub fn hp_label(&self) -> String {
        format!("{} / {} HP", self.hp, self.max_hp)
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

impl From<&CharacterNft> for CombatantView {
    fn from(character: &CharacterNft) -> Self {
        Self {
            name: character.name.clone(),
            image_uri: character.image_uri.clone(),
            hp: character.hp,
            max_hp: character.max_hp,
            attack_damage: character.attack_damage,
        }
    }
}

impl From<&Boss> for CombatantView {
    fn from(boss: &Boss) -> Self {
        Self {
            name: boss.name.clone(),
            image_uri: boss.image_uri.clone(),
            hp: boss.hp,
            max_hp: boss.max_hp,
            attack_damage: boss.attack_damage,
        }
    }
}

/// Abbreviate long addresses as `0x1234…abcd`.
pub fn short_account(account: &Account) -> String {
    let text = account.as_str();
    if text.len() <= 12 || !text.is_ascii() {
        return text.to_string();
    }
    format!("{}…{}", &text[..6], &text[text.len() - 4..])
}
