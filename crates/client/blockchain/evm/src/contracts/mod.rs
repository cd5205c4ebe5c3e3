//! Contract bindings.
//!
//! Each module mirrors one on-chain contract.

pub mod epic_game;

pub use epic_game::{BigBoss, CharacterAttributes, EpicGameContract};
