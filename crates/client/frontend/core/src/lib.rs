//! Cross-frontend primitives for presenting the game.
//!
//! Houses the view router, message logging, and view-model types that both
//! the terminal client and future graphical clients can reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod router;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use router::{Screen, route};
pub use view_model::{CombatantView, PresentationMapper, short_account};
