//! User session state machine for the Epic Game client.
//!
//! The session tracks whether a wallet account is connected and whether it
//! holds a character NFT:
//!
//! ```text
//! Disconnected ──account──→ ConnectedNoCharacter ──character──→ ConnectedWithCharacter
//! ```
//!
//! Transitions are a [`SessionEvent`] fed to the pure [`reduce`] function,
//! which returns [`SessionEffect`]s. [`SessionRuntime`] executes those
//! effects against the wallet and the contract gateway and publishes
//! [`SessionSnapshot`]s and [`Alert`]s to views through a [`SessionHandle`].
//!
//! # Usage
//!
//! ```ignore
//! let runtime = SessionRuntime::new(wallet, gateway, SessionConfig::from_env());
//! let handle = runtime.handle();
//! let session = tokio::spawn(runtime.run());
//!
//! handle.connect().await?;
//! let mut snapshots = handle.subscribe();
//! snapshots.changed().await?;
//!
//! session.abort(); // aborts in-flight lookups too
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod handle;
pub mod reducer;
pub mod runtime;
pub mod state;

mod worker;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use event::{Alert, AlertLevel, SessionEffect, SessionEvent};
pub use handle::SessionHandle;
pub use reducer::{PROVIDER_MISSING_ALERT, reduce};
pub use runtime::SessionRuntime;
pub use state::{LookupTicket, Session, SessionSnapshot, SessionState};
