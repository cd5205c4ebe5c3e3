//! Inputs and outputs of the session reducer.

use client_blockchain_core::{
    Account, CharacterLookup, CharacterNft, ContractError, NetworkId, WalletError,
};

use crate::state::LookupTicket;

/// Everything that can happen to a session.
///
/// User intents arrive through [`crate::SessionHandle`]; the other variants
/// are reported back by effect tasks.
#[derive(Debug)]
pub enum SessionEvent {
    /// The client started; run the initial checks.
    Mounted,

    /// Result of the non-interactive authorization check.
    AuthorizationChecked { account: Option<Account> },

    /// The user asked to connect a wallet.
    ConnectRequested,

    /// The user granted access to `account`.
    AuthorizationGranted { account: Account },

    /// The interactive authorization failed.
    AuthorizationFailed { error: WalletError },

    /// A lookup task for `ticket` is running.
    LookupStarted { ticket: LookupTicket },

    /// A lookup task for `ticket` finished.
    LookupResolved {
        ticket: LookupTicket,
        outcome: Result<CharacterLookup, ContractError>,
    },

    /// The selection screen minted or picked a character.
    CharacterSelected { character: CharacterNft },

    /// The arena observed new character stats.
    CharacterUpdated { character: CharacterNft },

    /// Result of the network check; `None` when it could not be determined.
    NetworkChecked { network: Option<NetworkId> },
}

/// Side effects requested by the reducer. The runtime executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    CheckAuthorization,
    CheckNetwork,
    RequestAuthorization,
    FetchCharacter {
        account: Account,
        ticket: LookupTicket,
    },
    ShowAlert(Alert),
}

/// Severity of an [`Alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Warning,
    Error,
}

/// Blocking user-visible notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub text: String,
}

impl Alert {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            text: text.into(),
        }
    }
}
