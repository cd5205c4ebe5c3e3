//! Session state and observable snapshots.

use client_blockchain_core::{Account, CharacterNft, NetworkId};

/// Authentication and character progress of the current user.
///
/// A character can only exist together with the account it belongs to, so
/// the arena is unreachable without both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disconnected,
    ConnectedNoCharacter {
        account: Account,
    },
    ConnectedWithCharacter {
        account: Account,
        character: CharacterNft,
    },
}

impl SessionState {
    pub fn account(&self) -> Option<&Account> {
        match self {
            SessionState::Disconnected => None,
            SessionState::ConnectedNoCharacter { account }
            | SessionState::ConnectedWithCharacter { account, .. } => Some(account),
        }
    }

    pub fn character(&self) -> Option<&CharacterNft> {
        match self {
            SessionState::ConnectedWithCharacter { character, .. } => Some(character),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account().is_some()
    }
}

/// Identifies one character lookup.
///
/// Only the most recently issued ticket may change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupTicket(pub u64);

/// What views observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub loading: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            state: SessionState::Disconnected,
            loading: true,
        }
    }
}

/// Mutable session owned by the runtime and advanced by [`crate::reduce`].
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) state: SessionState,
    pub(crate) loading: bool,
    pub(crate) pending_lookup: Option<LookupTicket>,
    /// An `eth_requestAccounts` prompt is outstanding.
    pub(crate) authorizing: bool,
    pub(crate) next_ticket: u64,
    pub(crate) expected_network: Option<NetworkId>,
}

impl Session {
    /// Fresh session: disconnected and loading until mounted checks finish.
    ///
    /// `expected_network` enables the wrong-network warning.
    pub fn new(expected_network: Option<NetworkId>) -> Self {
        Self {
            state: SessionState::Disconnected,
            loading: true,
            pending_lookup: None,
            authorizing: false,
            next_ticket: 0,
            expected_network,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authorizing(&self) -> bool {
        self.authorizing
    }

    pub fn pending_lookup(&self) -> Option<LookupTicket> {
        self.pending_lookup
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            loading: self.loading,
        }
    }

    pub(crate) fn issue_ticket(&mut self) -> LookupTicket {
        self.next_ticket += 1;
        let ticket = LookupTicket(self.next_ticket);
        self.pending_lookup = Some(ticket);
        ticket
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}
