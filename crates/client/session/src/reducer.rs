//! Pure session transitions.
//!
//! [`reduce`] performs no I/O. It mutates the [`Session`] and returns the
//! effects the runtime has to carry out, which keeps every transition
//! testable without a wallet, a contract or a UI.

use client_blockchain_core::{Account, CharacterLookup, WalletError};
use tracing::{debug, info, warn};

use crate::event::{Alert, SessionEffect, SessionEvent};
use crate::state::{Session, SessionState};

/// Text of the alert raised when no wallet provider is available.
pub const PROVIDER_MISSING_ALERT: &str =
    "No wallet provider detected. Configure a wallet endpoint (EVM_RPC_URL) to connect.";

/// Apply `event` to `session` and return the effects to run.
pub fn reduce(session: &mut Session, event: SessionEvent) -> Vec<SessionEffect> {
    match event {
        SessionEvent::Mounted => {
            session.loading = true;
            vec![SessionEffect::CheckAuthorization, SessionEffect::CheckNetwork]
        }

        SessionEvent::AuthorizationChecked { account } => {
            session.loading = false;
            match account {
                Some(account) => apply_account(session, account),
                None => Vec::new(),
            }
        }

        SessionEvent::ConnectRequested => {
            if let Some(account) = session.state.account() {
                debug!("Already connected as {}; ignoring connect request", account);
                return Vec::new();
            }
            if session.authorizing {
                debug!("Authorization request already pending; ignoring connect request");
                return Vec::new();
            }
            session.authorizing = true;
            vec![SessionEffect::RequestAuthorization]
        }

        SessionEvent::AuthorizationGranted { account } => {
            session.authorizing = false;
            apply_account(session, account)
        }

        SessionEvent::AuthorizationFailed { error } => {
            session.authorizing = false;
            authorization_failed(error)
        }

        SessionEvent::LookupStarted { ticket } => {
            if session.pending_lookup == Some(ticket) {
                session.loading = true;
            }
            Vec::new()
        }

        SessionEvent::LookupResolved { ticket, outcome } => {
            if session.pending_lookup != Some(ticket) {
                debug!("Discarding stale lookup result {:?}", ticket);
                return Vec::new();
            }
            session.pending_lookup = None;
            session.loading = false;

            let Some(account) = session.state.account().cloned() else {
                return Vec::new();
            };

            match outcome {
                Ok(CharacterLookup::Owned(character)) => {
                    info!("{} holds character {}", account, character.name);
                    session.state = SessionState::ConnectedWithCharacter { account, character };
                }
                Ok(CharacterLookup::NotOwned) => {
                    info!("No character NFT found for {}", account);
                }
                Err(e) => {
                    warn!("Character lookup for {} failed: {}", account, e);
                }
            }
            Vec::new()
        }

        SessionEvent::CharacterSelected { character } => {
            match session.state.account().cloned() {
                Some(account) => {
                    info!("{} selected character {}", account, character.name);
                    session.state = SessionState::ConnectedWithCharacter { account, character };
                }
                None => warn!("Character selected without a connected account; ignoring"),
            }
            Vec::new()
        }

        SessionEvent::CharacterUpdated { character } => {
            if let SessionState::ConnectedWithCharacter { character: held, .. } =
                &mut session.state
            {
                *held = character;
            } else {
                debug!("Character update without a held character; ignoring");
            }
            Vec::new()
        }

        SessionEvent::NetworkChecked { network } => {
            let (Some(expected), Some(actual)) = (&session.expected_network, network) else {
                return Vec::new();
            };
            if *expected == actual {
                return Vec::new();
            }
            warn!("Wallet is on network {}, expected {}", actual, expected);
            vec![SessionEffect::ShowAlert(Alert::warning(format!(
                "Please connect to network {} (wallet reports {}).",
                expected, actual
            )))]
        }
    }
}

/// Only a missing provider is user-visible; everything else is logged.
fn authorization_failed(error: WalletError) -> Vec<SessionEffect> {
    match error {
        WalletError::ProviderMissing => {
            warn!("Connect requested without a wallet provider");
            vec![SessionEffect::ShowAlert(Alert::error(PROVIDER_MISSING_ALERT))]
        }
        WalletError::Rejected => {
            info!("User rejected the authorization request");
            Vec::new()
        }
        other => {
            warn!("Authorization failed: {}", other);
            Vec::new()
        }
    }
}

/// Record `account` as current and look its character up.
///
/// The same account is a no-op so a repeated grant never issues a
/// duplicate lookup.
fn apply_account(session: &mut Session, account: Account) -> Vec<SessionEffect> {
    if session.state.account() == Some(&account) {
        debug!("Account {} unchanged", account);
        return Vec::new();
    }

    info!("Connected account: {}", account);
    session.state = SessionState::ConnectedNoCharacter {
        account: account.clone(),
    };
    let ticket = session.issue_ticket();

    vec![SessionEffect::FetchCharacter { account, ticket }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AlertLevel;
    use crate::state::LookupTicket;
    use client_blockchain_core::mock::sample_character;
    use client_blockchain_core::{ContractError, NetworkId, ProviderError};

    fn account(address: &str) -> Account {
        Account::new(address).unwrap()
    }

    fn connected(address: &str) -> (Session, LookupTicket) {
        let mut session = Session::default();
        reduce(&mut session, SessionEvent::Mounted);
        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationChecked {
                account: Some(account(address)),
            },
        );
        let Some(SessionEffect::FetchCharacter { ticket, .. }) = effects.into_iter().next() else {
            panic!("expected a lookup");
        };
        (session, ticket)
    }

    #[test]
    fn mount_starts_loading_and_checks() {
        let mut session = Session::default();
        let effects = reduce(&mut session, SessionEvent::Mounted);

        assert!(session.is_loading());
        assert_eq!(
            effects,
            vec![SessionEffect::CheckAuthorization, SessionEffect::CheckNetwork]
        );
    }

    #[test]
    fn authorization_check_clears_loading_either_way() {
        let mut session = Session::default();
        reduce(&mut session, SessionEvent::Mounted);
        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationChecked { account: None },
        );

        assert!(!session.is_loading());
        assert!(effects.is_empty());
        assert_eq!(session.state(), &SessionState::Disconnected);

        let (session, _) = connected("0xABC");
        assert!(!session.is_loading());
    }

    #[test]
    fn new_account_issues_exactly_one_lookup() {
        let mut session = Session::default();
        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationGranted {
                account: account("0xABC"),
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [SessionEffect::FetchCharacter { account, .. }] if account.as_str() == "0xABC"
        ));

        // Same account again: no second lookup
        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationGranted {
                account: account("0xABC"),
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn switching_accounts_clears_the_character() {
        let (mut session, ticket) = connected("0xABC");
        reduce(
            &mut session,
            SessionEvent::LookupResolved {
                ticket,
                outcome: Ok(CharacterLookup::Owned(sample_character("Naruto", 300, 50))),
            },
        );
        assert!(session.state().character().is_some());

        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationGranted {
                account: account("0xDEF"),
            },
        );
        assert_eq!(
            session.state(),
            &SessionState::ConnectedNoCharacter {
                account: account("0xDEF")
            }
        );
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn lookup_marks_loading_until_resolved() {
        let (mut session, ticket) = connected("0xABC");

        reduce(&mut session, SessionEvent::LookupStarted { ticket });
        assert!(session.is_loading());

        reduce(
            &mut session,
            SessionEvent::LookupResolved {
                ticket,
                outcome: Ok(CharacterLookup::NotOwned),
            },
        );
        assert!(!session.is_loading());
        assert_eq!(
            session.state(),
            &SessionState::ConnectedNoCharacter {
                account: account("0xABC")
            }
        );
    }

    #[test]
    fn owned_lookup_enters_the_arena_state() {
        let (mut session, ticket) = connected("0xABC");
        let character = sample_character("Naruto", 300, 50);

        reduce(
            &mut session,
            SessionEvent::LookupResolved {
                ticket,
                outcome: Ok(CharacterLookup::Owned(character.clone())),
            },
        );

        assert_eq!(session.state().character(), Some(&character));
        assert_eq!(session.pending_lookup(), None);
    }

    #[test]
    fn failed_lookup_is_swallowed() {
        let (mut session, ticket) = connected("0xABC");
        reduce(
            &mut session,
            SessionEvent::LookupResolved {
                ticket,
                outcome: Err(ContractError::Provider(ProviderError::NetworkError(
                    "down".into(),
                ))),
            },
        );

        assert!(!session.is_loading());
        assert_eq!(session.state().account(), Some(&account("0xABC")));
        assert!(session.state().character().is_none());
    }

    #[test]
    fn stale_lookup_results_are_discarded() {
        let (mut session, old_ticket) = connected("0xABC");
        reduce(
            &mut session,
            SessionEvent::AuthorizationGranted {
                account: account("0xDEF"),
            },
        );
        reduce(&mut session, SessionEvent::LookupStarted { ticket: old_ticket });

        reduce(
            &mut session,
            SessionEvent::LookupResolved {
                ticket: old_ticket,
                outcome: Ok(CharacterLookup::Owned(sample_character("Naruto", 300, 50))),
            },
        );

        assert_eq!(
            session.state(),
            &SessionState::ConnectedNoCharacter {
                account: account("0xDEF")
            }
        );
        assert!(session.pending_lookup().is_some());
    }

    #[test]
    fn missing_provider_raises_one_alert() {
        let mut session = Session::default();
        assert_eq!(
            reduce(&mut session, SessionEvent::ConnectRequested),
            vec![SessionEffect::RequestAuthorization]
        );

        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationFailed {
                error: WalletError::ProviderMissing,
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [SessionEffect::ShowAlert(alert)] if alert.level == AlertLevel::Error
        ));
        assert_eq!(session.state(), &SessionState::Disconnected);

        // Rejections and other failures stay silent
        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationFailed {
                error: WalletError::Rejected,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn repeated_connect_while_pending_requests_once() {
        let mut session = Session::default();
        assert_eq!(
            reduce(&mut session, SessionEvent::ConnectRequested),
            vec![SessionEffect::RequestAuthorization]
        );
        assert!(session.is_authorizing());

        // Second press before the wallet answers
        assert!(reduce(&mut session, SessionEvent::ConnectRequested).is_empty());

        reduce(
            &mut session,
            SessionEvent::AuthorizationGranted {
                account: account("0xABC"),
            },
        );
        assert!(!session.is_authorizing());
    }

    #[test]
    fn failed_authorization_allows_another_attempt() {
        let mut session = Session::default();
        reduce(&mut session, SessionEvent::ConnectRequested);
        reduce(&mut session, SessionEvent::ConnectRequested);

        let effects = reduce(
            &mut session,
            SessionEvent::AuthorizationFailed {
                error: WalletError::Rejected,
            },
        );
        assert!(effects.is_empty());
        assert!(!session.is_authorizing());

        assert_eq!(
            reduce(&mut session, SessionEvent::ConnectRequested),
            vec![SessionEffect::RequestAuthorization]
        );
    }

    #[test]
    fn connect_is_ignored_once_connected() {
        let (mut session, _) = connected("0xABC");
        assert!(reduce(&mut session, SessionEvent::ConnectRequested).is_empty());
    }

    #[test]
    fn selection_and_updates_require_the_right_state() {
        let mut session = Session::default();
        let naruto = sample_character("Naruto", 300, 50);

        reduce(
            &mut session,
            SessionEvent::CharacterSelected {
                character: naruto.clone(),
            },
        );
        assert_eq!(session.state(), &SessionState::Disconnected);

        let (mut session, _) = connected("0xABC");
        reduce(
            &mut session,
            SessionEvent::CharacterUpdated {
                character: naruto.clone(),
            },
        );
        assert!(session.state().character().is_none());

        reduce(
            &mut session,
            SessionEvent::CharacterSelected {
                character: naruto.clone(),
            },
        );
        let mut wounded = naruto;
        wounded.hp = 120;
        reduce(
            &mut session,
            SessionEvent::CharacterUpdated {
                character: wounded.clone(),
            },
        );
        assert_eq!(session.state().character(), Some(&wounded));
    }

    #[test]
    fn wrong_network_warns_only_when_configured() {
        let mut session = Session::default();
        let effects = reduce(
            &mut session,
            SessionEvent::NetworkChecked {
                network: Some(NetworkId::new("1")),
            },
        );
        assert!(effects.is_empty());

        let mut session = Session::new(Some(NetworkId::new("5")));
        let effects = reduce(
            &mut session,
            SessionEvent::NetworkChecked {
                network: Some(NetworkId::new("5")),
            },
        );
        assert!(effects.is_empty());

        let effects = reduce(
            &mut session,
            SessionEvent::NetworkChecked {
                network: Some(NetworkId::new("1")),
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [SessionEffect::ShowAlert(alert)] if alert.level == AlertLevel::Warning
        ));

        let effects = reduce(&mut session, SessionEvent::NetworkChecked { network: None });
        assert!(effects.is_empty());
    }
}
