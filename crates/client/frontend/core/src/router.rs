//! Screen selection from session state.
//!
//! Pure function of the snapshot; no screen keeps its own notion of which
//! screen should be shown.

use client_session::{SessionSnapshot, SessionState};

/// Top-level screen to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Loading,
    ConnectWallet,
    SelectCharacter,
    Arena,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Loading => "Loading",
            Screen::ConnectWallet => "Connect Wallet",
            Screen::SelectCharacter => "Choose Your Character",
            Screen::Arena => "Arena",
        }
    }
}

/// Map a session snapshot to the screen that should be shown.
pub fn route(snapshot: &SessionSnapshot) -> Screen {
    if snapshot.loading {
        return Screen::Loading;
    }

    match snapshot.state {
        SessionState::Disconnected => Screen::ConnectWallet,
        SessionState::ConnectedNoCharacter { .. } => Screen::SelectCharacter,
        SessionState::ConnectedWithCharacter { .. } => Screen::Arena,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_blockchain_core::Account;
    use client_blockchain_core::mock::sample_character;

    fn snapshot(state: SessionState, loading: bool) -> SessionSnapshot {
        SessionSnapshot { state, loading }
    }

    #[test]
    fn loading_wins_over_every_state() {
        let account = Account::new("0xABC").unwrap();
        for state in [
            SessionState::Disconnected,
            SessionState::ConnectedNoCharacter {
                account: account.clone(),
            },
            SessionState::ConnectedWithCharacter {
                account,
                character: sample_character("Naruto", 300, 50),
            },
        ] {
            assert_eq!(route(&snapshot(state, true)), Screen::Loading);
        }
    }

    #[test]
    fn routes_by_session_state() {
        let account = Account::new("0xABC").unwrap();

        assert_eq!(
            route(&snapshot(SessionState::Disconnected, false)),
            Screen::ConnectWallet
        );
        assert_eq!(
            route(&snapshot(
                SessionState::ConnectedNoCharacter {
                    account: account.clone()
                },
                false
            )),
            Screen::SelectCharacter
        );
        assert_eq!(
            route(&snapshot(
                SessionState::ConnectedWithCharacter {
                    account,
                    character: sample_character("Naruto", 300, 50),
                },
                false
            )),
            Screen::Arena
        );
    }

    #[test]
    fn initial_snapshot_shows_loading() {
        assert_eq!(route(&SessionSnapshot::default()), Screen::Loading);
    }
}
