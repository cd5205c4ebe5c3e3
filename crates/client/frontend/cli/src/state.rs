//! Application state for screen management and UI context.
//!
//! Everything here is synchronous: the event loop feeds snapshots, key
//! actions and job outcomes in, and executes the returned [`Reaction`]s,
//! [`Job`]s and [`SessionIntent`]s.

use std::collections::VecDeque;

use client_blockchain_core::{Account, Boss, CharacterLookup, CharacterNft, CharacterTemplate};
use client_frontend_core::{MessageEntry, MessageLog, Screen, route};
use client_session::{Alert, SessionSnapshot};

use crate::event::{AttackReport, Job, JobOutcome};
use crate::input::KeyAction;

/// Long-running contract call the player is waiting on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activity {
    LoadingCharacters,
    Minting { name: String },
    Attacking,
}

/// What the event loop should do after a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reaction {
    Quit,
    Connect,
    Spawn(Job),
    Nothing,
}

/// Character change to report to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Select(CharacterNft),
    Update(CharacterNft),
}

/// Mutable UI state for the terminal client.
#[derive(Debug)]
pub struct AppState {
    pub snapshot: SessionSnapshot,
    pub screen: Screen,
    pub messages: MessageLog,
    pub templates: Vec<CharacterTemplate>,
    pub selected: usize,
    pub boss: Option<Boss>,
    pub activity: Option<Activity>,
    alerts: VecDeque<Alert>,
}

impl AppState {
    pub fn new(messages: MessageLog) -> Self {
        Self {
            snapshot: SessionSnapshot::default(),
            screen: Screen::Loading,
            messages,
            templates: Vec::new(),
            selected: 0,
            boss: None,
            activity: None,
            alerts: VecDeque::new(),
        }
    }

    fn account(&self) -> Option<&Account> {
        self.snapshot.state.account()
    }

    // ========================================================================
    // Session snapshots
    // ========================================================================

    /// Store a new snapshot and return the jobs the entered screen needs.
    pub fn apply_snapshot(&mut self, snapshot: SessionSnapshot) -> Vec<Job> {
        let screen = route(&snapshot);
        self.snapshot = snapshot;

        if screen == self.screen {
            return Vec::new();
        }

        tracing::debug!("Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        self.enter_screen()
    }

    fn enter_screen(&mut self) -> Vec<Job> {
        match self.screen {
            Screen::SelectCharacter => {
                self.templates.clear();
                self.selected = 0;
                self.activity = Some(Activity::LoadingCharacters);
                vec![Job::LoadTemplates]
            }
            Screen::Arena => {
                self.boss = None;
                if let Some(character) = self.snapshot.state.character() {
                    self.messages.push_text(format!("{} enters the arena.", character.name));
                }
                vec![Job::LoadBoss]
            }
            Screen::ConnectWallet => {
                self.activity = None;
                Vec::new()
            }
            Screen::Loading => Vec::new(),
        }
    }

    // ========================================================================
    // Alerts
    // ========================================================================

    /// Record an alert in the log and queue it for the modal.
    pub fn push_alert(&mut self, alert: Alert) {
        self.messages.push(MessageEntry::from(&alert));
        self.alerts.push_back(alert);
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    // ========================================================================
    // Key actions
    // ========================================================================

    pub fn on_key(&mut self, action: KeyAction) -> Reaction {
        match action {
            KeyAction::Quit => Reaction::Quit,
            KeyAction::Connect => {
                self.messages.push_text("Requesting wallet authorization...");
                Reaction::Connect
            }
            KeyAction::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                Reaction::Nothing
            }
            KeyAction::SelectNext => {
                if self.selected + 1 < self.templates.len() {
                    self.selected += 1;
                }
                Reaction::Nothing
            }
            KeyAction::Mint => self.mint_selected(),
            KeyAction::Attack => self.attack(),
            KeyAction::DismissAlert => {
                self.dismiss_alert();
                Reaction::Nothing
            }
            KeyAction::None => Reaction::Nothing,
        }
    }

    fn mint_selected(&mut self) -> Reaction {
        if self.activity.is_some() {
            return Reaction::Nothing;
        }
        let (Some(account), Some(template)) =
            (self.account().cloned(), self.templates.get(self.selected))
        else {
            return Reaction::Nothing;
        };

        let name = template.character.name.clone();
        let index = template.index;
        self.messages.push_text(format!("Minting {}...", name));
        self.activity = Some(Activity::Minting { name });
        Reaction::Spawn(Job::Mint { account, index })
    }

    fn attack(&mut self) -> Reaction {
        if self.activity.is_some() {
            return Reaction::Nothing;
        }
        let Some(account) = self.account().cloned() else {
            return Reaction::Nothing;
        };
        let Some(boss) = &self.boss else {
            self.messages.push_warning("The boss is still loading.");
            return Reaction::Nothing;
        };

        if boss.hp == 0 {
            self.messages.push_warning(format!("{} is already defeated.", boss.name));
            return Reaction::Nothing;
        }
        if let Some(character) = self.snapshot.state.character()
            && character.is_defeated()
        {
            self.messages.push_warning(format!("{} has no HP left.", character.name));
            return Reaction::Nothing;
        }

        self.messages.push_text(format!("Attacking {}...", boss.name));
        self.activity = Some(Activity::Attacking);
        Reaction::Spawn(Job::Attack { account })
    }

    // ========================================================================
    // Job outcomes
    // ========================================================================

    pub fn on_outcome(&mut self, outcome: JobOutcome) -> Option<SessionIntent> {
        match outcome {
            JobOutcome::Templates(result) => {
                self.finish(&Activity::LoadingCharacters);
                match result {
                    Ok(templates) if self.screen == Screen::SelectCharacter => {
                        self.templates = templates;
                        self.selected = self.selected.min(self.templates.len().saturating_sub(1));
                    }
                    Ok(_) => {}
                    Err(err) => self.report_failure("Failed to load characters", &err),
                }
                None
            }
            JobOutcome::Minted(result) => {
                self.activity = None;
                match result {
                    Ok(CharacterLookup::Owned(character)) => {
                        self.messages.push_text(format!("Minted {}.", character.name));
                        Some(SessionIntent::Select(character))
                    }
                    Ok(CharacterLookup::NotOwned) => {
                        self.messages
                            .push_warning("Mint confirmed but no character is on record yet.");
                        None
                    }
                    Err(err) => {
                        self.report_failure("Mint failed", &err);
                        None
                    }
                }
            }
            JobOutcome::Boss(result) => {
                match result {
                    Ok(boss) => self.boss = Some(boss),
                    Err(err) => self.report_failure("Failed to load the boss", &err),
                }
                None
            }
            JobOutcome::Attacked(result) => {
                self.activity = None;
                match result {
                    Ok(report) => self.record_attack(report),
                    Err(err) => {
                        self.report_failure("Attack failed", &err);
                        None
                    }
                }
            }
        }
    }

    fn record_attack(&mut self, report: AttackReport) -> Option<SessionIntent> {
        self.messages.push_text(format!(
            "Hit {}! Boss HP {}/{}.",
            report.boss.name, report.boss.hp, report.boss.max_hp
        ));
        self.boss = Some(report.boss);
        report.character.into_character().map(SessionIntent::Update)
    }

    fn finish(&mut self, activity: &Activity) {
        if self.activity.as_ref() == Some(activity) {
            self.activity = None;
        }
    }

    fn report_failure(&mut self, context: &str, err: &dyn std::error::Error) {
        tracing::warn!("{}: {}", context, err);
        self.messages.push_error(format!("{}: {}", context, err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_blockchain_core::mock::sample_character;
    use client_blockchain_core::{ContractError, ProviderError};
    use client_session::SessionState;

    fn account() -> Account {
        Account::new("0xABC").unwrap()
    }

    fn no_character() -> SessionSnapshot {
        SessionSnapshot {
            state: SessionState::ConnectedNoCharacter { account: account() },
            loading: false,
        }
    }

    fn with_character(character: CharacterNft) -> SessionSnapshot {
        SessionSnapshot {
            state: SessionState::ConnectedWithCharacter {
                account: account(),
                character,
            },
            loading: false,
        }
    }

    fn templates() -> Vec<CharacterTemplate> {
        vec![
            CharacterTemplate {
                index: 0,
                character: sample_character("Naruto", 300, 50),
            },
            CharacterTemplate {
                index: 1,
                character: sample_character("Sasuke", 250, 70),
            },
        ]
    }

    fn boss(hp: u64) -> Boss {
        Boss {
            name: "Kurama".to_string(),
            image_uri: "ipfs://kurama".to_string(),
            hp,
            max_hp: 1000,
            attack_damage: 40,
        }
    }

    #[test]
    fn starts_on_loading_screen() {
        let state = AppState::new(MessageLog::new(8));
        assert_eq!(state.screen, Screen::Loading);
        assert!(state.current_alert().is_none());
    }

    #[test]
    fn entering_selection_loads_templates_once() {
        let mut state = AppState::new(MessageLog::new(8));

        assert_eq!(state.apply_snapshot(no_character()), vec![Job::LoadTemplates]);
        assert_eq!(state.activity, Some(Activity::LoadingCharacters));

        // Same screen again: nothing to reload
        assert!(state.apply_snapshot(no_character()).is_empty());
    }

    #[test]
    fn mint_selected_template_then_select() {
        let mut state = AppState::new(MessageLog::new(8));
        state.apply_snapshot(no_character());
        state.on_outcome(JobOutcome::Templates(Ok(templates())));
        assert!(state.activity.is_none());

        state.on_key(KeyAction::SelectNext);
        state.on_key(KeyAction::SelectNext);
        assert_eq!(state.selected, 1);

        let reaction = state.on_key(KeyAction::Mint);
        assert_eq!(
            reaction,
            Reaction::Spawn(Job::Mint {
                account: account(),
                index: 1
            })
        );

        // A second press while minting is ignored
        assert_eq!(state.on_key(KeyAction::Mint), Reaction::Nothing);

        let sasuke = sample_character("Sasuke", 250, 70);
        let intent = state.on_outcome(JobOutcome::Minted(Ok(CharacterLookup::Owned(
            sasuke.clone(),
        ))));
        assert_eq!(intent, Some(SessionIntent::Select(sasuke)));
        assert!(state.activity.is_none());
    }

    #[test]
    fn entering_arena_loads_boss_and_attack_updates_character() {
        let mut state = AppState::new(MessageLog::new(8));
        let naruto = sample_character("Naruto", 300, 50);

        assert_eq!(
            state.apply_snapshot(with_character(naruto.clone())),
            vec![Job::LoadBoss]
        );

        // Boss not loaded yet
        assert_eq!(state.on_key(KeyAction::Attack), Reaction::Nothing);

        state.on_outcome(JobOutcome::Boss(Ok(boss(1000))));
        assert_eq!(
            state.on_key(KeyAction::Attack),
            Reaction::Spawn(Job::Attack { account: account() })
        );

        let mut hurt = naruto;
        hurt.hp = 260;
        let intent = state.on_outcome(JobOutcome::Attacked(Ok(AttackReport {
            boss: boss(950),
            character: CharacterLookup::Owned(hurt.clone()),
        })));

        assert_eq!(intent, Some(SessionIntent::Update(hurt)));
        assert_eq!(state.boss.as_ref().map(|b| b.hp), Some(950));
    }

    #[test]
    fn defeated_character_cannot_attack() {
        let mut state = AppState::new(MessageLog::new(8));
        let mut naruto = sample_character("Naruto", 300, 50);
        naruto.hp = 0;
        state.apply_snapshot(with_character(naruto));
        state.on_outcome(JobOutcome::Boss(Ok(boss(1000))));

        assert_eq!(state.on_key(KeyAction::Attack), Reaction::Nothing);
        assert!(state.activity.is_none());
    }

    #[test]
    fn failures_are_logged_not_alerted() {
        let mut state = AppState::new(MessageLog::new(8));
        state.apply_snapshot(with_character(sample_character("Naruto", 300, 50)));

        let err = ContractError::Provider(ProviderError::NetworkError("down".to_string()));
        assert!(state.on_outcome(JobOutcome::Boss(Err(err))).is_none());

        assert!(state.current_alert().is_none());
        assert!(state.messages.iter().any(|m| m.text.contains("down")));
    }

    #[test]
    fn alerts_queue_and_dismiss_in_order() {
        let mut state = AppState::new(MessageLog::new(8));
        state.push_alert(Alert::error("first"));
        state.push_alert(Alert::warning("second"));

        assert_eq!(state.current_alert().map(|a| a.text.as_str()), Some("first"));
        state.on_key(KeyAction::DismissAlert);
        assert_eq!(state.current_alert().map(|a| a.text.as_str()), Some("second"));
        state.on_key(KeyAction::DismissAlert);
        assert!(state.current_alert().is_none());
        assert_eq!(state.messages.len(), 2);
    }
}
