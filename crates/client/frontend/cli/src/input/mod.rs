//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::Screen;
use crossterm::event::{KeyCode, KeyEvent};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Ask the wallet for authorization.
    Connect,
    /// Move the character selection cursor.
    SelectPrev,
    SelectNext,
    /// Mint the highlighted default character.
    Mint,
    /// Attack the boss.
    Attack,
    /// Close the alert modal.
    DismissAlert,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current screen.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// An open alert modal swallows everything except its dismiss keys.
    pub fn handle_key(&self, key: KeyEvent, screen: Screen, modal_open: bool) -> KeyAction {
        if modal_open {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => KeyAction::DismissAlert,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => KeyAction::Quit,
            code => self.handle_screen_key(code, screen),
        }
    }

    fn handle_screen_key(&self, code: KeyCode, screen: Screen) -> KeyAction {
        match (screen, code) {
            (Screen::ConnectWallet, KeyCode::Enter) => KeyAction::Connect,
            (Screen::ConnectWallet, KeyCode::Char('c' | 'C')) => KeyAction::Connect,

            (Screen::SelectCharacter, KeyCode::Up | KeyCode::Char('k')) => KeyAction::SelectPrev,
            (Screen::SelectCharacter, KeyCode::Down | KeyCode::Char('j')) => KeyAction::SelectNext,
            (Screen::SelectCharacter, KeyCode::Enter) => KeyAction::Mint,

            (Screen::Arena, KeyCode::Char('a' | 'A')) => KeyAction::Attack,

            _ => KeyAction::None,
        }
    }
}
