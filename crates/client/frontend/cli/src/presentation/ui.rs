//! UI rendering entry point.
//!
//! Composes the header, the routed screen body, the message log, and the
//! footer, then overlays the alert modal when one is pending.
use anyhow::Result;
use client_frontend_core::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Draw one frame. Backend-agnostic so tests can use `TestBackend`.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme;
    let state = ctx.state;

    let area = frame.area();
    let [header, body, messages, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(ctx.ui.message_panel_height),
        Constraint::Length(3),
    ])
    .areas(area);

    widgets::header::render(frame, header, state.screen, &state.snapshot);

    match state.screen {
        Screen::Loading => widgets::loading::render(frame, body),
        Screen::ConnectWallet => widgets::connect::render(frame, body),
        Screen::SelectCharacter => widgets::select_character::render(frame, body, state, &theme),
        Screen::Arena => widgets::arena::render(frame, body, state, &theme),
    }

    widgets::messages::render(frame, messages, &state.messages, &theme);
    widgets::footer::render(frame, footer, state.screen, state.current_alert().is_some());

    if let Some(alert) = state.current_alert() {
        widgets::alert::render(frame, area, ctx.ui.alert_width, alert, &theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_blockchain_core::mock::sample_character;
    use client_blockchain_core::{Account, Boss};
    use client_frontend_core::MessageLog;
    use client_session::{Alert, SessionSnapshot, SessionState};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        let ui = UiConfig::default();
        let ctx = RenderContext { state, ui: &ui };
        terminal.draw(|frame| draw(frame, &ctx)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn connect_screen_shows_prompt() {
        let mut state = AppState::new(MessageLog::new(8));
        state.apply_snapshot(SessionSnapshot {
            state: SessionState::Disconnected,
            loading: false,
        });

        let screen = rendered(&state);
        assert!(screen.contains("connect your wallet"));
        assert!(screen.contains("not connected"));
    }

    #[test]
    fn arena_shows_boss_and_character() {
        let mut state = AppState::new(MessageLog::new(8));
        state.apply_snapshot(SessionSnapshot {
            state: SessionState::ConnectedWithCharacter {
                account: Account::new("0xABC").unwrap(),
                character: sample_character("Naruto", 300, 50),
            },
            loading: false,
        });
        state.boss = Some(Boss {
            name: "Kurama".to_string(),
            image_uri: "ipfs://kurama".to_string(),
            hp: 500,
            max_hp: 1000,
            attack_damage: 40,
        });

        let screen = rendered(&state);
        assert!(screen.contains("Boss: Kurama"));
        assert!(screen.contains("Your Character: Naruto"));
        assert!(screen.contains("500 / 1000 HP"));
    }

    #[test]
    fn alert_modal_overlays_the_screen() {
        let mut state = AppState::new(MessageLog::new(8));
        state.push_alert(Alert::error("Install a wallet"));

        let screen = rendered(&state);
        assert!(screen.contains("Install a wallet"));
        assert!(screen.contains("Dismiss"));
    }
}
