//! Character selection screen: default characters available to mint.

use client_frontend_core::{CombatantView, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::{Activity, AppState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &RatatuiTheme) {
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let items: Vec<ListItem> = state
        .templates
        .iter()
        .enumerate()
        .map(|(idx, template)| {
            let view = CombatantView::from(&template.character);
            let line = Line::from(vec![
                Span::raw(format!("{:<16}", view.name)),
                Span::styled(
                    format!("HP {:>5}", view.max_hp),
                    theme.style_health(view.hp, view.max_hp),
                ),
                Span::raw(format!("  DMG {:>4}", view.attack_damage)),
            ]);

            let style = if idx == state.selected {
                theme.emphasize_current(Style::default())
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Mint your hero"),
    );
    frame.render_widget(list, list_area);

    let status = match &state.activity {
        Some(Activity::LoadingCharacters) => "Loading characters...".to_string(),
        Some(Activity::Minting { name }) => format!("Minting {}, waiting for confirmation...", name),
        _ if state.templates.is_empty() => "No characters available.".to_string(),
        _ => String::new(),
    };
    frame.render_widget(
        Paragraph::new(status).style(RatatuiTheme::hint()),
        status_area,
    );
}
