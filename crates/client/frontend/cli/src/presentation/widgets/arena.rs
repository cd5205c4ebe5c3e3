//! Arena screen: the boss on the left, the player's character on the right.

use client_frontend_core::{CombatantView, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::{Activity, AppState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &RatatuiTheme) {
    let [fighters, status_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).areas(area);
    let [boss_area, player_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(fighters);

    match &state.boss {
        Some(boss) => {
            let view = CombatantView::from(boss);
            render_combatant(frame, boss_area, "Boss", &view, theme);
        }
        None => frame.render_widget(
            Paragraph::new("Summoning the boss...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Boss")),
            boss_area,
        ),
    }

    if let Some(character) = state.snapshot.state.character() {
        let view = CombatantView::from(character);
        render_combatant(frame, player_area, "Your Character", &view, theme);
    }

    let status = match (&state.activity, &state.boss) {
        (Some(Activity::Attacking), Some(boss)) => format!("Attacking {}...", boss.name),
        (_, Some(boss)) if boss.hp == 0 => format!("{} has been defeated!", boss.name),
        _ => String::new(),
    };
    frame.render_widget(
        Paragraph::new(status).style(RatatuiTheme::hint()),
        status_area,
    );
}

fn render_combatant(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    view: &CombatantView,
    theme: &RatatuiTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{}: {}", title, view.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [gauge_area, details_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

    let gauge = Gauge::default()
        .gauge_style(theme.style_health(view.hp, view.max_hp))
        .ratio(view.hp_ratio())
        .label(view.hp_label());
    frame.render_widget(gauge, gauge_area);

    let details = vec![
        Line::from(format!("Attack damage: {}", view.attack_damage)),
        Line::from(view.image_uri.clone()).style(RatatuiTheme::hint()),
    ];
    frame.render_widget(Paragraph::new(details), details_area);
}
