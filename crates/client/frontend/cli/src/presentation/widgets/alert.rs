//! Blocking alert modal.

use client_frontend_core::{MessageLevel, PresentationMapper};
use client_session::Alert;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered_rect;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, width: u16, alert: &Alert, theme: &RatatuiTheme) {
    let level = MessageLevel::from(alert.level);
    let title = match level {
        MessageLevel::Error => " Error ",
        _ => " Warning ",
    };

    let popup = centered_rect(area, width, 7);
    let lines = vec![
        Line::from(alert.text.clone()),
        Line::from(""),
        Line::from("[Enter] OK").style(RatatuiTheme::hint()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.style_message(level))
                .title(title),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
