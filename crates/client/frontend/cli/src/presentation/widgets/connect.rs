//! Connect-wallet screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::centered_rect;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("EPIC GAME", RatatuiTheme::title())),
        Line::from(""),
        Line::from("Team up to protect the Metaverse!"),
        Line::from(""),
        Line::from("Press [c] to connect your wallet"),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, centered_rect(area, 44, 7));
}
