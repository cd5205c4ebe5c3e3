//! Footer widget displaying context-sensitive key bindings.

use client_frontend_core::Screen;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, screen: Screen, modal_open: bool) {
    let text = if modal_open {
        vec![Line::from(vec![Span::raw("[Enter/ESC] Dismiss")])]
    } else {
        match screen {
            Screen::Loading => vec![Line::from(vec![Span::raw("[q] Quit")])],
            Screen::ConnectWallet => vec![Line::from(vec![
                Span::raw("[c/Enter] Connect wallet | "),
                Span::raw("[q] Quit"),
            ])],
            Screen::SelectCharacter => vec![Line::from(vec![
                Span::raw("[↑↓/jk] Select | "),
                Span::raw("[Enter] Mint | "),
                Span::raw("[q] Quit"),
            ])],
            Screen::Arena => vec![Line::from(vec![
                Span::raw("[a] Attack | "),
                Span::raw("[q] Quit"),
            ])],
        }
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
