//! Header widget displaying the current screen and connected account.

use client_frontend_core::{Screen, short_account};
use client_session::SessionSnapshot;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel.
pub fn render(frame: &mut Frame, area: Rect, screen: Screen, snapshot: &SessionSnapshot) {
    let account = match snapshot.state.account() {
        Some(account) => Span::styled(
            short_account(account),
            Style::default().fg(Color::LightGreen),
        ),
        None => Span::styled("not connected", Style::default().fg(Color::DarkGray)),
    };

    let text = vec![Line::from(vec![
        Span::styled(
            screen.title(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Wallet: "),
        account,
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Epic Game"));

    frame.render_widget(paragraph, area);
}
