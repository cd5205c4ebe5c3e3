//! Placeholder shown while the session is busy.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use super::centered_rect;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Loading...")
        .style(RatatuiTheme::hint())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rect(area, 20, 1));
}
