//! Message log panel, newest line at the bottom.

use client_frontend_core::{MessageLevel, MessageLog, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &MessageLog,
    theme: &T,
) {
    let visible = area.height.saturating_sub(2) as usize;

    let mut items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| {
            let text = format!("{}{}", marker(entry.level), entry.text);
            ListItem::new(text).style(theme.style_message(entry.level))
        })
        .collect();

    // Pad so the panel keeps its height
    items.resize_with(visible.max(items.len()), || ListItem::new(""));

    let title = format!("Messages ({})", messages.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn marker(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "  ",
        MessageLevel::Warning => "! ",
        MessageLevel::Error => "✗ ",
    }
}
