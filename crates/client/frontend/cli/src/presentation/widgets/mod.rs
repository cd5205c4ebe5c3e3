//! Widget modules for the terminal UI.
//!
//! Each widget is a pure render function over borrowed state.
pub mod alert;
pub mod arena;
pub mod connect;
pub mod footer;
pub mod header;
pub mod loading;
pub mod messages;
pub mod select_character;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}
