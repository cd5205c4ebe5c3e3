//! Terminal colours for health bars, log lines, and selection.

use client_frontend_core::{MessageLevel, PresentationMapper};
use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_health(&self, current: u64, maximum: u64) -> Self::Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        // u128 so chain-sized u64 values cannot overflow
        let percent = u128::from(current.min(maximum)) * 100 / u128::from(maximum);
        let color = match percent {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize_current(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}

impl RatatuiTheme {
    pub fn title() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_is_graded_by_fraction() {
        let theme = RatatuiTheme;
        assert_eq!(theme.style_health(300, 300).fg, Some(Color::Green));
        assert_eq!(theme.style_health(150, 300).fg, Some(Color::Yellow));
        assert_eq!(theme.style_health(10, 300).fg, Some(Color::Red));
        assert_eq!(theme.style_health(0, 0).fg, Some(Color::Gray));
    }

    #[test]
    fn huge_health_values_do_not_overflow() {
        let theme = RatatuiTheme;
        assert_eq!(theme.style_health(u64::MAX, u64::MAX).fg, Some(Color::Green));
        assert_eq!(theme.style_health(u64::MAX / 4 * 3, u64::MAX).fg, Some(Color::Yellow));
        assert_eq!(theme.style_health(u64::MAX / 2, u64::MAX).fg, Some(Color::LightRed));
        assert_eq!(theme.style_health(1, u64::MAX).fg, Some(Color::Red));
    }
}
