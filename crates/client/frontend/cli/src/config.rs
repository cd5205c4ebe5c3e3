//! Terminal layout and pacing settings.
use std::env;
use std::time::Duration;

const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
const MIN_ALERT_WIDTH: u16 = 24;
const MIN_FRAME_INTERVAL_MS: u64 = 4;

/// CLI terminal UI configuration, separate from the cross-frontend
/// [`FrontendConfig`](client_frontend_core::FrontendConfig).
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - message panel rows incl. borders (default: 8, min 3)
    /// - `CLI_ALERT_WIDTH` - alert modal columns (default: 50, min 24)
    /// - `CLI_FRAME_INTERVAL_MS` - input poll / redraw tick (default: 16, min 4)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut ui = UiConfig::default();

        if let Some(height) = parse::<u16>(&lookup, "CLI_MESSAGE_PANEL_HEIGHT") {
            ui.message_panel_height = height.max(MIN_MESSAGE_PANEL_HEIGHT);
        }
        if let Some(width) = parse::<u16>(&lookup, "CLI_ALERT_WIDTH") {
            ui.alert_width = width.max(MIN_ALERT_WIDTH);
        }
        if let Some(ms) = parse::<u64>(&lookup, "CLI_FRAME_INTERVAL_MS") {
            ui.frame_interval = Duration::from_millis(ms.max(MIN_FRAME_INTERVAL_MS));
        }

        Self { ui }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Height of the message panel in lines, borders included.
    pub message_panel_height: u16,
    /// Width of the alert modal; clipped to the terminal.
    pub alert_width: u16,
    pub frame_interval: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            alert_width: 50,
            frame_interval: Duration::from_millis(16),
        }
    }
}

fn parse<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}
