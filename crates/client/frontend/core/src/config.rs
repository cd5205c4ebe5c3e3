//! Configuration shared by every frontend (terminal today, graphical later).

use std::env;

use crate::message::{MessageLevel, MessageLog};

#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - message log capacity (default: 64)
    /// - `CLI_MESSAGE_LEVEL` - least severe level kept: `info`, `warning`, `error` (default: info)
    /// - `CLI_WELCOME_MESSAGE` - first log line; empty disables it
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut messages = MessageConfig::default();

        if let Some(capacity) = lookup("CLI_MESSAGE_CAPACITY").and_then(|v| v.trim().parse().ok())
        {
            messages.capacity = usize::max(capacity, 1);
        }
        if let Some(level) = lookup("CLI_MESSAGE_LEVEL").and_then(|v| v.parse().ok()) {
            messages.min_level = level;
        }
        if let Some(welcome) = lookup("CLI_WELCOME_MESSAGE") {
            messages.welcome = Some(welcome).filter(|text| !text.trim().is_empty());
        }

        Self { messages }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageConfig {
    pub capacity: usize,
    pub min_level: MessageLevel,
    pub welcome: Option<String>,
}

impl MessageConfig {
    /// Fresh log honoring capacity and level, seeded with the welcome line.
    pub fn build_log(&self) -> MessageLog {
        let mut log = MessageLog::new(self.capacity).with_min_level(self.min_level);
        if let Some(welcome) = &self.welcome {
            log.push_text(welcome.clone());
        }
        log
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            min_level: MessageLevel::Info,
            welcome: Some("Welcome to Epic Game.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vars: &[(&str, &str)]) -> FrontendConfig {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FrontendConfig::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_seed_the_welcome_line() {
        let log = config(&[]).messages.build_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log.recent(1).next().map(|e| e.text.as_str()), Some("Welcome to Epic Game."));
    }

    #[test]
    fn variables_override_defaults() {
        let messages = config(&[
            ("CLI_MESSAGE_CAPACITY", "0"),
            ("CLI_MESSAGE_LEVEL", "warning"),
            ("CLI_WELCOME_MESSAGE", "  "),
        ])
        .messages;

        assert_eq!(messages.capacity, 1);
        assert_eq!(messages.min_level, MessageLevel::Warning);
        assert_eq!(messages.welcome, None);
        assert!(messages.build_log().is_empty());
    }

    #[test]
    fn unknown_level_keeps_default() {
        let messages = config(&[("CLI_MESSAGE_LEVEL", "verbose")]).messages;
        assert_eq!(messages.min_level, MessageLevel::Info);
    }
}
