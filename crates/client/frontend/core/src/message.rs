//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use client_session::{Alert, AlertLevel};

/// Severity level for UI messages, ordered from least to most severe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl std::str::FromStr for MessageLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(MessageLevel::Info),
            "warn" | "warning" => Ok(MessageLevel::Warning),
            "error" => Ok(MessageLevel::Error),
            other => Err(format!("unknown message level: {other}")),
        }
    }
}

impl From<AlertLevel> for MessageLevel {
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Warning => MessageLevel::Warning,
            AlertLevel::Error => MessageLevel::Error,
        }
    }
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

impl From<&Alert> for MessageEntry {
    fn from(alert: &Alert) -> Self {
        Self::new(alert.text.clone(), alert.level.into())
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    min_level: MessageLevel,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            min_level: MessageLevel::Info,
        }
    }

    /// Drop entries less severe than `level`.
    pub fn with_min_level(mut self, level: MessageLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if entry.level < self.min_level {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Info));
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Warning));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Error));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
