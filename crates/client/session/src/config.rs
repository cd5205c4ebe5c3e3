//! Session configuration.

use std::env;

use client_blockchain_core::NetworkId;

/// Channel sizes and network policy for the session runtime.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Capacity of the handle → runtime command queue
    pub command_buffer_size: usize,

    /// Capacity of the alert broadcast channel
    pub alert_capacity: usize,

    /// Network id the wallet should report, if any
    pub expected_network: Option<NetworkId>,

    /// Raise a warning alert when the wallet reports another network
    pub warn_on_network_mismatch: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            alert_capacity: 16,
            expected_network: None,
            warn_on_network_mismatch: true,
        }
    }
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SESSION_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `SESSION_ALERT_CAPACITY` - Alert channel capacity (default: 16)
    /// - `SESSION_WARN_WRONG_NETWORK` - Warn on network mismatch (default: true)
    ///
    /// The expected network comes from the chain configuration, see
    /// [`SessionConfig::with_expected_network`].
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("SESSION_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SESSION_ALERT_CAPACITY") {
            config.alert_capacity = capacity.max(1);
        }
        if let Some(warn) = read_env_bool("SESSION_WARN_WRONG_NETWORK") {
            config.warn_on_network_mismatch = warn;
        }

        config
    }

    pub fn with_expected_network(mut self, network: NetworkId) -> Self {
        self.expected_network = Some(network);
        self
    }

    pub fn with_network_warning(mut self, enabled: bool) -> Self {
        self.warn_on_network_mismatch = enabled;
        self
    }

    /// Network to compare against, or `None` when the check is disabled.
    pub fn network_to_check(&self) -> Option<&NetworkId> {
        if self.warn_on_network_mismatch {
            self.expected_network.as_ref()
        } else {
            None
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_check_requires_expected_network() {
        let config = SessionConfig::default();
        assert!(config.network_to_check().is_none());

        let config = config.with_expected_network(NetworkId::new("5"));
        assert_eq!(config.network_to_check(), Some(&NetworkId::new("5")));

        let config = config.with_network_warning(false);
        assert!(config.network_to_check().is_none());
    }
}
