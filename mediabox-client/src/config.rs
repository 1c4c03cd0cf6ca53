//! Configuration types for the MediaBox client.

use crate::errors::MediaBoxError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default MediaBox control port.
pub const DEFAULT_PORT: u16 = 5900;

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// MediaBox client configuration.
///
/// # Examples
///
/// ```
/// use mediabox_client::Config;
///
/// // Defaults: port 5900, 10 s handshake timeout, permissive key codes
/// let config = Config::new("192.168.1.50");
/// assert_eq!(config.port, 5900);
///
/// let config = Config::new("192.168.1.50").with_port(5901);
/// assert_eq!(config.port, 5901);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Device hostname or IP address.
    pub host: String,

    /// Device control port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Handshake timeout in milliseconds. The device drives a four-event
    /// handshake with no protocol-level timeout of its own; this bound keeps
    /// `connect` from hanging forever against a stalled device.
    #[serde(default = "default_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Reject key codes that are not exactly six hex characters.
    ///
    /// The protocol itself accepts any byte sequence after the frame header,
    /// so the default is permissive: caller-supplied codes pass through
    /// unvalidated, malformed input and all.
    #[serde(default)]
    pub strict_codes: bool,
}

impl Config {
    /// Create a configuration for the given host with default settings.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            connect_timeout_ms: default_timeout_ms(),
            strict_codes: false,
        }
    }

    /// Override the control port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the handshake timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Enable strict key-code validation.
    #[must_use]
    pub fn with_strict_codes(mut self, strict: bool) -> Self {
        self.strict_codes = strict;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MediaBoxError::Config`] if the host is empty or the port
    /// is zero.
    pub fn validate(&self) -> Result<(), MediaBoxError> {
        if self.host.is_empty() {
            return Err(MediaBoxError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(MediaBoxError::Config("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Handshake timeout as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("192.168.1.50");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert!(!config.strict_codes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = Config::new("192.168.1.50").with_port(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_empty_host_rejected() {
        let config = Config::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let config: Config = serde_json::from_str(r#"{"host": "10.0.0.2"}"#).unwrap();
        assert_eq!(config.host, "10.0.0.2");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.connect_timeout_ms, 10_000);
        assert!(!config.strict_codes);
    }
}
