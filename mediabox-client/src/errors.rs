//! Error types for the MediaBox client.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during MediaBox client operation.
#[derive(Debug, Error)]
pub enum MediaBoxError {
    /// Transport-level error (TCP, socket operations).
    #[error("Transport error: {0}")]
    Transport(#[from] io::Error),

    /// Connection failed (TCP connection establishment failed).
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// No active connection; the operation requires an open stream.
    #[error("No active connection to MediaBox")]
    NoConnection,

    /// A connection is already open; disconnect before reconnecting.
    #[error("Already connected to MediaBox")]
    AlreadyConnected,

    /// The device closed the stream while an operation was pending.
    #[error("Connection closed by MediaBox")]
    ConnectionClosed,

    /// The handshake did not complete in time.
    #[error("Handshake timeout after {0:?}")]
    Timeout(Duration),

    /// Unknown button name (not present in the lookup table).
    #[error("'{0}' is not a button name")]
    UnknownButton(String),

    /// Hex data could not be decoded.
    #[error("Invalid hex data: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Key code rejected by strict validation.
    #[error("Invalid key code: {0}")]
    InvalidCode(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MediaBoxError {
    /// Returns true if this error is recoverable by the caller.
    ///
    /// Recoverable errors can be retried after corrective action (reconnect,
    /// supply a valid button name). Non-recoverable errors are fatal
    /// conditions like invalid configuration.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}
