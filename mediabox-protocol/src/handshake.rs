//! MediaBox handshake state machine.
//!
//! After the TCP connection opens, the device drives a fixed four-event
//! exchange before it accepts commands:
//!
//! 1. The device sends its version identifier; the client echoes the
//!    identical bytes back unmodified (the protocol's trust-establishment
//!    step).
//! 2. The device sends two further payloads that must be consumed but not
//!    acted upon. Their content is defined by the device firmware and is
//!    opaque to this client.
//! 3. A fourth payload signals that the device is ready for commands.
//!
//! The exchange is positional, not predicate-based: every received data
//! event advances the machine regardless of payload content, and only the
//! first payload is ever inspected (to be echoed and retained).
//!
//! [`Handshake`] is a pure state machine transitioned by an explicit
//! [`on_data`](Handshake::on_data) call, so the ordinal counting is testable
//! in isolation from real I/O. The connection driver owns the socket, feeds
//! each received payload in, and performs whatever [`HandshakeAction`] comes
//! back.

use bytes::Bytes;
use std::fmt;

/// Stage of the MediaBox handshake.
///
/// The machine progresses one stage per received data event and never moves
/// backwards. `Ready` is terminal; further data events are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandshakeStage {
    /// Waiting for the device's version identifier (first data event).
    AwaitingVersion,

    /// Waiting for the first opaque filler payload (second data event).
    AwaitingFiller1,

    /// Waiting for the second opaque filler payload (third data event).
    AwaitingFiller2,

    /// Waiting for the ready signal (fourth data event).
    AwaitingReady,

    /// Handshake complete - the device accepts commands.
    Ready,
}

impl fmt::Display for HandshakeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingVersion => write!(f, "AwaitingVersion"),
            Self::AwaitingFiller1 => write!(f, "AwaitingFiller1"),
            Self::AwaitingFiller2 => write!(f, "AwaitingFiller2"),
            Self::AwaitingReady => write!(f, "AwaitingReady"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}

/// Action the connection driver must take after feeding in a data event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandshakeAction {
    /// Write these bytes back to the device verbatim.
    EchoVersion(Bytes),

    /// Consume the payload silently.
    Ignore,

    /// The handshake has just completed; resolve any pending connect.
    Complete,
}

/// Explicit state machine over the four-event MediaBox handshake.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use mediabox_protocol::handshake::{Handshake, HandshakeAction};
///
/// let mut hs = Handshake::new();
/// let action = hs.on_data(Bytes::from_static(b"MBOX 001.002"));
/// assert_eq!(action, HandshakeAction::EchoVersion(Bytes::from_static(b"MBOX 001.002")));
///
/// hs.on_data(Bytes::from_static(b"\x01"));
/// hs.on_data(Bytes::from_static(b"\x02"));
/// assert_eq!(hs.on_data(Bytes::from_static(b"\x00")), HandshakeAction::Complete);
/// assert!(hs.is_ready());
/// ```
#[derive(Debug)]
pub struct Handshake {
    stage: HandshakeStage,
    remote_version: Option<Bytes>,
}

impl Handshake {
    /// Create a new handshake awaiting the device's version identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: HandshakeStage::AwaitingVersion,
            remote_version: None,
        }
    }

    /// Get the current handshake stage.
    #[must_use]
    pub fn stage(&self) -> HandshakeStage {
        self.stage
    }

    /// Check whether the handshake has completed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.stage == HandshakeStage::Ready
    }

    /// The device's version identifier, captured at the first data event.
    ///
    /// Retained for diagnostic purposes only; it is never used again after
    /// being echoed.
    #[must_use]
    pub fn remote_version(&self) -> Option<&Bytes> {
        self.remote_version.as_ref()
    }

    /// Feed a received data event into the machine.
    ///
    /// Every call advances the stage regardless of payload content. Returns
    /// the action the connection driver must perform.
    pub fn on_data(&mut self, payload: Bytes) -> HandshakeAction {
        match self.stage {
            HandshakeStage::AwaitingVersion => {
                self.remote_version = Some(payload.clone());
                self.stage = HandshakeStage::AwaitingFiller1;
                HandshakeAction::EchoVersion(payload)
            }
            HandshakeStage::AwaitingFiller1 => {
                self.stage = HandshakeStage::AwaitingFiller2;
                HandshakeAction::Ignore
            }
            HandshakeStage::AwaitingFiller2 => {
                self.stage = HandshakeStage::AwaitingReady;
                HandshakeAction::Ignore
            }
            HandshakeStage::AwaitingReady => {
                self.stage = HandshakeStage::Ready;
                HandshakeAction::Complete
            }
            // Steady state: inbound data is consumed and ignored.
            HandshakeStage::Ready => HandshakeAction::Ignore,
        }
    }
}

impl Default for Handshake {
    fn default() -> Self {
        Self::new()
    }
}
