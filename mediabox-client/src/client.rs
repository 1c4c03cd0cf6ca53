//! MediaBox connection lifecycle and command encoding.
//!
//! Owns the single TCP stream to the device, drives the four-event
//! handshake on connect, and translates button actions into key-event
//! frame pairs written to the open stream.
//!
//! Connect steps:
//! 1) Open a TCP socket to the configured endpoint
//! 2) Feed received data events into the [`Handshake`] state machine,
//!    echoing the device version at stage 0
//! 3) Resolve only once the fourth data event arrives - the device must not
//!    be sent commands before it has finished negotiating identity
//!
//! The whole exchange runs under a configurable timeout, and an unsolicited
//! close (EOF) during the handshake fails `connect` deterministically
//! instead of leaving it pending.

use crate::{buttons::ButtonTable, config::Config, errors::MediaBoxError};
use bytes::{Bytes, BytesMut};
use mediabox_protocol::frame::KeyEventFrame;
use mediabox_protocol::handshake::{Handshake, HandshakeAction};
use mediabox_protocol::socket::{DeviceSocket, TcpSocket};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Canonical length of a hex-formatted button code, as found in the button
/// table. Enforced only when strict validation is enabled.
pub const CODE_HEX_LEN: usize = 6;

/// Read chunk size while driving the handshake. Handshake payloads are
/// short; one read per device send is the expected cadence.
const HANDSHAKE_READ_CAPACITY: usize = 512;

/// Client for a single MediaBox device.
///
/// Holds at most one live stream. All operations take `&mut self`, so the
/// borrow checker enforces the one-in-flight-operation discipline the
/// protocol requires (it has no request identifiers; overlapping writes
/// would corrupt the logical sequence).
///
/// # Examples
///
/// ```no_run
/// use mediabox_client::{Button, ButtonTable, Config, MediaBox};
///
/// # async fn example() -> Result<(), mediabox_client::MediaBoxError> {
/// let table = ButtonTable::new(vec![Button::new("power", "123456")]);
/// let mut mediabox = MediaBox::new(Config::new("192.168.1.50"), table)?;
///
/// mediabox.connect().await?;
/// mediabox.press_button("power").await?;
/// mediabox.disconnect().await?;
/// # Ok(())
/// # }
/// ```
pub struct MediaBox {
    config: Config,
    buttons: ButtonTable,
    stream: Option<TcpSocket>,
    remote_version: Option<Bytes>,
}

impl MediaBox {
    /// Create a new client for the given endpoint and button table.
    ///
    /// No connection is opened until [`connect`](Self::connect) is called.
    ///
    /// # Errors
    ///
    /// Returns [`MediaBoxError::Config`] if the configuration is invalid
    /// (empty host, zero port). Configuration errors are the only failures
    /// surfaced synchronously.
    pub fn new(config: Config, buttons: ButtonTable) -> Result<Self, MediaBoxError> {
        config.validate()?;
        Ok(Self {
            config,
            buttons,
            stream: None,
            remote_version: None,
        })
    }

    /// Connect to the MediaBox and run its handshake.
    ///
    /// Resolves only after the handshake completes, not merely upon socket
    /// establishment. Commands may be sent as soon as this returns.
    ///
    /// # Errors
    ///
    /// - [`MediaBoxError::AlreadyConnected`] if a stream is already open;
    ///   the old protocol silently abandoned the prior socket here, which
    ///   this client deliberately rejects
    /// - [`MediaBoxError::ConnectionFailed`] if the TCP connection fails
    /// - [`MediaBoxError::ConnectionClosed`] if the device closes the stream
    ///   mid-handshake
    /// - [`MediaBoxError::Timeout`] if the device never completes its
    ///   four-event handshake within the configured bound
    pub async fn connect(&mut self) -> Result<(), MediaBoxError> {
        if self.stream.is_some() {
            return Err(MediaBoxError::AlreadyConnected);
        }

        let mut socket = TcpSocket::connect(&self.config.host, self.config.port)
            .await
            .map_err(|e| MediaBoxError::ConnectionFailed(e.to_string()))?;
        tracing::info!("Connected to MediaBox at {}", socket.peer_endpoint());

        let timeout = self.config.connect_timeout();
        let version = match tokio::time::timeout(timeout, drive_handshake(&mut socket)).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!("Handshake timed out after {:?}, tearing down stream", timeout);
                return Err(MediaBoxError::Timeout(timeout));
            }
        };

        tracing::debug!(
            "Handshake complete, device version: {:?}",
            String::from_utf8_lossy(&version)
        );
        self.remote_version = Some(version);
        self.stream = Some(socket);
        Ok(())
    }

    /// Destroy the connection to the MediaBox.
    ///
    /// Termination is abrupt: the socket is dropped without a graceful
    /// shutdown frame, matching device expectations.
    ///
    /// # Errors
    ///
    /// Returns [`MediaBoxError::NoConnection`] if no stream is open.
    pub async fn disconnect(&mut self) -> Result<(), MediaBoxError> {
        match self.stream.take() {
            Some(socket) => {
                drop(socket);
                tracing::info!("Disconnected from MediaBox");
                Ok(())
            }
            None => Err(MediaBoxError::NoConnection),
        }
    }

    /// Emulate pressing a button on the remote control.
    ///
    /// Looks up `name` in the injected button table by exact match, then
    /// writes the key-down frame followed immediately by the key-up frame
    /// (an instantaneous tap; there is no key-hold API).
    ///
    /// # Errors
    ///
    /// - [`MediaBoxError::NoConnection`] if no stream is open (checked
    ///   before anything else)
    /// - [`MediaBoxError::UnknownButton`] if the name is absent from the
    ///   table; nothing is written in that case
    pub async fn press_button(&mut self, name: &str) -> Result<(), MediaBoxError> {
        if self.stream.is_none() {
            return Err(MediaBoxError::NoConnection);
        }
        let code = self
            .buttons
            .find_by_name(name)
            .ok_or_else(|| MediaBoxError::UnknownButton(name.to_string()))?
            .to_string();
        tracing::debug!("Pressing button '{}' (code {})", name, code);
        self.write_tap(&code).await
    }

    /// Emulate a button press by raw key code, bypassing name lookup.
    ///
    /// In the default permissive mode any hex-decodable code passes through,
    /// malformed length and all - producing a malformed frame is accepted
    /// protocol behavior. With [`Config::strict_codes`] set, codes that are
    /// not exactly [`CODE_HEX_LEN`] hex characters are rejected.
    ///
    /// # Errors
    ///
    /// [`MediaBoxError::NoConnection`], [`MediaBoxError::InvalidCode`]
    /// (strict mode), or [`MediaBoxError::InvalidHex`].
    pub async fn press_button_by_code(&mut self, code: &str) -> Result<(), MediaBoxError> {
        if self.stream.is_none() {
            return Err(MediaBoxError::NoConnection);
        }
        tracing::debug!("Pressing button by code {}", code);
        self.write_tap(code).await
    }

    /// Write hex-formatted data to the MediaBox as-is, with no frame header.
    ///
    /// # Errors
    ///
    /// [`MediaBoxError::NoConnection`] if no stream is open, or
    /// [`MediaBoxError::InvalidHex`] if the data does not decode.
    pub async fn send_raw(&mut self, hex_data: &str) -> Result<(), MediaBoxError> {
        if self.stream.is_none() {
            return Err(MediaBoxError::NoConnection);
        }
        let data = hex::decode(hex_data)?;
        tracing::debug!("Sending {} raw bytes", data.len());
        self.write_all(&data).await
    }

    /// Whether a handshaken stream is currently open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// The device version captured during the most recent handshake.
    ///
    /// Diagnostic only; the bytes are never interpreted.
    #[must_use]
    pub fn remote_version(&self) -> Option<&Bytes> {
        self.remote_version.as_ref()
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Write the down/up frame pair for a hex key code.
    async fn write_tap(&mut self, code: &str) -> Result<(), MediaBoxError> {
        let code = self.decode_code(code)?;
        let (down, up) = KeyEventFrame::tap(code);
        self.write_all(&down.encode()).await?;
        self.write_all(&up.encode()).await?;
        Ok(())
    }

    fn decode_code(&self, code: &str) -> Result<Bytes, MediaBoxError> {
        if self.config.strict_codes && code.len() != CODE_HEX_LEN {
            return Err(MediaBoxError::InvalidCode(format!(
                "expected {} hex characters, got {}",
                CODE_HEX_LEN,
                code.len()
            )));
        }
        Ok(Bytes::from(hex::decode(code)?))
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<(), MediaBoxError> {
        let socket = self.stream.as_mut().ok_or(MediaBoxError::NoConnection)?;
        if let Err(e) = socket.write_all(data).await {
            // The device dropped the stream; clear the handle so subsequent
            // operations fail with NoConnection instead of a stale socket.
            self.stream = None;
            tracing::warn!("Write failed, clearing stream: {}", e);
            return Err(MediaBoxError::Transport(e));
        }
        Ok(())
    }
}

/// Run the four-event handshake over the freshly opened stream.
///
/// Each successful read is one data event fed to the state machine. Returns
/// the device version captured at stage 0.
async fn drive_handshake<S>(socket: &mut S) -> Result<Bytes, MediaBoxError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut handshake = Handshake::new();
    while !handshake.is_ready() {
        let mut chunk = BytesMut::with_capacity(HANDSHAKE_READ_CAPACITY);
        let n = socket.read_buf(&mut chunk).await?;
        if n == 0 {
            // Unsolicited close mid-handshake: fail the pending connect
            // deterministically instead of hanging.
            return Err(MediaBoxError::ConnectionClosed);
        }
        tracing::trace!("Handshake {}: {} byte data event", handshake.stage(), n);
        match handshake.on_data(chunk.freeze()) {
            HandshakeAction::EchoVersion(version) => {
                socket.write_all(&version).await?;
                tracing::debug!("Echoed device version ({} bytes)", version.len());
            }
            HandshakeAction::Ignore => {}
            HandshakeAction::Complete => {}
        }
    }
    Ok(handshake.remote_version().cloned().unwrap_or_else(Bytes::new))
}
