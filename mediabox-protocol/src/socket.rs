//! Socket abstraction for MediaBox connections.
//!
//! This module provides the transport used to reach the device. The rest of
//! the stack treats the connection as an opaque bidirectional byte stream:
//! anything implementing [`DeviceSocket`] works, which keeps the handshake
//! and encoding layers testable against in-memory streams.
//!
//! # Examples
//!
//! ```no_run
//! use mediabox_protocol::socket::{DeviceSocket, TcpSocket};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let socket = TcpSocket::connect("192.168.1.50", 5900).await?;
//! println!("Connected to: {}", socket.peer_endpoint());
//! # Ok(())
//! # }
//! ```

use std::net::SocketAddr;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::TcpStream;

/// Core trait for MediaBox socket connections.
///
/// Extends [`AsyncRead`] and [`AsyncWrite`] with peer-address accessors.
/// The protocol has no framing below the key-event layout, so this is all
/// the transport surface the client needs.
pub trait DeviceSocket: AsyncRead + AsyncWrite + Send + Unpin {
    /// Get the peer address as a human-readable string.
    fn peer_address(&self) -> String;

    /// Get the peer endpoint including the port (e.g., "192.168.1.50:5900").
    fn peer_endpoint(&self) -> String;
}

/// TCP socket wrapper for MediaBox connections.
///
/// A thin wrapper around [`TcpStream`] configured with `TCP_NODELAY`, so
/// that the tiny key-event frames are sent immediately instead of being
/// batched by Nagle's algorithm.
pub struct TcpSocket {
    stream: TcpStream,
    peer_addr: SocketAddr,
}

impl TcpSocket {
    /// Connect to a MediaBox via TCP.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP address of the device
    /// * `port` - Port number (the device listens on 5900 by default)
    ///
    /// # Errors
    ///
    /// Returns an error if DNS resolution fails, the connection is refused,
    /// or the network is unreachable.
    pub async fn connect(host: &str, port: u16) -> anyhow::Result<Self> {
        let addr = format!("{}:{}", host, port);
        let stream = TcpStream::connect(&addr).await?;
        let peer_addr = stream.peer_addr()?;

        // Key-event frames are 12 bytes; never let Nagle hold them back
        stream.set_nodelay(true)?;

        Ok(Self { stream, peer_addr })
    }

    /// Get the underlying TCP stream.
    ///
    /// Useful for split read/write or platform-specific configuration.
    pub fn into_inner(self) -> TcpStream {
        self.stream
    }
}

impl DeviceSocket for TcpSocket {
    fn peer_address(&self) -> String {
        self.peer_addr.ip().to_string()
    }

    fn peer_endpoint(&self) -> String {
        self.peer_addr.to_string()
    }
}

impl AsyncRead for TcpSocket {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.stream).poll_read(cx, buf)
    }
}

impl AsyncWrite for TcpSocket {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        Pin::new(&mut self.stream).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.stream).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.stream).poll_shutdown(cx)
    }
}
