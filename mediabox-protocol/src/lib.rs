//! MediaBox remote-control protocol implementation.
//!
//! This crate provides the wire-level layer for talking to a MediaBox
//! set-top device over raw TCP. It handles the socket connection, the
//! four-event trust handshake, and the fixed-width key-event frames the
//! device expects.
//!
//! # Modules
//!
//! - [`socket`] - Socket abstraction (TCP) for the device connection
//! - [`handshake`] - Handshake state machine driven by received data events
//! - [`frame`] - Key-event frame encoding and decoding
//!
//! # Examples
//!
//! ```no_run
//! use mediabox_protocol::{DeviceSocket, TcpSocket};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Connect to a MediaBox
//! let socket = TcpSocket::connect("192.168.1.50", 5900).await?;
//! println!("Connected to: {}", socket.peer_endpoint());
//! # Ok(())
//! # }
//! ```

pub mod frame;
pub mod handshake;
pub mod socket;

// Re-export commonly used types
pub use frame::{KeyEventFrame, KeyState};
pub use handshake::{Handshake, HandshakeAction, HandshakeStage};
pub use socket::{DeviceSocket, TcpSocket};
