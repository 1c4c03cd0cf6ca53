//! Async client for the MediaBox remote-control protocol.
//!
//! This crate provides a complete client for driving a MediaBox set-top
//! device over its raw TCP control port. It is built on the low-level
//! `mediabox-protocol` crate and handles connection lifecycle, the
//! four-event handshake, button lookup, and key-event frame emission.
//!
//! # Features
//!
//! - **Async I/O**: Built on tokio for efficient event-driven networking
//! - **Explicit handshake machine**: The device's positional four-event
//!   handshake is an auditable state machine, not an ad-hoc counter
//! - **Injected button table**: The name-to-code mapping is a read-only
//!   collaborator, JSON-loadable, swappable per firmware revision
//! - **Fail-fast policy**: Every failure surfaces to the caller; there are
//!   no internal retries and no silent fallbacks
//!
//! # Quick Start
//!
//! ```no_run
//! use mediabox_client::{Button, ButtonTable, Config, MediaBox};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mediabox_client::MediaBoxError> {
//!     let table = ButtonTable::new(vec![
//!         Button::new("power", "123456"),
//!         Button::new("mute", "abcdef"),
//!     ]);
//!
//!     let mut mediabox = MediaBox::new(Config::new("192.168.1.50"), table)?;
//!
//!     // Resolves only once the device finishes its handshake
//!     mediabox.connect().await?;
//!
//!     mediabox.press_button("power").await?;
//!     mediabox.disconnect().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All failures are returned as [`MediaBoxError`] values. Configuration
//! errors are synchronous and fatal to construction; everything else is a
//! failed async result the caller can recover from (reconnect, retry with a
//! valid button name). Observability is the caller's responsibility; this
//! crate emits `tracing` events but installs no subscriber.
//!
//! # Concurrency
//!
//! One stream per client instance, exclusively owned. All operations take
//! `&mut self`, so a single in-flight operation at a time is enforced by
//! the borrow checker - the protocol has no request identifiers and cannot
//! tolerate interleaved writes.
//!
//! # Safety
//!
//! This crate is `#![forbid(unsafe_code)]` and uses only safe Rust.

#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::cargo
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Public modules
pub mod buttons;
pub mod config;
pub mod errors;

// Private implementation modules
mod client;

// Re-exports
pub use buttons::{Button, ButtonTable};
pub use client::{MediaBox, CODE_HEX_LEN};
pub use config::Config;
pub use errors::MediaBoxError;
