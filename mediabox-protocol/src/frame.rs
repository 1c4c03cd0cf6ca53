//! Key-event frame encoding and decoding.
//!
//! The MediaBox accepts button presses as fixed-width binary frames. A press
//! is modelled as an instantaneous tap: a key-down frame followed immediately
//! by a key-up frame carrying the same device key code.
//!
//! # Wire Format
//!
//! The canonical key-event frame is 12 bytes:
//!
//! - 1 byte: frame class (0x04 = key event)
//! - 1 byte: key state (0x01 = down, 0x00 = up)
//! - 4 bytes: reserved, always zero
//! - 6 bytes: device-specific key code
//!
//! There is no length prefix and no checksum; framing is purely positional.
//! Both encoder and decoder are length-agnostic in the code field: codes
//! from the button table are commonly three bytes, and caller-supplied
//! codes pass through unmodified whatever their length.

use bytes::{BufMut, Bytes, BytesMut};

/// Frame class byte identifying a key event.
pub const FRAME_CLASS_KEY: u8 = 0x04;

/// Length of the fixed frame header (class, state, reserved).
pub const HEADER_LEN: usize = 6;

/// Length of the device key code in a canonical frame.
pub const KEY_CODE_LEN: usize = 6;

/// Total length of a canonical key-event frame.
pub const FRAME_LEN: usize = HEADER_LEN + KEY_CODE_LEN;

/// Key state carried in byte 1 of a key-event frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key pressed (wire value 0x01).
    Down,
    /// Key released (wire value 0x00).
    Up,
}

impl KeyState {
    /// Wire representation of this key state.
    #[must_use]
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Down => 0x01,
            Self::Up => 0x00,
        }
    }

    /// Parse a key state from its wire byte.
    pub fn from_wire(byte: u8) -> std::io::Result<Self> {
        match byte {
            0x01 => Ok(Self::Down),
            0x00 => Ok(Self::Up),
            other => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("key state must be 0x00 or 0x01, got 0x{:02x}", other),
            )),
        }
    }
}

/// A single key-event frame.
///
/// Frames are constructed and written immediately; they are never stored,
/// buffered, or retried.
///
/// # Examples
///
/// ```
/// use mediabox_protocol::frame::{KeyEventFrame, KeyState};
///
/// let down = KeyEventFrame::down(vec![0x12, 0x34, 0x56]);
/// assert_eq!(&down.encode()[..], &[0x04, 0x01, 0, 0, 0, 0, 0x12, 0x34, 0x56]);
///
/// let up = KeyEventFrame::up(vec![0x12, 0x34, 0x56]);
/// assert_eq!(up.state, KeyState::Up);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEventFrame {
    /// Key state (down or up).
    pub state: KeyState,
    /// Device-specific key code (canonically [`KEY_CODE_LEN`] bytes).
    pub code: Bytes,
}

impl KeyEventFrame {
    /// Create a key-down frame for the given code.
    pub fn down(code: impl Into<Bytes>) -> Self {
        Self {
            state: KeyState::Down,
            code: code.into(),
        }
    }

    /// Create a key-up frame for the given code.
    pub fn up(code: impl Into<Bytes>) -> Self {
        Self {
            state: KeyState::Up,
            code: code.into(),
        }
    }

    /// Create the down/up frame pair modelling an instantaneous tap.
    pub fn tap(code: impl Into<Bytes>) -> (Self, Self) {
        let code = code.into();
        (Self::down(code.clone()), Self::up(code))
    }

    /// Encode this frame to its wire representation.
    ///
    /// The header is always [`HEADER_LEN`] bytes; the code is appended
    /// unmodified, whatever its length.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HEADER_LEN + self.code.len());
        buf.put_u8(FRAME_CLASS_KEY);
        buf.put_u8(self.state.to_wire());
        buf.put_bytes(0, 4); // reserved
        buf.put_slice(&self.code);
        buf.freeze()
    }

    /// Decode a key-event frame.
    ///
    /// Mirrors [`encode`](Self::encode): the header must be well formed,
    /// and everything after it is the key code, whatever its length. A
    /// canonical frame is [`FRAME_LEN`] bytes, but devices in the field use
    /// shorter codes too.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the frame carries no code after the
    /// [`HEADER_LEN`]-byte header, the frame class is not a key event, the
    /// reserved bytes are non-zero, or the key-state byte is unrecognized.
    pub fn decode(raw: &[u8]) -> std::io::Result<Self> {
        if raw.len() <= HEADER_LEN {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "key-event frame must be longer than its {}-byte header, got {} bytes",
                    HEADER_LEN,
                    raw.len()
                ),
            ));
        }
        if raw[0] != FRAME_CLASS_KEY {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("expected key-event frame class 0x04, got 0x{:02x}", raw[0]),
            ));
        }
        let state = KeyState::from_wire(raw[1])?;
        if raw[2..HEADER_LEN].iter().any(|&b| b != 0) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "reserved header bytes must be zero",
            ));
        }
        Ok(Self {
            state,
            code: Bytes::copy_from_slice(&raw[HEADER_LEN..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_frame_encoding() {
        let frame = KeyEventFrame::down(vec![0x12, 0x34, 0x56]);
        assert_eq!(hex_of(&frame), "040100000000123456");
    }

    #[test]
    fn test_up_frame_encoding() {
        let frame = KeyEventFrame::up(vec![0x12, 0x34, 0x56]);
        assert_eq!(hex_of(&frame), "040000000000123456");
    }

    #[test]
    fn test_tap_pair_order_and_codes() {
        let (down, up) = KeyEventFrame::tap(vec![0xaa, 0xbb]);
        assert_eq!(down.state, KeyState::Down);
        assert_eq!(up.state, KeyState::Up);
        assert_eq!(down.code, up.code);
    }

    #[test]
    fn test_canonical_frame_roundtrip() {
        let code = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let frame = KeyEventFrame::down(code.clone());
        let encoded = frame.encode();
        assert_eq!(encoded.len(), FRAME_LEN);

        let decoded = KeyEventFrame::decode(&encoded).unwrap();
        assert_eq!(decoded.state, KeyState::Down);
        assert_eq!(&decoded.code[..], &code[..]);
    }

    #[test]
    fn test_short_code_frame_roundtrip() {
        // Codes from the device's button table are six hex characters
        // (three bytes), so their frames are shorter than the canonical
        // twelve and must still decode.
        let frame = KeyEventFrame::down(vec![0x12, 0x34, 0x56]);
        let encoded = frame.encode();
        assert_eq!(hex_of(&frame), "040100000000123456");

        let decoded = KeyEventFrame::decode(&encoded).unwrap();
        assert_eq!(decoded.state, KeyState::Down);
        assert_eq!(&decoded.code[..], &[0x12, 0x34, 0x56]);

        let up = KeyEventFrame::up(vec![0x12, 0x34, 0x56]);
        let decoded_up = KeyEventFrame::decode(&up.encode()).unwrap();
        assert_eq!(decoded_up.state, KeyState::Up);
        assert_eq!(decoded_up.code, decoded.code);
    }

    #[test]
    fn test_decode_rejects_missing_code() {
        // A bare header carries no key code
        let err = KeyEventFrame::decode(&[0x04, 0x01, 0, 0, 0, 0]).unwrap_err();
        assert!(err.to_string().contains("header"));

        assert!(KeyEventFrame::decode(&[]).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_class() {
        let mut raw = [0u8; FRAME_LEN];
        raw[0] = 0x05;
        assert!(KeyEventFrame::decode(&raw).is_err());
    }

    #[test]
    fn test_decode_rejects_bad_key_state() {
        let mut raw = [0u8; FRAME_LEN];
        raw[0] = FRAME_CLASS_KEY;
        raw[1] = 0x02;
        assert!(KeyEventFrame::decode(&raw).is_err());
    }

    #[test]
    fn test_decode_rejects_nonzero_reserved() {
        let mut raw = [0u8; FRAME_LEN];
        raw[0] = FRAME_CLASS_KEY;
        raw[1] = 0x01;
        raw[3] = 0xff;
        assert!(KeyEventFrame::decode(&raw).is_err());
    }

    fn hex_of(frame: &KeyEventFrame) -> String {
        frame
            .encode()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}
