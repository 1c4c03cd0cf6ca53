//! Button lookup table.
//!
//! The mapping from human-readable button names to device key codes is a
//! read-only resource supplied at client construction. The original remote
//! ships it as a `buttons.json` file: an ordered sequence of
//! `{name, code}` records with hex-formatted codes.
//!
//! The table is injected rather than embedded so it can be swapped or
//! extended (different firmware revisions map keys differently) without
//! touching the client.

use crate::errors::MediaBoxError;
use serde::{Deserialize, Serialize};

/// A single button record: a human-readable name and its hex key code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Human-readable button name (e.g., "power", "channel_up").
    pub name: String,
    /// Hex-formatted device key code.
    pub code: String,
}

impl Button {
    /// Create a button record.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Ordered, read-only button lookup table.
///
/// Lookup is by exact name match; the first match wins. Name uniqueness is
/// assumed, not enforced.
///
/// # Examples
///
/// ```
/// use mediabox_client::{Button, ButtonTable};
///
/// let table = ButtonTable::new(vec![
///     Button::new("power", "123456"),
///     Button::new("mute", "abcdef"),
/// ]);
/// assert_eq!(table.find_by_name("power"), Some("123456"));
/// assert_eq!(table.find_by_name("warp"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonTable {
    buttons: Vec<Button>,
}

impl ButtonTable {
    /// Create a table from an ordered sequence of button records.
    #[must_use]
    pub fn new(buttons: Vec<Button>) -> Self {
        Self { buttons }
    }

    /// Load a table from a JSON array of `{name, code}` records, in the
    /// format of the original remote's `buttons.json`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaBoxError::Config`] if the JSON does not parse.
    pub fn from_json(json: &str) -> Result<Self, MediaBoxError> {
        let buttons: Vec<Button> = serde_json::from_str(json)
            .map_err(|e| MediaBoxError::Config(format!("invalid button table JSON: {}", e)))?;
        Ok(Self { buttons })
    }

    /// Look up a button code by exact name match.
    ///
    /// Returns the first matching record's code, or `None` if the name is
    /// absent.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&str> {
        self.buttons
            .iter()
            .find(|btn| btn.name == name)
            .map(|btn| btn.code.as_str())
    }

    /// Number of records in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Iterate over the records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }
}
