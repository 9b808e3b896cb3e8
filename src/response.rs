//! Response - the boundary value carried back from a client.
//!
//! A [`Response`] is the client's answer to a published menu: either the
//! index of the option that was pressed, or a dismissal (the client
//! closed the menu without choosing). It is the only value that crosses
//! the transport boundary into this crate, so it carries serde derives;
//! how it travels on the wire is the transport's business.
//!
//! The two fields are mutually consistent by construction: a dismissal
//! never carries an index. Deserialized values from an untrusted peer
//! may still be inconsistent, which [`Response::new`] rejects.

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// A client's answer to a published menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Selected option position, if any. Absent means dismissal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Whether the client closed the menu without choosing.
    #[serde(default)]
    pub dismissed: bool,
}

impl Response {
    /// Create a response, validating that the pair is consistent.
    ///
    /// A `dismissed: true` response must not carry an index.
    pub fn new(index: Option<usize>, dismissed: bool) -> Result<Self> {
        if dismissed && index.is_some() {
            return Err(MenuError::InvalidArgument(
                "dismissed response must not carry an option index".to_string(),
            ));
        }
        Ok(Self { index, dismissed })
    }

    /// A response selecting the option at `index`.
    pub fn selection(index: usize) -> Self {
        Self {
            index: Some(index),
            dismissed: false,
        }
    }

    /// A response reporting the menu was closed without a choice.
    pub fn dismissal() -> Self {
        Self {
            index: None,
            dismissed: true,
        }
    }

    /// Whether this response represents a dismissal.
    ///
    /// An absent index counts as a dismissal even when the `dismissed`
    /// flag was not set, so a peer that only omits the field is still
    /// understood.
    pub fn is_dismissal(&self) -> bool {
        self.dismissed || self.index.is_none()
    }
}
