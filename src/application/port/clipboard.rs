// SPDX-License-Identifier: MPL-2.0
//! Clipboard read port.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened or read.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard holds no text.
    #[error("clipboard holds no text")]
    Empty,
}

/// Best-effort access to clipboard text.
pub trait ClipboardReader {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}
