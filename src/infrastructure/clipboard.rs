// SPDX-License-Identifier: MPL-2.0
//! System clipboard adapter implementing [`ClipboardReader`] via `arboard`.
//!
//! The platform clipboard is opened on each read; holding it open blocks
//! other applications on some platforms.

use crate::application::port::clipboard::{ClipboardError, ClipboardReader};

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardReader for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) if text.is_empty() => Err(ClipboardError::Empty),
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::Empty),
            Err(err) => Err(ClipboardError::Unavailable(err.to_string())),
        }
    }
}
