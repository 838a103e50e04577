// SPDX-License-Identifier: MPL-2.0
//! `data:` URL encoding for inline images (template previews).

use crate::domain::asset::MimeType;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Builds `data:<mime>;base64,<payload>`.
#[must_use]
pub fn encode(bytes: &[u8], mime_type: &MimeType) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Splits a base64 image data URL into its MIME type and decoded bytes.
///
/// Returns `None` for non-image or non-base64 URLs and for corrupt payloads.
#[must_use]
pub fn decode(url: &str) -> Option<(MimeType, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let mime_type = MimeType::image(mime)?;
    let bytes = STANDARD.decode(payload.trim()).ok()?;
    Some((mime_type, bytes))
}
