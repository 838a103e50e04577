// SPDX-License-Identifier: MPL-2.0
//! Core asset types.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier of an [`ImageAsset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(Uuid);

impl AssetId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an asset entered the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOrigin {
    /// Loaded from a file or captured from a camera.
    Uploaded,
    /// Produced by the model or derived locally (crop).
    Generated,
}

/// An image MIME type, guaranteed to be in the `image/` family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType(String);

impl MimeType {
    /// Accepts `image/*` types only. Parameters and case are normalized away.
    #[must_use]
    pub fn image(value: &str) -> Option<Self> {
        let essence = value
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        let subtype = essence.strip_prefix("image/")?;
        if subtype.is_empty() {
            return None;
        }
        Some(Self(essence))
    }

    #[must_use]
    pub fn png() -> Self {
        Self("image/png".to_string())
    }

    #[must_use]
    pub fn jpeg() -> Self {
        Self("image/jpeg".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One image plus its metadata. Immutable once created.
///
/// Bytes are shared behind an [`Arc`], so cloning an asset to build a
/// generation request does not copy the encoded image.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    id: AssetId,
    bytes: Arc<[u8]>,
    mime_type: MimeType,
    origin: AssetOrigin,
    label: Option<String>,
    created_at: DateTime<Utc>,
}

impl ImageAsset {
    #[must_use]
    pub fn new(
        bytes: impl Into<Arc<[u8]>>,
        mime_type: MimeType,
        origin: AssetOrigin,
        label: Option<String>,
    ) -> Self {
        Self {
            id: AssetId::new(),
            bytes: bytes.into(),
            mime_type,
            origin,
            label,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> AssetId {
        self.id
    }

    /// Encoded image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the encoded bytes.
    #[must_use]
    pub fn bytes_arc(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn mime_type(&self) -> &MimeType {
        &self.mime_type
    }

    #[must_use]
    pub fn origin(&self) -> AssetOrigin {
        self.origin
    }

    /// Prompt or operation that produced this asset, e.g. `Crop 16:9`.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
