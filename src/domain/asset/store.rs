// SPDX-License-Identifier: MPL-2.0
//! Insertion-ordered asset history with `current` and `original` pointers.
//!
//! Both pointers are [`AssetId`]s looked up against the owned sequence, so no
//! operation can leave a pointer to an asset that no longer exists.

use super::types::{AssetId, AssetOrigin, ImageAsset, MimeType};
use std::sync::Arc;

/// Result of [`AssetStore::delete_asset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No asset with that id; nothing changed.
    NotFound,
    /// The asset was removed and the store still holds others.
    Removed,
    /// The last asset was removed; the store is now empty.
    Emptied,
}

#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: Vec<ImageAsset>,
    current: Option<AssetId>,
    original: Option<AssetId>,
}

impl AssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an asset and makes it current. It also becomes the original
    /// when none is set yet.
    pub fn add_asset(
        &mut self,
        bytes: impl Into<Arc<[u8]>>,
        mime_type: MimeType,
        origin: AssetOrigin,
        label: Option<String>,
    ) -> AssetId {
        self.push(ImageAsset::new(bytes, mime_type, origin, label), false)
    }

    /// Appends an asset that starts a new edit session: it becomes both
    /// current and original.
    pub fn add_root_asset(
        &mut self,
        bytes: impl Into<Arc<[u8]>>,
        mime_type: MimeType,
        origin: AssetOrigin,
        label: Option<String>,
    ) -> AssetId {
        self.push(ImageAsset::new(bytes, mime_type, origin, label), true)
    }

    fn push(&mut self, asset: ImageAsset, anchor: bool) -> AssetId {
        let id = asset.id();
        self.assets.push(asset);
        self.current = Some(id);
        if anchor || self.original.is_none() {
            self.original = Some(id);
        }
        tracing::debug!(%id, anchor, len = self.assets.len(), "asset added");
        id
    }

    /// Moves the current pointer. Unknown ids are ignored.
    ///
    /// Returns whether the pointer now references `id`.
    pub fn select_current(&mut self, id: AssetId) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.current = Some(id);
        true
    }

    /// Points current back at the original. No-op when there is no original.
    pub fn reset_to_original(&mut self) -> bool {
        match self.original {
            Some(original) => {
                self.current = Some(original);
                true
            }
            None => false,
        }
    }

    /// Removes an asset and repairs both pointers.
    ///
    /// - Deleting current selects its predecessor, or the new head if it was first.
    /// - Deleting original re-anchors on the new head.
    /// - Deleting the sole asset empties the store like [`clear_all`](Self::clear_all).
    pub fn delete_asset(&mut self, id: AssetId) -> DeleteOutcome {
        let Some(index) = self.position(id) else {
            return DeleteOutcome::NotFound;
        };

        if self.assets.len() == 1 {
            self.clear_all();
            return DeleteOutcome::Emptied;
        }

        self.assets.remove(index);

        if self.current == Some(id) {
            let successor = index.saturating_sub(1);
            self.current = self.assets.get(successor).map(ImageAsset::id);
        }

        if self.original == Some(id) {
            self.original = self.assets.first().map(ImageAsset::id);
        }

        tracing::debug!(%id, len = self.assets.len(), "asset deleted");
        DeleteOutcome::Removed
    }

    /// Empties the sequence and both pointers.
    pub fn clear_all(&mut self) {
        self.assets.clear();
        self.current = None;
        self.original = None;
    }

    #[must_use]
    pub fn current_id(&self) -> Option<AssetId> {
        self.current
    }

    #[must_use]
    pub fn original_id(&self) -> Option<AssetId> {
        self.original
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageAsset> {
        self.current.and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn original(&self) -> Option<&ImageAsset> {
        self.original.and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn get(&self, id: AssetId) -> Option<&ImageAsset> {
        self.assets.iter().find(|asset| asset.id() == id)
    }

    /// Index of `id` in insertion order.
    #[must_use]
    pub fn position(&self, id: AssetId) -> Option<usize> {
        self.assets.iter().position(|asset| asset.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageAsset> {
        self.assets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Whether the displayed asset is the session anchor.
    #[must_use]
    pub fn is_current_original(&self) -> bool {
        self.current == self.original
    }
}
