// SPDX-License-Identifier: MPL-2.0
//! Image assets and their insertion-ordered history.

mod store;
mod types;

pub use store::{AssetStore, DeleteOutcome};
pub use types::{AssetId, AssetOrigin, ImageAsset, MimeType};
