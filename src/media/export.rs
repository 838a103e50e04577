// SPDX-License-Identifier: MPL-2.0
//! Download of the current asset to disk.

use crate::domain::asset::ImageAsset;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// File name for a download made at `now`, unique per millisecond.
#[must_use]
pub fn download_file_name(now: DateTime<Utc>) -> String {
    format!("image-gennie-edit-{}.png", now.timestamp_millis())
}

/// Writes the asset's bytes unchanged into `dir`, creating it if needed.
pub fn export_asset(asset: &ImageAsset, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| Error::Io(format!("Failed to create {}: {e}", dir.display())))?;
    let path = dir.join(download_file_name(now));
    fs::write(&path, asset.bytes())
        .map_err(|e| Error::Io(format!("Failed to write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), bytes = asset.bytes().len(), "asset exported");
    Ok(path)
}
