// SPDX-License-Identifier: MPL-2.0
//! History sidebar rows.

use crate::domain::asset::{AssetId, AssetStore};
use chrono::TimeZone;
use std::fmt::Display;

pub const ORIGINAL_TITLE: &str = "Original Image";
pub const UNTITLED_TITLE: &str = "Untitled Edit";

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: AssetId,
    pub title: String,
    /// Creation time as `HH:MM` in the display timezone.
    pub time: String,
    pub is_selected: bool,
}

/// Rows for every asset in insertion order.
///
/// The first row is always titled as the original image; later rows show the
/// asset label (the prompt that produced it, or the crop ratio).
pub fn history_entries<Tz>(store: &AssetStore, tz: &Tz) -> Vec<HistoryEntry>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let current = store.current_id();
    store
        .iter()
        .enumerate()
        .map(|(index, asset)| {
            let title = if index == 0 {
                ORIGINAL_TITLE.to_string()
            } else {
                asset
                    .label()
                    .filter(|label| !label.trim().is_empty())
                    .unwrap_or(UNTITLED_TITLE)
                    .to_string()
            };
            HistoryEntry {
                id: asset.id(),
                title,
                time: asset
                    .created_at()
                    .with_timezone(tz)
                    .format("%H:%M")
                    .to_string(),
                is_selected: current == Some(asset.id()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::{AssetOrigin, MimeType};
    use chrono::Utc;

    #[test]
    fn titles_follow_position_and_label() {
        let mut store = AssetStore::new();
        store.add_root_asset(vec![1u8], MimeType::png(), AssetOrigin::Uploaded, Some("ignored".into()));
        store.add_asset(vec![2u8], MimeType::png(), AssetOrigin::Generated, Some("make it blue".into()));
        let last = store.add_asset(vec![3u8], MimeType::png(), AssetOrigin::Generated, None);

        let rows = history_entries(&store, &Utc);

        let titles: Vec<_> = rows.iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, [ORIGINAL_TITLE, "make it blue", UNTITLED_TITLE]);
        assert_eq!(rows.iter().filter(|row| row.is_selected).count(), 1);
        assert!(rows[2].is_selected);
        assert_eq!(rows[2].id, last);
    }

    #[test]
    fn time_is_hours_and_minutes() {
        let mut store = AssetStore::new();
        store.add_root_asset(vec![1u8], MimeType::png(), AssetOrigin::Uploaded, None);
        let rows = history_entries(&store, &Utc);
        let time = &rows[0].time;
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }

    #[test]
    fn empty_store_has_no_rows() {
        assert!(history_entries(&AssetStore::new(), &Utc).is_empty());
    }
}
