// SPDX-License-Identifier: MPL-2.0
//! Prompt text helpers.

/// Style keywords offered as one-tap additions in create mode.
pub const STYLE_PRESETS: [&str; 12] = [
    "Photorealistic",
    "Cinematic",
    "Anime",
    "Cyberpunk",
    "Oil Painting",
    "3D Render",
    "Studio Lighting",
    "Minimalist",
    "Vintage",
    "Watercolor",
    "4K",
    "Vibrant",
];

/// Whether a prompt has no usable content.
#[must_use]
pub fn is_blank(prompt: &str) -> bool {
    prompt.trim().is_empty()
}

/// Appends a style keyword as a comma-separated item.
///
/// ```
/// use image_genie::domain::prompt::append_style;
///
/// assert_eq!(append_style("", "Anime"), "Anime");
/// assert_eq!(append_style("a cat ", "Anime"), "a cat, Anime");
/// assert_eq!(append_style("a cat,", "Anime"), "a cat, Anime");
/// ```
#[must_use]
pub fn append_style(prompt: &str, style: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        style.to_string()
    } else if trimmed.ends_with(',') {
        format!("{trimmed} {style}")
    } else {
        format!("{trimmed}, {style}")
    }
}

/// Merges pasted text into the prompt: replaces a blank prompt, otherwise
/// appends after a space.
#[must_use]
pub fn append_pasted(prompt: &str, pasted: &str) -> String {
    if is_blank(prompt) {
        pasted.to_string()
    } else {
        format!("{prompt} {pasted}")
    }
}

/// Looks up a preset case-insensitively, returning its canonical spelling.
#[must_use]
pub fn find_style(name: &str) -> Option<&'static str> {
    let wanted = name.trim();
    STYLE_PRESETS
        .iter()
        .copied()
        .find(|style| style.eq_ignore_ascii_case(wanted))
}
