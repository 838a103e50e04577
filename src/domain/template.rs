// SPDX-License-Identifier: MPL-2.0
//! Reusable prompt templates.
//!
//! The serialized layout (`id`, `title`, `prompt`, `demoImageUrl`) is the one
//! stored under the template key in local storage, so existing collections
//! keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Identifier of a [`PromptTemplate`]. Built-in templates use fixed ids
/// (`default-1`…), user templates use UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn from_static(id: &str) -> Self {
        Self(id.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: TemplateId,
    pub title: String,
    pub prompt: String,
    /// Illustrative preview as a `data:` URL.
    #[serde(rename = "demoImageUrl")]
    pub preview_image: String,
}

impl PromptTemplate {
    /// Case-insensitive match against title or prompt text.
    /// An empty query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.prompt.to_lowercase().contains(&query)
    }
}

/// Missing fields when submitting a new template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("A template needs a title")]
    MissingTitle,
    #[error("A template needs a prompt")]
    MissingPrompt,
    #[error("A template needs a preview image")]
    MissingPreview,
}

/// A template being composed, before it gets an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    pub title: String,
    pub prompt: String,
    pub preview_image: Option<String>,
}

impl TemplateDraft {
    /// Validates the draft and assigns a fresh id.
    pub fn into_template(self) -> Result<PromptTemplate, TemplateError> {
        if self.title.trim().is_empty() {
            return Err(TemplateError::MissingTitle);
        }
        if self.prompt.trim().is_empty() {
            return Err(TemplateError::MissingPrompt);
        }
        let preview_image = self
            .preview_image
            .filter(|preview| !preview.is_empty())
            .ok_or(TemplateError::MissingPreview)?;

        Ok(PromptTemplate {
            id: TemplateId::new(),
            title: self.title,
            prompt: self.prompt,
            preview_image,
        })
    }
}

/// Built-in set used when storage holds nothing usable.
#[must_use]
pub fn default_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            id: TemplateId::from_static("default-1"),
            title: "Cyberpunk Neon".to_string(),
            prompt: "Transform the scene into a futuristic cyberpunk city with neon lights, rain-slicked streets, and high-tech architecture. Keep the main subject but change the atmosphere to be dark and vibrant with pink and blue hues.".to_string(),
            preview_image: "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAQAAAAECAIAAAAmkwkpAAAAEElEQVR42mO4rV4ORwzEcQBrMheRgpLVrgAAAABJRU5ErkJggg==".to_string(),
        },
        PromptTemplate {
            id: TemplateId::from_static("default-2"),
            title: "Vintage Film".to_string(),
            prompt: "Apply a vintage 1970s film aesthetic. Add grain, slightly desaturated warm colors, light leaks, and a soft focus effect to give it a nostalgic feel.".to_string(),
            preview_image: "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAQAAAAECAIAAAAmkwkpAAAAEElEQVR42mPY0BkHRwzEcQCa0hlxnFPG2AAAAABJRU5ErkJggg==".to_string(),
        },
        PromptTemplate {
            id: TemplateId::from_static("default-3"),
            title: "Watercolor Sketch".to_string(),
            prompt: "Convert the image into a soft watercolor painting. Use pastel colors, visible brush strokes, and a paper texture background. Make it look artistic and dreamy.".to_string(),
            preview_image: "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAQAAAAECAIAAAAmkwkpAAAAEUlEQVR42mOoXXUdjhiI4wAAN4Ef4eA52NIAAAAASUVORK5CYII=".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TemplateDraft {
        TemplateDraft {
            title: "Noir".to_string(),
            prompt: "Black and white, hard shadows".to_string(),
            preview_image: Some("data:image/jpeg;base64,AAAA".to_string()),
        }
    }

    #[test]
    fn draft_becomes_template_with_fresh_id() {
        let first = draft().into_template().expect("valid draft");
        let second = draft().into_template().expect("valid draft");
        assert_eq!(first.title, "Noir");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn draft_requires_every_field() {
        let mut d = draft();
        d.title = "  ".to_string();
        assert_eq!(d.into_template(), Err(TemplateError::MissingTitle));

        let mut d = draft();
        d.prompt.clear();
        assert_eq!(d.into_template(), Err(TemplateError::MissingPrompt));

        let mut d = draft();
        d.preview_image = None;
        assert_eq!(d.into_template(), Err(TemplateError::MissingPreview));
    }

    #[test]
    fn serialized_layout_uses_demo_image_url() {
        let template = &default_templates()[0];
        let json = serde_json::to_value(template).expect("serialize template");
        assert_eq!(json["id"], "default-1");
        assert!(json["demoImageUrl"].as_str().is_some_and(|s| s.starts_with("data:image/png")));
        assert!(json.get("preview_image").is_none());
    }

    #[test]
    fn matches_title_or_prompt_case_insensitively() {
        let template = &default_templates()[1];
        assert!(template.matches("vintage"));
        assert!(template.matches("LIGHT LEAKS"));
        assert!(template.matches(""));
        assert!(!template.matches("cyberpunk"));
    }

    #[test]
    fn defaults_have_unique_ids() {
        let templates = default_templates();
        assert_eq!(templates.len(), 3);
        assert_ne!(templates[0].id, templates[1].id);
        assert_ne!(templates[1].id, templates[2].id);
    }
}
