// SPDX-License-Identifier: MPL-2.0
//! JSON bodies of the `generateContent` endpoint and their interpretation.

use crate::application::port::generation::{GeneratedImage, GenerationError, GenerationOutput};
use crate::domain::asset::MimeType;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPart<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

impl<'a> GenerateContentRequest<'a> {
    /// Image first, then the instruction.
    #[must_use]
    pub fn edit(image: &[u8], mime_type: &MimeType, prompt: &'a str) -> Self {
        let image_part = RequestPart {
            inline_data: Some(InlineData {
                mime_type: Some(mime_type.to_string()),
                data: STANDARD.encode(image),
            }),
            text: None,
        };
        Self {
            contents: vec![Content {
                parts: vec![image_part, RequestPart::text(prompt)],
            }],
        }
    }

    #[must_use]
    pub fn text(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![RequestPart::text(prompt)],
            }],
        }
    }
}

impl<'a> RequestPart<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            inline_data: None,
            text: Some(text),
        }
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map_or(&[][..], |content| content.parts.as_slice())
    }

    /// Image and text of the first candidate. When several parts of one kind
    /// are present the last one wins.
    pub fn into_output(self) -> Result<GenerationOutput, GenerationError> {
        let mut output = GenerationOutput::default();
        for part in self.first_parts() {
            match (&part.inline_data, &part.text) {
                (Some(inline), _) if !inline.data.is_empty() => {
                    let bytes = STANDARD.decode(inline.data.trim()).map_err(|err| {
                        GenerationError::InvalidResponse(format!("image payload is not base64: {err}"))
                    })?;
                    let mime_type = inline
                        .mime_type
                        .as_deref()
                        .and_then(MimeType::image)
                        .unwrap_or_else(MimeType::png);
                    output.image = Some(GeneratedImage { bytes, mime_type });
                }
                (_, Some(text)) if !text.is_empty() => {
                    output.text = Some(text.clone());
                }
                _ => {}
            }
        }
        Ok(output)
    }

    /// All text parts of the first candidate, joined and trimmed.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let joined: String = self
            .first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let trimmed = joined.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Maps an error status and its body to a user-facing error.
#[must_use]
pub fn api_error(status: u16, reason: Option<&str>, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| match reason {
            Some(reason) => format!("Request failed: {status} {reason}"),
            None => format!("Request failed with status {status}"),
        });
    GenerationError::Api { status, message }
}
