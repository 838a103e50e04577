// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter implementing the [`GenerationClient`] port over HTTP.
//!
//! Image edits and text-to-image use the image model; prompt enhancement uses
//! the text model. Both go through `models/{model}:generateContent`.
//!
//! [`GenerationClient`]: crate::application::port::GenerationClient

mod wire;

use crate::application::port::generation::{GenerationClient, GenerationError, GenerationOutput};
use crate::config::Config;
use crate::domain::asset::MimeType;
use wire::{api_error, GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Instruction wrapped around the user's prompt for enhancement.
fn enhancement_instruction(prompt: &str) -> String {
    format!(
        "Rewrite the following image generation prompt to be more detailed, artistic, and descriptive. \
         Keep it effective for an AI image generator. Do not add any conversational text, just output the enhanced prompt.\n\n\
         Original Prompt: \"{prompt}\""
    )
}

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    image_model: String,
    text_model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("image_model", &self.image_model)
            .field("text_model", &self.text_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        image_model: impl Into<String>,
        text_model: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ImageGenie/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            image_model: image_model.into(),
            text_model: text_model.into(),
        })
    }

    /// Builds a client from settings, reading the key from the configured
    /// environment variable.
    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GenerationError::MissingApiKey(config.api_key_env().to_string()))?;
        Self::new(
            api_key,
            config.endpoint(),
            config.image_model(),
            config.text_model(),
        )
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.endpoint)
    }

    async fn send(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = self
            .http
            .post(self.url(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        tracing::debug!(model, status = status.as_u16(), bytes = body.len(), "generateContent answered");

        if !status.is_success() {
            let err = api_error(status.as_u16(), status.canonical_reason(), &body);
            tracing::warn!(model, status = status.as_u16(), %err, "generateContent failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }
}

impl GenerationClient for GeminiClient {
    #[tracing::instrument(skip(self, image, prompt), fields(bytes = image.len()))]
    async fn edit_image(
        &self,
        image: &[u8],
        mime_type: &MimeType,
        prompt: &str,
    ) -> Result<GenerationOutput, GenerationError> {
        let request = GenerateContentRequest::edit(image, mime_type, prompt);
        self.send(&self.image_model, &request).await?.into_output()
    }

    #[tracing::instrument(skip(self, prompt))]
    async fn generate_image(&self, prompt: &str) -> Result<GenerationOutput, GenerationError> {
        let request = GenerateContentRequest::text(prompt);
        self.send(&self.image_model, &request).await?.into_output()
    }

    #[tracing::instrument(skip(self, prompt))]
    async fn enhance_prompt(&self, prompt: &str) -> Result<String, GenerationError> {
        let instruction = enhancement_instruction(prompt);
        let request = GenerateContentRequest::text(&instruction);
        let response = self.send(&self.text_model, &request).await?;
        response
            .text()
            .ok_or_else(|| GenerationError::InvalidResponse("empty enhancement".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_requires_api_key() {
        let config = Config {
            api_key_env: Some("IMAGE_GENIE_TEST_UNSET_KEY_7F3A".to_string()),
            ..Config::default()
        };
        let err = GeminiClient::from_config(&config).expect_err("no key set");
        assert_eq!(
            err,
            GenerationError::MissingApiKey("IMAGE_GENIE_TEST_UNSET_KEY_7F3A".to_string())
        );
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiClient::new("k", "https://example.test/v1beta/", "img", "txt").unwrap();
        assert_eq!(
            client.url("img"),
            "https://example.test/v1beta/models/img:generateContent"
        );
    }

    #[test]
    fn debug_hides_api_key() {
        let client = GeminiClient::new("secret-key", "https://example.test", "img", "txt").unwrap();
        assert!(!format!("{client:?}").contains("secret-key"));
    }

    #[test]
    fn enhancement_quotes_original_prompt() {
        let instruction = enhancement_instruction("a cat");
        assert!(instruction.ends_with("Original Prompt: \"a cat\""));
        assert!(instruction.contains("just output the enhanced prompt"));
    }
}
