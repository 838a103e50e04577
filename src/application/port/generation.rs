// SPDX-License-Identifier: MPL-2.0
//! Generation port definition.
//!
//! This module defines the [`GenerationClient`] trait: the request/response
//! boundary to the remote generative model.
//!
//! # Design Notes
//!
//! - One call is one request; the caller guarantees at most one is in flight
//! - A successful call carries an image, an explanatory text, or neither;
//!   interpreting "neither" is left to the caller
//! - The trait is `Send + Sync` so it can sit behind the async runtime

use crate::domain::asset::MimeType;
use std::future::Future;
use thiserror::Error;

// =============================================================================
// GenerationError
// =============================================================================

/// Errors returned by a generation backend. Every variant renders to a
/// message fit for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No credential is configured.
    #[error("No API key found. Set the {0} environment variable.")]
    MissingApiKey(String),

    /// The request never got a response (DNS, TLS, connection reset…).
    #[error("Network error: {0}")]
    Transport(String),

    /// The service answered with an error status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the service, or the status reason.
        message: String,
    },

    /// The response could not be interpreted.
    #[error("Unexpected response from the model: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Request / Response
// =============================================================================

/// An encoded image returned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: MimeType,
}

/// What a model call produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    pub image: Option<GeneratedImage>,
    /// Explanation or refusal when the model did not draw.
    pub text: Option<String>,
}

impl GenerationOutput {
    #[must_use]
    pub fn with_image(bytes: Vec<u8>, mime_type: MimeType) -> Self {
        Self {
            image: Some(GeneratedImage { bytes, mime_type }),
            text: None,
        }
    }

    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            image: None,
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.text.is_none()
    }
}

// =============================================================================
// GenerationClient Trait
// =============================================================================

/// Port to the remote generative model.
///
/// # Example
///
/// ```ignore
/// use image_genie::application::port::generation::GenerationClient;
///
/// async fn describe(client: &impl GenerationClient) {
///     match client.generate_image("a lighthouse at dusk").await {
///         Ok(output) if output.image.is_some() => println!("got an image"),
///         Ok(output) => println!("model said: {:?}", output.text),
///         Err(err) => eprintln!("{err}"),
///     }
/// }
/// ```
pub trait GenerationClient: Send + Sync {
    /// Edits `image` according to `prompt`.
    fn edit_image(
        &self,
        image: &[u8],
        mime_type: &MimeType,
        prompt: &str,
    ) -> impl Future<Output = Result<GenerationOutput, GenerationError>> + Send;

    /// Produces a new image from `prompt` alone.
    fn generate_image(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<GenerationOutput, GenerationError>> + Send;

    /// Rewrites `prompt` into a more descriptive one.
    fn enhance_prompt(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_display() {
        let err = GenerationError::MissingApiKey("GEMINI_API_KEY".to_string());
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        let err = GenerationError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        assert_eq!(err.to_string(), "Resource has been exhausted");

        let err = GenerationError::Transport("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn output_constructors() {
        let image = GenerationOutput::with_image(vec![1, 2], MimeType::png());
        assert!(image.image.is_some());
        assert!(image.text.is_none());

        let text = GenerationOutput::with_text("I can't create that");
        assert_eq!(text.text.as_deref(), Some("I can't create that"));

        assert!(GenerationOutput::default().is_empty());
        assert!(!text.is_empty());
    }
}
