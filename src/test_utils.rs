// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! It also provides a scripted [`GenerationClient`] and small image fixtures.

use crate::application::port::generation::{GenerationClient, GenerationError, GenerationOutput};
use crate::domain::asset::MimeType;
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Encodes a solid grey PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([128, 128, 128, 255]));
    let mut bytes = Vec::new();
    image_rs::DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("encode test png");
    bytes
}

#[derive(Default)]
struct Script {
    answers: Mutex<VecDeque<Result<GenerationOutput, GenerationError>>>,
    enhancements: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: AtomicUsize,
    edit_calls: AtomicUsize,
    never_answer: bool,
}

/// Generation client answering from queued results.
///
/// Clones share the same script, so a test can keep a handle after moving
/// the client into the controller.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    script: Arc<Script>,
}

impl ScriptedClient {
    /// A client whose requests never complete.
    pub fn pending() -> Self {
        Self {
            script: Arc::new(Script {
                never_answer: true,
                ..Script::default()
            }),
        }
    }

    pub fn push(&self, answer: Result<GenerationOutput, GenerationError>) {
        self.script.answers.lock().expect("script lock").push_back(answer);
    }

    pub fn push_enhancement(&self, answer: Result<String, GenerationError>) {
        self.script
            .enhancements
            .lock()
            .expect("script lock")
            .push_back(answer);
    }

    /// Number of requests of any kind.
    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }

    pub fn edit_calls(&self) -> usize {
        self.script.edit_calls.load(Ordering::SeqCst)
    }

    async fn next_answer(&self) -> Result<GenerationOutput, GenerationError> {
        self.script.calls.fetch_add(1, Ordering::SeqCst);
        if self.script.never_answer {
            std::future::pending::<()>().await;
        }
        self.script
            .answers
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::InvalidResponse("no scripted answer".into())))
    }
}

impl GenerationClient for ScriptedClient {
    async fn edit_image(
        &self,
        _image: &[u8],
        _mime_type: &MimeType,
        _prompt: &str,
    ) -> Result<GenerationOutput, GenerationError> {
        self.script.edit_calls.fetch_add(1, Ordering::SeqCst);
        self.next_answer().await
    }

    async fn generate_image(&self, _prompt: &str) -> Result<GenerationOutput, GenerationError> {
        self.next_answer().await
    }

    async fn enhance_prompt(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.script.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .enhancements
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::InvalidResponse("no scripted answer".into())))
    }
}
