// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! Gemini HTTP API, the system clipboard, and the filesystem.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Remote model over HTTP (implements [`GenerationClient`])
//! - [`storage`]: File and in-memory stores (implement [`KeyValueStore`])
//! - [`clipboard`]: System clipboard via `arboard` (implements [`ClipboardReader`])
//! - [`camera`]: Still-image camera (implements [`CameraDevice`])
//!
//! [`GenerationClient`]: crate::application::port::GenerationClient
//! [`KeyValueStore`]: crate::application::port::KeyValueStore
//! [`ClipboardReader`]: crate::application::port::ClipboardReader
//! [`CameraDevice`]: crate::application::port::CameraDevice

pub mod camera;
pub mod clipboard;
pub mod gemini;
pub mod storage;

// Re-export main types for convenience
pub use camera::StillImageCamera;
pub use clipboard::SystemClipboard;
pub use gemini::GeminiClient;
pub use storage::{FileStore, MemoryStore};
