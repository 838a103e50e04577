// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`camera`]: Camera stream acquisition and capture
//! - [`clipboard`]: Clipboard text reads
//! - [`generation`]: Remote generative model (edit, create, enhance)
//! - [`storage`]: Local key-value persistence

pub mod camera;
pub mod clipboard;
pub mod generation;
pub mod storage;

// Re-export main types for convenience
pub use camera::{CameraDevice, CameraError, CameraSession, CameraStream, CapturedFrame, FacingMode};
pub use clipboard::{ClipboardError, ClipboardReader};
pub use generation::{GeneratedImage, GenerationClient, GenerationError, GenerationOutput};
pub use storage::{KeyValueStore, StorageError};
