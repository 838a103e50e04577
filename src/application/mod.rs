// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`template_library`]: The persisted prompt template collection
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The controller in [`crate::app`] composes both

pub mod port;
pub mod template_library;

pub use template_library::TemplateLibrary;
