// SPDX-License-Identifier: MPL-2.0
//! `image_genie` is a prompt-driven image editor and generator.
//!
//! It keeps an in-session history of uploaded and generated images, lets the
//! user zoom, pan and compare results against the original, crops to common
//! aspect ratios, and manages a persisted library of reusable prompts. The
//! generative model sits behind the
//! [`GenerationClient`](application::port::GenerationClient) port; the
//! bundled adapter talks to the Gemini API.

#![doc(html_root_url = "https://docs.rs/image_genie/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
