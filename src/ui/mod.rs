// SPDX-License-Identifier: MPL-2.0
//! User interface state and presentation helpers.
//!
//! Everything here is independent of how the session is rendered: the
//! interactive terminal in `main.rs` reads and drives these types, and a
//! graphical front end could do the same.
//!
//! - [`state`] - Canvas interaction state (zoom, viewport, drag)
//! - [`history`] - Rows of the history sidebar
//! - [`command`] - Commands of the interactive session

pub mod command;
pub mod history;
pub mod state;
