// SPDX-License-Identifier: MPL-2.0
//! Application root: the controller that orchestrates user actions and the
//! path resolution shared by configuration and persistence.
//!
//! The [`AppController`] wires together the asset history, the canvas
//! viewport and the template library, and translates actions into side
//! effects like model requests, template persistence or file export.

pub mod controller;
pub mod paths;

pub use controller::{
    AppController, Busy, ClearRequest, GenerationStatus, GenerationTicket, Rejection, ShareDraft,
};
