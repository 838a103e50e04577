// SPDX-License-Identifier: MPL-2.0
//! Camera capture port and the scoped stream session.
//!
//! A [`CameraSession`] owns the open stream for as long as the capture dialog
//! is shown. The stream is stopped when the session is closed, when the
//! facing mode changes, when a retry replaces it, and when the session is
//! dropped on any other path.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Unable to access camera. Please ensure you have granted permissions.")]
    PermissionDenied,

    #[error("No camera device found")]
    NoDevice,

    #[error("Camera stream is not active")]
    NotActive,

    #[error("Frame capture failed: {0}")]
    CaptureFailed(String),
}

/// Which physical camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// Front camera; captures are mirrored so they match the preview.
    #[default]
    User,
    /// Rear camera.
    Environment,
}

impl FacingMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }

    #[must_use]
    pub fn is_mirrored(self) -> bool {
        self == FacingMode::User
    }
}

/// One RGBA frame grabbed from a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    pub rgba: Vec<u8>,
}

/// An open camera stream.
pub trait CameraStream {
    fn capture_frame(&mut self) -> Result<CapturedFrame, CameraError>;

    /// Stops every track of the stream. Must be idempotent.
    fn stop(&mut self);
}

/// A camera that can be opened.
pub trait CameraDevice {
    type Stream: CameraStream;

    fn open(&mut self, facing: FacingMode) -> Result<Self::Stream, CameraError>;
}

/// Scoped ownership of a camera stream.
pub struct CameraSession<D: CameraDevice> {
    device: D,
    stream: Option<D::Stream>,
    facing: FacingMode,
    error: Option<CameraError>,
}

impl<D: CameraDevice> CameraSession<D> {
    /// Opens the device with the user-facing camera. Acquisition failures do
    /// not fail the session; they are kept in [`error`](Self::error) so the
    /// dialog can offer a retry.
    pub fn open(device: D) -> Self {
        let mut session = Self {
            device,
            stream: None,
            facing: FacingMode::default(),
            error: None,
        };
        session.start();
        session
    }

    fn start(&mut self) {
        self.release();
        match self.device.open(self.facing) {
            Ok(stream) => {
                self.stream = Some(stream);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(%err, facing = ?self.facing, "camera acquisition failed");
                self.error = Some(err);
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            tracing::debug!("camera stream released");
        }
    }

    /// Tries to acquire the stream again after a failure.
    pub fn retry(&mut self) {
        self.start();
    }

    /// Switches between front and rear camera, restarting the stream.
    pub fn toggle_facing(&mut self) {
        self.facing = self.facing.toggled();
        self.start();
    }

    #[must_use]
    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    #[must_use]
    pub fn error(&self) -> Option<&CameraError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// Grabs the current frame.
    pub fn capture(&mut self) -> Result<CapturedFrame, CameraError> {
        let stream = self.stream.as_mut().ok_or(CameraError::NotActive)?;
        stream.capture_frame()
    }

    /// Closes the dialog, stopping the stream.
    pub fn close(mut self) {
        self.release();
    }
}

impl<D: CameraDevice> Drop for CameraSession<D> {
    fn drop(&mut self) {
        self.release();
    }
}
