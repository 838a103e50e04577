// SPDX-License-Identifier: MPL-2.0
//! Still-image camera implementing the [`CameraDevice`] port.
//!
//! Terminal sessions have no live video; this device serves frames from an
//! image file (a snapshot written by an external capture tool, for example).
//! Both facing modes read the same file.
//!
//! [`CameraDevice`]: crate::application::port::CameraDevice

use crate::application::port::camera::{
    CameraDevice, CameraError, CameraStream, CapturedFrame, FacingMode,
};
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StillImageCamera {
    source: PathBuf,
}

impl StillImageCamera {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[derive(Debug)]
pub struct StillImageStream {
    frame: CapturedFrame,
    stopped: bool,
}

impl CameraDevice for StillImageCamera {
    type Stream = StillImageStream;

    fn open(&mut self, facing: FacingMode) -> Result<StillImageStream, CameraError> {
        let bytes = std::fs::read(&self.source).map_err(|err| match err.kind() {
            ErrorKind::NotFound => CameraError::NoDevice,
            ErrorKind::PermissionDenied => CameraError::PermissionDenied,
            _ => CameraError::CaptureFailed(err.to_string()),
        })?;
        let image = image_rs::load_from_memory(&bytes)
            .map_err(|err| CameraError::CaptureFailed(err.to_string()))?
            .to_rgba8();
        tracing::debug!(source = %self.source.display(), ?facing, "camera stream opened");
        Ok(StillImageStream {
            frame: CapturedFrame {
                width: image.width(),
                height: image.height(),
                rgba: image.into_raw(),
            },
            stopped: false,
        })
    }
}

impl CameraStream for StillImageStream {
    fn capture_frame(&mut self) -> Result<CapturedFrame, CameraError> {
        if self.stopped {
            return Err(CameraError::NotActive);
        }
        Ok(self.frame.clone())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
