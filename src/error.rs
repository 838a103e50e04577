// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("Storage Error: {0}")]
    Storage(String),
    /// Model call failed; the message is already fit for the user.
    #[error("{0}")]
    Generation(String),
    /// Input rejected before any state change or external call.
    #[error("{0}")]
    Validation(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<crate::application::port::GenerationError> for Error {
    fn from(err: crate::application::port::GenerationError) -> Self {
        Error::Generation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn validation_error_displays_message_verbatim() {
        let err = Error::Validation("Please upload an image to edit.".into());
        assert_eq!(err.to_string(), "Please upload an image to edit.");
    }

    #[test]
    fn generation_error_keeps_user_message() {
        let err: Error = crate::application::port::GenerationError::Transport("timed out".into()).into();
        assert_eq!(err.to_string(), "Network error: timed out");
    }

    #[test]
    fn image_decode_failure_maps_to_image_variant() {
        let err: Error = image_rs::load_from_memory(b"not an image")
            .expect_err("garbage should not decode")
            .into();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn json_failure_maps_to_storage_variant() {
        let err: Error = serde_json::from_str::<Vec<String>>("{")
            .expect_err("truncated json should fail")
            .into();
        assert!(matches!(err, Error::Storage(_)));
    }
}
