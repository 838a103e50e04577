// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions: decode, crop, downscale and re-encode.
//!
//! Everything here works on encoded bytes in, encoded bytes out, because
//! assets are stored encoded.

use crate::application::port::camera::CapturedFrame;
use crate::config::defaults::{PREVIEW_JPEG_QUALITY, PREVIEW_MAX_WIDTH};
use crate::domain::asset::MimeType;
use crate::domain::editing::{AspectRatio, CropRect};
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Encoded image produced by a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub mime_type: MimeType,
    pub width: u32,
    pub height: u32,
}

// ==========================================================================
// Decoding
// ==========================================================================

/// Decode encoded bytes of any supported format.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image_rs::load_from_memory(bytes)?)
}

/// MIME type detected from the content's magic bytes.
#[must_use]
pub fn sniff_mime(bytes: &[u8]) -> Option<MimeType> {
    image_rs::guess_format(bytes)
        .ok()
        .and_then(|format| MimeType::image(format.to_mime_type()))
}

/// MIME type implied by a file extension, e.g. `png` -> `image/png`.
#[must_use]
pub fn mime_from_extension(extension: &str) -> Option<MimeType> {
    ImageFormat::from_extension(extension).and_then(|format| MimeType::image(format.to_mime_type()))
}

/// Accepts an upload when its content is a recognised image format.
///
/// A declared non-image type is refused even if the content would decode.
/// A declared image type never stands in for the content check; the sniffed
/// type is what gets stored.
#[must_use]
pub fn accept_upload(bytes: &[u8], declared: Option<&str>) -> Option<MimeType> {
    if let Some(value) = declared {
        MimeType::image(value)?;
    }
    sniff_mime(bytes)
}

// ==========================================================================
// Image Transformation Functions
// ==========================================================================

/// Flip an image horizontally (mirror left-to-right).
#[must_use]
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Resize the image to the provided dimensions using a high-quality filter.
#[must_use]
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Crop the image to the specified rectangle.
///
/// The rectangle coordinates are clamped to the image boundaries.
/// If the image has no pixels, returns None.
#[must_use]
pub fn crop(image: &DynamicImage, rect: CropRect) -> Option<DynamicImage> {
    let img_width = image.width();
    let img_height = image.height();
    if img_width == 0 || img_height == 0 {
        return None;
    }

    let x = rect.x.min(img_width - 1);
    let y = rect.y.min(img_height - 1);
    let width = rect.width.min(img_width - x).max(1);
    let height = rect.height.min(img_height - y).max(1);

    Some(image.crop_imm(x, y, width, height))
}

/// Centered crop of encoded `bytes` to `ratio`, re-encoded as PNG.
pub fn crop_to_aspect(bytes: &[u8], ratio: AspectRatio) -> Result<EncodedImage> {
    let image = decode(bytes)?;
    let (width, height) = image.dimensions();
    let rect = CropRect::centered(width, height, ratio.ratio())
        .ok_or_else(|| Error::Image(format!("cannot crop a {width}x{height} image")))?;
    let cropped = crop(&image, rect)
        .ok_or_else(|| Error::Image(format!("cannot crop a {width}x{height} image")))?;
    tracing::debug!(%ratio, ?rect, "cropped to aspect ratio");
    encode_png(&cropped)
}

/// Downscales to the template preview width and re-encodes as JPEG.
/// Images already narrow enough keep their size.
pub fn preview_thumbnail(bytes: &[u8]) -> Result<EncodedImage> {
    let image = decode(bytes)?;
    let (width, height) = image.dimensions();
    let image = if width > PREVIEW_MAX_WIDTH {
        let scaled_height =
            (f64::from(height) * f64::from(PREVIEW_MAX_WIDTH) / f64::from(width)).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled_height = scaled_height as u32;
        resize(&image, PREVIEW_MAX_WIDTH, scaled_height)
    } else {
        image
    };
    encode_jpeg(&image, PREVIEW_JPEG_QUALITY)
}

/// Encodes a camera frame as JPEG, mirrored when requested so it matches
/// a selfie preview.
pub fn frame_to_jpeg(frame: &CapturedFrame, mirrored: bool, quality: u8) -> Result<EncodedImage> {
    let buffer = RgbaImage::from_raw(frame.width, frame.height, frame.rgba.clone()).ok_or_else(
        || {
            Error::Image(format!(
                "frame buffer does not match {}x{}",
                frame.width, frame.height
            ))
        },
    )?;
    let image = DynamicImage::ImageRgba8(buffer);
    let image = if mirrored {
        flip_horizontal(&image)
    } else {
        image
    };
    encode_jpeg(&image, quality)
}

// ==========================================================================
// Encoding
// ==========================================================================

pub fn encode_png(image: &DynamicImage) -> Result<EncodedImage> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(EncodedImage {
        bytes,
        mime_type: MimeType::png(),
        width: image.width(),
        height: image.height(),
    })
}

/// JPEG has no alpha channel; transparency is dropped.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<EncodedImage> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    rgb.write_with_encoder(encoder)?;
    Ok(EncodedImage {
        bytes,
        mime_type: MimeType::jpeg(),
        width: rgb.width(),
        height: rgb.height(),
    })
}
