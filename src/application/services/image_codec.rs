use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};

use crate::domain::EncodedImage;

const JPEG_QUALITY: u8 = 90;

#[derive(Debug, thiserror::Error)]
pub enum ImageCodecError {
    #[error("empty image upload")]
    Empty,
    #[error("undecodable image: {0}")]
    Undecodable(String),
    #[error("invalid base64: {0}")]
    InvalidBase64(String),
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}

pub fn encode_base64(bytes: &[u8]) -> EncodedImage {
    EncodedImage::from_bytes(bytes)
}

/// Decodes raw upload bytes, sniffing the container format from content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ImageCodecError> {
    if bytes.is_empty() {
        return Err(ImageCodecError::Empty);
    }

    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageCodecError::Undecodable(e.to_string()))?
        .decode()
        .map_err(|e| ImageCodecError::Undecodable(e.to_string()))
}

pub fn decode_encoded(image: &EncodedImage) -> Result<DynamicImage, ImageCodecError> {
    let bytes = image
        .decode_bytes()
        .map_err(|e| ImageCodecError::InvalidBase64(e.to_string()))?;
    decode_image(&bytes)
}

/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, ImageCodecError> {
    let rgb = image.to_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| ImageCodecError::EncodingFailed(e.to_string()))?;
    Ok(bytes)
}
