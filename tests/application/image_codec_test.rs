use image::GenericImageView;

use radialog::application::services::ImageCodecError;
use radialog::application::services::image_codec::{
    decode_encoded, decode_image, encode_base64, encode_jpeg,
};

use crate::helpers::png_bytes;

#[test]
fn given_png_upload_when_decoding_then_returns_image_with_dimensions() {
    let image = decode_image(&png_bytes(12, 7)).unwrap();
    assert_eq!(image.dimensions(), (12, 7));
}

#[test]
fn given_empty_upload_when_decoding_then_returns_empty_error() {
    assert!(matches!(decode_image(&[]), Err(ImageCodecError::Empty)));
}

#[test]
fn given_non_image_bytes_when_decoding_then_returns_undecodable_error() {
    let result = decode_image(b"definitely not an image");
    assert!(matches!(result, Err(ImageCodecError::Undecodable(_))));
}

#[test]
fn given_stored_base64_image_when_decoding_then_restores_raster() {
    let encoded = encode_base64(&png_bytes(5, 9));
    let image = decode_encoded(&encoded).unwrap();
    assert_eq!(image.dimensions(), (5, 9));
}

#[test]
fn given_decoded_image_when_encoding_jpeg_then_output_has_jpeg_signature() {
    let image = decode_image(&png_bytes(16, 16)).unwrap();
    let jpeg = encode_jpeg(&image).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}
