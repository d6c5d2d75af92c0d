//! Upload intake: reject non-image files, decode the rest.

use log::{debug, warn};
use thiserror::Error;

use super::{decode_image, DecodeError, SourceImage};

/// Errors surfaced to the user when an upload is refused.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The file's MIME type is not an image type.
    #[error("Please upload a valid image file (JPG, PNG, WebP).")]
    InvalidFileType {
        /// MIME type reported for the rejected file.
        mime: String,
    },

    /// The file claimed to be an image but could not be decoded.
    #[error("Could not read image: {0}")]
    Decode(#[from] DecodeError),

    /// The image decoded to zero pixels.
    #[error("Image has no pixels")]
    EmptyImage,
}

/// Check whether a MIME type names an image: anything starting with `image/`.
///
/// The subtype is not inspected; the decoder decides whether the bytes are
/// usable.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Validate and decode an uploaded file.
///
/// # Arguments
///
/// * `mime` - MIME type reported by the browser for the file
/// * `bytes` - File contents
///
/// # Errors
///
/// `IntakeError::InvalidFileType` for non-image MIME types (the bytes are not
/// inspected), `IntakeError::Decode` when decoding fails and
/// `IntakeError::EmptyImage` for zero-sized images.
pub fn accept_upload(mime: &str, bytes: &[u8]) -> Result<SourceImage, IntakeError> {
    if !is_image_mime(mime) {
        warn!("rejected upload with mime type {mime:?}");
        return Err(IntakeError::InvalidFileType {
            mime: mime.to_string(),
        });
    }

    let image = decode_image(bytes)?;
    if image.is_empty() {
        return Err(IntakeError::EmptyImage);
    }

    debug!(
        "accepted {mime} upload: {}x{} ({} bytes)",
        image.width,
        image.height,
        bytes.len()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let rgb = vec![200u8; (width * height * 3) as usize];
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
            .unwrap();
        buf
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("IMAGE/WEBP"));
        assert!(is_image_mime("image/"));
        assert!(!is_image_mime("image"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_bare_image_prefix_reaches_decoder() {
        let result = accept_upload("image/", b"not really an image");
        assert!(matches!(result, Err(IntakeError::Decode(_))));

        let img = accept_upload("image/", &png_bytes(3, 2)).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
    }

    #[test]
    fn test_accept_png() {
        let img = accept_upload("image/png", &png_bytes(12, 7)).unwrap();
        assert_eq!((img.width, img.height), (12, 7));
    }

    #[test]
    fn test_reject_non_image_even_with_image_bytes() {
        let result = accept_upload("text/plain", &png_bytes(2, 2));
        match result {
            Err(IntakeError::InvalidFileType { mime }) => assert_eq!(mime, "text/plain"),
            other => panic!("Expected InvalidFileType, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_file_type_message() {
        let err = IntakeError::InvalidFileType {
            mime: "video/mp4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Please upload a valid image file (JPG, PNG, WebP)."
        );
    }

    #[test]
    fn test_undecodable_image() {
        let result = accept_upload("image/png", b"not really a png");
        assert!(matches!(result, Err(IntakeError::Decode(_))));
    }
}
