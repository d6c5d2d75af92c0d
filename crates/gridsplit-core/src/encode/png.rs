//! PNG encoding for exported slices.
//!
//! Slices are exported losslessly so the seams between neighbouring tiles
//! line up exactly once the images are shown side by side.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::surface::Surface;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error for zero dimensions, a pixel buffer of the wrong length,
/// or an encoder failure.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode a whole surface to PNG bytes.
pub fn encode_surface_png(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    encode_png(&surface.pixels, surface.width, surface.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    #[test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let png = encode_png(&pixels, 100, 100).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let pixels: Vec<u8> = (0..6 * 4 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let png = encode_png(&pixels, 6, 4).unwrap();

        let decoded = decode_image(&png).unwrap();
        assert_eq!((decoded.width, decoded.height), (6, 4));
        for (rgba, rgb) in decoded.pixels.chunks(4).zip(pixels.chunks(3)) {
            assert_eq!(&rgba[..3], rgb);
            assert_eq!(rgba[3], 255);
        }
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_short() {
        let pixels = vec![128u8; 99 * 100 * 3];
        let result = encode_png(&pixels, 100, 100);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_zero_width() {
        let result = encode_png(&[], 0, 100);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidDimensions { width: 0, height: 100 })
        ));
    }

    #[test]
    fn test_encode_surface() {
        let surface = Surface::new(3, 2, vec![10u8; 18]);
        let png = encode_surface_png(&surface).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_error_messages() {
        let err = EncodeError::InvalidPixelData {
            expected: 300,
            actual: 200,
        };
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 300 bytes (width * height * 3), got 200"
        );
    }
}
