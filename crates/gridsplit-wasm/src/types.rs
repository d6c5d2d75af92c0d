//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core gridsplit
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use gridsplit_core::encode::EncodeError;
use gridsplit_core::export::ExportedSlice;
use gridsplit_core::{SourceImage, Surface};
use wasm_bindgen::prelude::*;

/// A rendered canvas or slice for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `rgba()` copy it
/// into JavaScript memory. Call `free()` to release a large surface early;
/// otherwise wasm-bindgen's finalizer cleans it up.
#[wasm_bindgen]
pub struct JsSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSurface {
    /// Create a JsSurface from dimensions and RGB pixel data.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or the pixel data length
    /// doesn't match width * height * 3.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsSurface, JsValue> {
        Self::checked(width, height, pixels).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the surface width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the surface height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the RGB pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data, ready for `new ImageData(...)`.
    pub fn rgba(&self) -> Vec<u8> {
        self.to_surface().to_rgba()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSurface {
    pub(crate) fn checked(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimensions { width, height });
        }
        match Surface::expected_len(width, height) {
            Some(expected) if expected == pixels.len() => Ok(Self {
                width,
                height,
                pixels,
            }),
            expected => Err(EncodeError::InvalidPixelData {
                expected: expected.unwrap_or(usize::MAX),
                actual: pixels.len(),
            }),
        }
    }

    pub(crate) fn from_surface(surface: Surface) -> Self {
        Self {
            width: surface.width,
            height: surface.height,
            pixels: surface.pixels,
        }
    }

    /// Convert back to a core Surface. Clones the pixel data.
    pub(crate) fn to_surface(&self) -> Surface {
        Surface {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A decoded upload held in WASM memory.
///
/// Decoding once and reusing the handle avoids re-decoding the file for every
/// preview render.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Get the image width in pixels (after EXIF orientation)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels (after EXIF orientation)
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }
}

impl JsSourceImage {
    pub(crate) fn from_source(inner: SourceImage) -> Self {
        Self { inner }
    }

    pub(crate) fn source(&self) -> &SourceImage {
        &self.inner
    }
}

/// One encoded slice from the result screen.
#[wasm_bindgen]
pub struct JsExportedSlice {
    index: usize,
    filename: String,
    width: u32,
    height: u32,
    png: Vec<u8>,
}

#[wasm_bindgen]
impl JsExportedSlice {
    /// Zero-based posting position
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Download file name, e.g. `x-grid-part-1.png`
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// PNG bytes; wrap in `new Blob([png], { type: 'image/png' })`.
    pub fn png(&self) -> Vec<u8> {
        self.png.clone()
    }
}

impl From<&ExportedSlice> for JsExportedSlice {
    fn from(slice: &ExportedSlice) -> Self {
        Self {
            index: slice.index,
            filename: slice.filename.clone(),
            width: slice.width,
            height: slice.height,
            png: slice.png.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_surface_creation() {
        let s = JsSurface::checked(100, 50, vec![0u8; 100 * 50 * 3]).unwrap();
        assert_eq!(s.width(), 100);
        assert_eq!(s.height(), 50);
        assert_eq!(s.byte_length(), 15000);
    }

    #[test]
    fn test_js_surface_rgba() {
        let s = JsSurface::checked(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(s.rgba(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_js_surface_rejects_mismatched_buffer() {
        assert!(matches!(
            JsSurface::checked(8, 8, vec![0u8; 10]),
            Err(EncodeError::InvalidPixelData {
                expected: 192,
                actual: 10
            })
        ));
        assert!(matches!(
            JsSurface::checked(0, 8, vec![]),
            Err(EncodeError::InvalidDimensions { width: 0, height: 8 })
        ));
    }

    #[test]
    fn test_surface_round_trip() {
        let surface = Surface::new(3, 1, vec![9u8; 9]);
        let js = JsSurface::from_surface(surface.clone());
        assert_eq!(js.to_surface(), surface);
    }

    #[test]
    fn test_source_image_handle() {
        let js = JsSourceImage::from_source(SourceImage::from_rgb(4, 2, &[0u8; 24]));
        assert_eq!((js.width(), js.height()), (4, 2));
        assert_eq!(js.source().pixels.len(), 32);
    }

    #[test]
    fn test_exported_slice_conversion() {
        let exported = ExportedSlice {
            index: 2,
            filename: "x-grid-part-3.png".to_string(),
            width: 10,
            height: 5,
            png: vec![1, 2, 3],
        };
        let js = JsExportedSlice::from(&exported);
        assert_eq!(js.index(), 2);
        assert_eq!(js.filename(), "x-grid-part-3.png");
        assert_eq!((js.width(), js.height()), (10, 5));
        assert_eq!(js.png(), vec![1, 2, 3]);
    }
}
