//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_from_surface } from '@gridsplit/wasm';
//!
//! const png = encode_png_from_surface(surface);
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::JsSurface;
use gridsplit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match width * height * 3,
/// width or height is zero, or encoding fails internally.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsSurface to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_surface(surface: &JsSurface) -> Result<Vec<u8>, JsValue> {
    encode::encode_surface_png(&surface.to_surface()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// File name for the slice at zero-based `index` (`x-grid-part-{index+1}.png`).
#[wasm_bindgen]
pub fn slice_filename(index: usize) -> String {
    gridsplit_core::export::slice_filename(index)
}

/// Tests for encode bindings.
///
/// Note: functions returning `Result<T, JsValue>` only work on wasm32
/// targets; the underlying encoder is covered in `gridsplit_core::encode`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_encodes_to_png() {
        let surface = JsSurface::checked(10, 10, vec![128u8; 10 * 10 * 3]).unwrap();
        let png = encode::encode_surface_png(&surface.to_surface()).unwrap();
        assert_eq!(&png[..8], &encode::PNG_SIGNATURE);
    }

    #[test]
    fn test_slice_filename() {
        assert_eq!(slice_filename(0), "x-grid-part-1.png");
    }
}
