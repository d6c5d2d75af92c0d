//! Upload intake WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { is_image_mime, decode_image } from '@gridsplit/wasm';
//!
//! if (!is_image_mime(file.type)) {
//!   showError('Please upload a valid image file (JPG, PNG, WebP).');
//! } else {
//!   const bytes = new Uint8Array(await file.arrayBuffer());
//!   const source = decode_image(file.type, bytes);
//!   console.log(`Decoded ${source.width}x${source.height}`);
//! }
//! ```

use crate::types::JsSourceImage;
use gridsplit_core::decode;
use wasm_bindgen::prelude::*;

/// Check whether a MIME type is an image type (`image/*`).
#[wasm_bindgen]
pub fn is_image_mime(mime: &str) -> bool {
    decode::is_image_mime(mime)
}

/// Validate and decode an uploaded file.
///
/// # Errors
///
/// Returns the user-facing message when the MIME type is not an image or the
/// bytes cannot be decoded.
#[wasm_bindgen]
pub fn decode_image(mime: &str, bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    decode::accept_upload(mime, bytes)
        .map(JsSourceImage::from_source)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
