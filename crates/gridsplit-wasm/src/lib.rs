//! gridsplit WASM - WebAssembly bindings for gridsplit
//!
//! This crate exposes the gridsplit-core framing and slicing pipeline to the
//! browser front end.
//!
//! # Module Structure
//!
//! - `editor` - Upload → edit → result session (`JsEditor`)
//! - `types` - WASM-compatible wrapper types for surfaces, sources and slices
//! - `decode` - Upload validation and image decoding
//! - `transform` - Stateless framing, rendering and slicing
//! - `encode` - PNG encoding and export file names
//! - `logger` - Browser console backend for the core's `log` records
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditor } from '@gridsplit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new JsEditor(undefined);
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (editor.upload(file.type, bytes)) {
//!   const frame = editor.render_preview();
//!   ctx.putImageData(new ImageData(new Uint8ClampedArray(frame.rgba()), frame.width), 0, 0);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod logger;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, is_image_mime};
pub use editor::JsEditor;
pub use encode::{encode_png, encode_png_from_surface, slice_filename};
pub use transform::{frame_for_ratio, render_frame, slice_surface};
pub use types::{JsExportedSlice, JsSourceImage, JsSurface};

/// Initialize the WASM module (called automatically on load)
///
/// Routes the core's `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    logger::install();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
