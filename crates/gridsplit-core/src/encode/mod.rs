//! Image encoding for export.
//!
//! Slices are written as PNG. Encoding is synchronous and single-threaded,
//! like the rest of the pipeline.

mod png;

pub use png::{encode_png, encode_surface_png, EncodeError, PNG_SIGNATURE};
