//! Framing and compositing of the source image.
//!
//! This module turns a decoded upload plus the user's pan/zoom into the
//! rendered canvas that the slicer cuts up.
//!
//! # Coordinate System
//!
//! - Offsets are in canvas pixels, positive = right/down
//! - The offset is the top-left corner of the scaled source image
//! - Scale is uniform; 1.0 draws the source at its native size

mod compose;
mod framing;

pub use compose::{render, InterpolationFilter};
pub use framing::{DragState, Framing};
