//! gridsplit Core - Image framing and slicing library
//!
//! This crate turns an uploaded photo into four images for posting: the user
//! frames the photo on a canvas (pan, zoom, aspect-ratio preset), the
//! compositor renders that canvas and the slicer cuts it into a 2x2 grid or a
//! four-band vertical stack.
//!
//! # Pipeline
//!
//! 1. [`decode::accept_upload`] - reject non-images, decode to a [`SourceImage`]
//! 2. [`transform::render`] - draw the framed source onto a [`Surface`]
//! 3. [`slice::slice`] - cut the surface into a [`SliceSet`] of four tiles
//! 4. [`export::export_slices`] - encode each tile as a named PNG
//!
//! [`session::Editor`] drives the same pipeline as an upload → edit → result
//! state machine.

pub mod aspect;
pub mod config;
pub mod decode;
pub mod encode;
pub mod export;
pub mod geometry;
pub mod overlay;
pub mod session;
pub mod slice;
pub mod surface;
pub mod transform;

pub use aspect::AspectRatio;
pub use config::{EditorConfig, Rgb};
pub use decode::{accept_upload, IntakeError, SourceImage};
pub use geometry::{Dimensions, Point, Region};
pub use session::{Editor, SliceProcessingError, Stage, StageKind};
pub use slice::{slice, SliceError, SliceMode, SliceSet};
pub use surface::Surface;
pub use transform::{render, Framing, InterpolationFilter};
