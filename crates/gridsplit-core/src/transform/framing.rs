//! Placement of the source image on the canvas: pan offset and zoom scale.
//!
//! A [`Framing`] says where the top-left corner of the scaled source lands
//! (`offset`, canvas pixels) and how much it is scaled (`scale`, uniform).
//! It is changed in three ways:
//!
//! - [`Framing::cover`] recenters after an aspect-ratio change
//! - [`Framing::zoom`] steps the scale, never below a floor
//! - [`DragState`] pans 1:1 with the pointer, unclamped

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Point};

/// Pan offset and uniform scale of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Framing {
    /// Top-left placement of the scaled image, in canvas pixels.
    pub offset: Point,
    /// Uniform scale factor applied to both axes.
    pub scale: f64,
}

impl Default for Framing {
    fn default() -> Self {
        Self::identity()
    }
}

impl Framing {
    /// Offset (0, 0), scale 1.
    pub const fn identity() -> Self {
        Self {
            offset: Point::ORIGIN,
            scale: 1.0,
        }
    }

    pub fn new(offset: Point, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Smallest scale at which a `src_width` x `src_height` image covers
    /// `target` on both axes.
    pub fn cover_scale(src_width: u32, src_height: u32, target: Dimensions) -> f64 {
        let scale_x = target.width as f64 / src_width.max(1) as f64;
        let scale_y = target.height as f64 / src_height.max(1) as f64;
        scale_x.max(scale_y)
    }

    /// Scale the source to cover `target` and center it.
    ///
    /// The overflow on the longer axis is split evenly, so the offset on that
    /// axis is negative and the other is zero.
    pub fn cover(src_width: u32, src_height: u32, target: Dimensions) -> Self {
        let scale = Self::cover_scale(src_width, src_height, target);
        let offset = Point::new(
            (target.width as f64 - src_width as f64 * scale) / 2.0,
            (target.height as f64 - src_height as f64 * scale) / 2.0,
        );
        Self { offset, scale }
    }

    /// Add `delta` to the scale, flooring at `min_scale`.
    pub fn zoom(&mut self, delta: f64, min_scale: f64) {
        let next = self.scale + delta;
        self.scale = if next.is_finite() {
            next.max(min_scale)
        } else {
            min_scale
        };
    }

    /// Scale as a whole percentage for the zoom readout.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round().max(0.0) as u32
    }

    /// Size of the scaled source image on the canvas.
    pub fn scaled_size(&self, src_width: u32, src_height: u32) -> (f64, f64) {
        (src_width as f64 * self.scale, src_height as f64 * self.scale)
    }

    /// Whether the scaled source covers every pixel of `target`.
    pub fn covers(&self, src_width: u32, src_height: u32, target: Dimensions) -> bool {
        const EPS: f64 = 1e-6;
        let (w, h) = self.scaled_size(src_width, src_height);
        self.offset.x <= EPS
            && self.offset.y <= EPS
            && self.offset.x + w >= target.width as f64 - EPS
            && self.offset.y + h >= target.height as f64 - EPS
    }
}

/// State of an in-progress pan gesture.
///
/// At gesture start the anchor `pointer - offset` is captured; while the
/// gesture lasts the offset is `pointer - anchor`, so the image follows the
/// pointer 1:1 in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Start a gesture at `pointer` for an image currently at `offset`.
    pub fn begin(&mut self, pointer: Point, offset: Point) {
        self.anchor = Some(pointer - offset);
    }

    /// New offset for `pointer`, or `None` when no gesture is active.
    pub fn update(&self, pointer: Point) -> Option<Point> {
        self.anchor.map(|anchor| pointer - anchor)
    }

    /// End the gesture (pointer up or pointer left the canvas).
    pub fn end(&mut self) {
        self.anchor = None;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
