//! Plain geometry types shared by the compositor, slicer and overlay.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the canvas
//! - `Point` values are in canvas pixels and may be fractional or negative
//! - `Dimensions` and `Region` are whole pixels

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in canvas pixel units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Canvas size in whole pixels.
///
/// Both sides are at least 1; use [`Dimensions::new`] to build one from
/// arbitrary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions, raising zero sides to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Round fractional sizes half-up to whole pixels (minimum 1).
    pub fn from_f64(width: f64, height: f64) -> Self {
        Self::new(round_px(width), round_px(height))
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

fn round_px(value: f64) -> u32 {
    if !value.is_finite() || value < 1.0 {
        return 1;
    }
    (value + 0.5).floor().min(u32::MAX as f64) as u32
}

/// An axis-aligned pixel rectangle inside a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
