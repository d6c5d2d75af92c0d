//! Opaque RGB drawing surface.
//!
//! The compositor renders into a `Surface`, the overlay draws on top of it and
//! the slicer cuts it into tiles. Pixels are RGB8 in row-major order; every
//! pixel is opaque because the compositor fills the background first.

use crate::config::Rgb;
use crate::geometry::{Dimensions, Region};

/// An owned RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface from existing pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a surface filled with one color.
    pub fn filled(dimensions: Dimensions, color: Rgb) -> Self {
        let count = dimensions.width as usize * dimensions.height as usize;
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&color.0);
        }
        Self {
            width: dimensions.width,
            height: dimensions.height,
            pixels,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// A zero-sized surface cannot be sliced or encoded.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Buffer length a `width` x `height` RGB surface needs, or `None` if it
    /// does not fit in memory.
    pub fn expected_len(width: u32, height: u32) -> Option<usize> {
        (width as usize).checked_mul(height as usize)?.checked_mul(3)
    }

    /// Non-empty, and the buffer holds exactly `width * height` RGB pixels.
    ///
    /// Only valid surfaces may be cropped or drawn on.
    pub fn is_valid(&self) -> bool {
        !self.is_empty()
            && Self::expected_len(self.width, self.height) == Some(self.pixels.len())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Pixel at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Set pixel (x, y); writes outside the surface are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.pixels[idx..idx + 3].copy_from_slice(&color);
    }

    /// Copy `region` into a new, independent surface.
    ///
    /// The region is clamped to the surface bounds. The surface must be
    /// [`valid`](Surface::is_valid).
    pub fn crop(&self, region: Region) -> Surface {
        let left = region.x.min(self.width);
        let top = region.y.min(self.height);
        let right = region.right().min(self.width);
        let bottom = region.bottom().min(self.height);
        let out_width = right - left;
        let out_height = bottom - top;

        let row_bytes = out_width as usize * 3;
        let mut output = Vec::with_capacity(row_bytes * out_height as usize);

        // Copy pixel data row by row
        for y in top..bottom {
            let start = self.index(left, y);
            output.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }

        Surface {
            width: out_width,
            height: out_height,
            pixels: output,
        }
    }

    /// Expand to RGBA with full alpha, the layout `ImageData` expects.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for px in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(px);
            rgba.push(255);
        }
        rgba
    }
}
