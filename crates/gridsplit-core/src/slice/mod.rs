//! Slicer: cut a rendered canvas into four standalone images.
//!
//! Two layouts are supported (see [`SliceMode`]):
//!
//! - **Stack**: four full-width bands, top to bottom
//! - **Grid**: 2x2 quadrants, row-major (TL, TR, BL, BR)
//!
//! Every tile owns its pixels, so the canvas can be dropped as soon as
//! slicing returns. A [`SliceSet`] always holds exactly four tiles.

mod mode;
mod regions;

pub use mode::{ParseSliceModeError, SliceMode};
pub use regions::slice_regions;

use log::debug;
use thiserror::Error;

use crate::geometry::{Dimensions, Region};
use crate::surface::Surface;

/// Number of images every slice operation produces.
pub const SLICE_COUNT: usize = 4;

/// Errors from the slicer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// The surface is zero-sized, its pixel buffer does not match its
    /// dimensions, or it is too small to yield four non-empty slices in the
    /// requested mode.
    #[error("Invalid surface: {width}x{height} cannot be split into 4 {mode} slices")]
    InvalidSurface {
        width: u32,
        height: u32,
        mode: SliceMode,
    },
}

/// Four sliced images in posting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceSet {
    mode: SliceMode,
    regions: [Region; SLICE_COUNT],
    tiles: [Surface; SLICE_COUNT],
}

impl SliceSet {
    /// Layout the set was cut with.
    pub fn mode(&self) -> SliceMode {
        self.mode
    }

    /// Tiles in posting order.
    pub fn tiles(&self) -> &[Surface; SLICE_COUNT] {
        &self.tiles
    }

    /// Where each tile came from on the canvas.
    pub fn regions(&self) -> &[Region; SLICE_COUNT] {
        &self.regions
    }

    pub fn get(&self, index: usize) -> Option<&Surface> {
        self.tiles.get(index)
    }

    pub fn len(&self) -> usize {
        SLICE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Surface> {
        self.tiles.iter()
    }

    pub fn into_tiles(self) -> [Surface; SLICE_COUNT] {
        self.tiles
    }
}

impl<'a> IntoIterator for &'a SliceSet {
    type Item = &'a Surface;
    type IntoIter = std::slice::Iter<'a, Surface>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Smallest canvas that splits into four non-empty slices.
pub fn minimum_dimensions(mode: SliceMode) -> Dimensions {
    match mode {
        SliceMode::Stack => Dimensions::new(1, 4),
        SliceMode::Grid => Dimensions::new(2, 2),
    }
}

/// Cut `surface` into four tiles according to `mode`.
///
/// Deterministic: identical input always yields identical tiles.
///
/// # Errors
///
/// `SliceError::InvalidSurface` when the surface is zero-sized, its buffer
/// length disagrees with its dimensions, or it is smaller than
/// [`minimum_dimensions`] for the mode.
pub fn slice(surface: &Surface, mode: SliceMode) -> Result<SliceSet, SliceError> {
    let min = minimum_dimensions(mode);
    if !surface.is_valid() || surface.width < min.width || surface.height < min.height {
        return Err(SliceError::InvalidSurface {
            width: surface.width,
            height: surface.height,
            mode,
        });
    }

    let regions = slice_regions(surface.dimensions(), mode);
    debug!(
        "slicing {}x{} surface into {} {:?}",
        surface.width, surface.height, mode, regions
    );
    let tiles = regions.map(|region| surface.crop(region));

    Ok(SliceSet {
        mode,
        regions,
        tiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface where each pixel encodes its position.
    fn test_surface(width: u32, height: u32) -> Surface {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x % 256) as u8);
                pixels.push((y % 256) as u8);
                pixels.push(((x / 256) * 16 + y / 256) as u8);
            }
        }
        Surface::new(width, height, pixels)
    }

    #[test]
    fn test_grid_quadrants() {
        let s = test_surface(1200, 1200);
        let set = slice(&s, SliceMode::Grid).unwrap();

        assert_eq!(set.len(), 4);
        assert_eq!(set.mode(), SliceMode::Grid);
        for tile in &set {
            assert_eq!((tile.width, tile.height), (600, 600));
        }

        // Top-right tile starts at canvas (600, 0)
        assert_eq!(set.tiles()[1].pixel(0, 0), s.pixel(600, 0));
        // Bottom-left tile starts at canvas (0, 600)
        assert_eq!(set.tiles()[2].pixel(0, 0), s.pixel(0, 600));
        // Bottom-right tile ends at canvas (1199, 1199)
        assert_eq!(set.tiles()[3].pixel(599, 599), s.pixel(1199, 1199));
    }

    #[test]
    fn test_stack_bands() {
        let s = test_surface(1200, 1200);
        let set = slice(&s, SliceMode::Stack).unwrap();

        for (i, tile) in set.iter().enumerate() {
            assert_eq!((tile.width, tile.height), (1200, 300));
            assert_eq!(tile.pixel(0, 0), s.pixel(0, 300 * i as u32));
        }
    }

    #[test]
    fn test_tiles_are_independent() {
        let s = test_surface(8, 8);
        let set = slice(&s, SliceMode::Grid).unwrap();
        let expected = set.tiles()[0].pixel(1, 1);
        drop(s);
        assert_eq!(set.tiles()[0].pixel(1, 1), expected);
    }

    #[test]
    fn test_mismatched_buffer_fails() {
        let short = Surface {
            width: 8,
            height: 8,
            pixels: vec![0; 10],
        };
        for mode in [SliceMode::Stack, SliceMode::Grid] {
            assert_eq!(
                slice(&short, mode),
                Err(SliceError::InvalidSurface {
                    width: 8,
                    height: 8,
                    mode
                })
            );
        }

        let long = Surface {
            width: 2,
            height: 4,
            pixels: vec![0; 2 * 4 * 3 + 1],
        };
        assert!(slice(&long, SliceMode::Stack).is_err());
    }

    #[test]
    fn test_zero_sized_surface_fails() {
        let s = Surface::new(0, 0, vec![]);
        for mode in [SliceMode::Stack, SliceMode::Grid] {
            assert!(matches!(
                slice(&s, mode),
                Err(SliceError::InvalidSurface { width: 0, height: 0, .. })
            ));
        }
    }

    #[test]
    fn test_too_small_surface_fails() {
        let s = test_surface(10, 3);
        assert!(slice(&s, SliceMode::Stack).is_err());
        assert!(slice(&s, SliceMode::Grid).is_ok());

        let s = test_surface(1, 10);
        assert!(slice(&s, SliceMode::Grid).is_err());
        assert!(slice(&s, SliceMode::Stack).is_ok());
    }

    #[test]
    fn test_regions_reported() {
        let s = test_surface(10, 11);
        let set = slice(&s, SliceMode::Stack).unwrap();
        assert_eq!(set.regions()[3], Region::new(0, 6, 10, 5));
        assert_eq!(set.get(3).map(|t| t.height), Some(5));
        assert!(set.get(4).is_none());
    }

    #[test]
    fn test_error_message() {
        let err = SliceError::InvalidSurface {
            width: 0,
            height: 0,
            mode: SliceMode::Grid,
        };
        assert_eq!(
            err.to_string(),
            "Invalid surface: 0x0 cannot be split into 4 grid slices"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
