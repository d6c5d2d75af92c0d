//! Slice geometry.
//!
//! Sizes that do not divide evenly are floored for every slice except the
//! last along an axis, which takes the remainder:
//!
//! - stack: bands 0..=2 are `H / 4` tall, band 3 is `H - 3 * (H / 4)`
//! - grid: the left column is `W / 2` wide and the right `W - W / 2`;
//!   rows split the same way

use crate::geometry::{Dimensions, Region};

use super::{SliceMode, SLICE_COUNT};

/// The four regions for `mode`, in posting order.
pub fn slice_regions(dimensions: Dimensions, mode: SliceMode) -> [Region; SLICE_COUNT] {
    let Dimensions { width, height } = dimensions;
    match mode {
        SliceMode::Stack => {
            let band = height / 4;
            let last = height - band * 3;
            [
                Region::new(0, 0, width, band),
                Region::new(0, band, width, band),
                Region::new(0, band * 2, width, band),
                Region::new(0, band * 3, width, last),
            ]
        }
        SliceMode::Grid => {
            let left = width / 2;
            let right = width - left;
            let top = height / 2;
            let bottom = height - top;
            [
                Region::new(0, 0, left, top),
                Region::new(left, 0, right, top),
                Region::new(0, top, left, bottom),
                Region::new(left, top, right, bottom),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_even() {
        let r = slice_regions(Dimensions::new(1200, 1200), SliceMode::Stack);
        for (i, region) in r.iter().enumerate() {
            assert_eq!(*region, Region::new(0, 300 * i as u32, 1200, 300));
        }
    }

    #[test]
    fn test_stack_remainder_goes_last() {
        let r = slice_regions(Dimensions::new(10, 11), SliceMode::Stack);
        assert_eq!(r[0].height, 2);
        assert_eq!(r[1].height, 2);
        assert_eq!(r[2].height, 2);
        assert_eq!(r[3], Region::new(0, 6, 10, 5));
    }

    #[test]
    fn test_grid_even() {
        let r = slice_regions(Dimensions::new(1200, 1200), SliceMode::Grid);
        assert_eq!(r[0], Region::new(0, 0, 600, 600));
        assert_eq!(r[1], Region::new(600, 0, 600, 600));
        assert_eq!(r[2], Region::new(0, 600, 600, 600));
        assert_eq!(r[3], Region::new(600, 600, 600, 600));
    }

    #[test]
    fn test_grid_odd() {
        let r = slice_regions(Dimensions::new(5, 3), SliceMode::Grid);
        assert_eq!(r[0], Region::new(0, 0, 2, 1));
        assert_eq!(r[1], Region::new(2, 0, 3, 1));
        assert_eq!(r[2], Region::new(0, 1, 2, 2));
        assert_eq!(r[3], Region::new(2, 1, 3, 2));
    }

    #[test]
    fn test_tiny_canvas_has_empty_regions() {
        // A 1x1 canvas cannot be split; the last region takes the pixel
        let r = slice_regions(Dimensions::new(1, 1), SliceMode::Stack);
        assert_eq!(r[0].height, 0);
        assert_eq!(r[3], Region::new(0, 0, 1, 1));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
