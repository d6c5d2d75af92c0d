//! Aspect-ratio presets for the crop frame.
//!
//! Every preset derives the target canvas from the source image's native
//! size. Apart from `original` and `1:1`, the width is kept and the height
//! follows from the ratio, so a wide source stays full-resolution across the
//! frame.
//!
//! | preset   | width      | height     |
//! |----------|------------|------------|
//! | original | W          | H          |
//! | 2:1      | W          | W / 2      |
//! | 16:9     | W          | W * 9/16   |
//! | 1:1      | min(W, H)  | min(W, H)  |
//! | 4:5      | W          | W * 5/4    |
//! | 9:16     | W          | W * 16/9   |
//! | 1:2      | W          | W * 2      |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Dimensions;

/// Returned when a preset label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown aspect ratio: {0}")]
pub struct ParseAspectRatioError(pub String);

/// Crop frame aspect-ratio preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Keep the source image's own proportions.
    #[default]
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "2:1")]
    TwoToOne,
    #[serde(rename = "16:9")]
    SixteenToNine,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    FourToFive,
    #[serde(rename = "9:16")]
    NineToSixteen,
    /// Tall frame: four 1200x600 stack slices from a 1200 px wide source.
    #[serde(rename = "1:2")]
    OneToTwo,
}

impl AspectRatio {
    /// Every preset, in declaration order.
    pub const ALL: [AspectRatio; 7] = [
        AspectRatio::Original,
        AspectRatio::TwoToOne,
        AspectRatio::SixteenToNine,
        AspectRatio::Square,
        AspectRatio::FourToFive,
        AspectRatio::NineToSixteen,
        AspectRatio::OneToTwo,
    ];

    /// Presets offered in the ratio picker.
    pub const SELECTABLE: [AspectRatio; 6] = [
        AspectRatio::Original,
        AspectRatio::TwoToOne,
        AspectRatio::SixteenToNine,
        AspectRatio::Square,
        AspectRatio::FourToFive,
        AspectRatio::OneToTwo,
    ];

    /// Canonical label, also used for parsing and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Original => "original",
            AspectRatio::TwoToOne => "2:1",
            AspectRatio::SixteenToNine => "16:9",
            AspectRatio::Square => "1:1",
            AspectRatio::FourToFive => "4:5",
            AspectRatio::NineToSixteen => "9:16",
            AspectRatio::OneToTwo => "1:2",
        }
    }

    /// Label shown on the picker button.
    pub fn display_label(self) -> &'static str {
        match self {
            AspectRatio::Original => "Auto",
            other => other.as_str(),
        }
    }

    /// Unrounded target size for a source of `width` x `height`.
    pub fn target_size(self, width: u32, height: u32) -> (f64, f64) {
        let w = width as f64;
        let h = height as f64;
        match self {
            AspectRatio::Original => (w, h),
            AspectRatio::TwoToOne => (w, w / 2.0),
            AspectRatio::SixteenToNine => (w, w * 9.0 / 16.0),
            AspectRatio::Square => {
                let side = w.min(h);
                (side, side)
            }
            AspectRatio::FourToFive => (w, w * 5.0 / 4.0),
            AspectRatio::NineToSixteen => (w, w * 16.0 / 9.0),
            AspectRatio::OneToTwo => (w, w * 2.0),
        }
    }

    /// Target canvas for a source of `width` x `height`, in whole pixels.
    ///
    /// Fractional sides are rounded half-up; the result is never zero.
    pub fn dimensions_for(self, width: u32, height: u32) -> Dimensions {
        let (w, h) = self.target_size(width, height);
        Dimensions::from_f64(w, h)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(AspectRatio::Original);
        }
        AspectRatio::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseAspectRatioError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_keeps_source_size() {
        assert_eq!(
            AspectRatio::Original.dimensions_for(1200, 800),
            Dimensions::new(1200, 800)
        );
    }

    #[test]
    fn test_width_driven_presets() {
        assert_eq!(
            AspectRatio::TwoToOne.dimensions_for(1200, 800),
            Dimensions::new(1200, 600)
        );
        assert_eq!(
            AspectRatio::SixteenToNine.dimensions_for(1920, 1),
            Dimensions::new(1920, 1080)
        );
        assert_eq!(
            AspectRatio::FourToFive.dimensions_for(1000, 10),
            Dimensions::new(1000, 1250)
        );
        assert_eq!(
            AspectRatio::NineToSixteen.dimensions_for(900, 10),
            Dimensions::new(900, 1600)
        );
        assert_eq!(
            AspectRatio::OneToTwo.dimensions_for(1200, 300),
            Dimensions::new(1200, 2400)
        );
    }

    #[test]
    fn test_square_uses_short_side() {
        assert_eq!(
            AspectRatio::Square.dimensions_for(1200, 800),
            Dimensions::new(800, 800)
        );
        assert_eq!(
            AspectRatio::Square.dimensions_for(500, 900),
            Dimensions::new(500, 500)
        );
    }

    #[test]
    fn test_fractional_heights_round() {
        // 1001 * 9/16 = 563.0625
        assert_eq!(
            AspectRatio::SixteenToNine.dimensions_for(1001, 10).height,
            563
        );
        // 3 / 2 = 1.5 -> 2
        assert_eq!(AspectRatio::TwoToOne.dimensions_for(3, 3).height, 2);
        // 1 / 2 = 0.5 -> never zero
        assert_eq!(AspectRatio::TwoToOne.dimensions_for(1, 1).height, 1);
    }

    #[test]
    fn test_parse_round_trip_labels() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.as_str().parse::<AspectRatio>(), Ok(ratio));
        }
        assert_eq!("Auto".parse::<AspectRatio>(), Ok(AspectRatio::Original));
        assert!("3:2".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_selectable_excludes_nine_sixteen() {
        assert!(!AspectRatio::SELECTABLE.contains(&AspectRatio::NineToSixteen));
        assert_eq!(AspectRatio::Original.display_label(), "Auto");
        assert_eq!(AspectRatio::OneToTwo.display_label(), "1:2");
    }
}
