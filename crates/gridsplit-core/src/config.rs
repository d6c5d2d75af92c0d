//! Editor configuration.
//!
//! All fields have defaults matching the stock editor look, so a front end
//! can pass a partial object (or nothing) and get sensible behavior.

use serde::{Deserialize, Serialize};

use crate::slice::SliceMode;
use crate::transform::InterpolationFilter;

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

/// Canvas background behind the source image (slate-800).
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x1e, 0x29, 0x3b);

/// Guide line color (sky-400).
pub const DEFAULT_GUIDE_COLOR: Rgb = Rgb::new(0x38, 0xbd, 0xf8);

/// Tunables for the compositor, overlay, zoom control and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Fill color for canvas areas the image does not cover.
    pub background: Rgb,
    /// Guide line color.
    pub guide_color: Rgb,
    /// Dash pattern as (dash length, gap length) in canvas pixels.
    pub guide_dash: [u32; 2],
    /// Minimum guide line width in canvas pixels.
    pub guide_min_width: u32,
    /// Guide line width grows as canvas width / divisor.
    pub guide_width_divisor: u32,
    /// Scale change per zoom click.
    pub zoom_step: f64,
    /// Smallest scale zooming out may reach.
    pub min_scale: f64,
    /// Delay between consecutive downloads in "download all".
    pub download_stagger_ms: u32,
    /// Mode selected when an image is first loaded.
    pub default_mode: SliceMode,
    /// Resampling filter used by the compositor.
    pub filter: InterpolationFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            guide_color: DEFAULT_GUIDE_COLOR,
            guide_dash: [15, 10],
            guide_min_width: 2,
            guide_width_divisor: 400,
            zoom_step: 0.05,
            min_scale: 0.1,
            download_stagger_ms: 200,
            default_mode: SliceMode::Stack,
            filter: InterpolationFilter::Bilinear,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace out-of-range values with their defaults.
    ///
    /// Scale floor and zoom step must be finite and positive, the dash must
    /// have a visible segment and the width divisor must be non-zero.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            self.min_scale = defaults.min_scale;
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            self.zoom_step = defaults.zoom_step;
        }
        if self.guide_dash[0] == 0 {
            self.guide_dash = defaults.guide_dash;
        }
        if self.guide_width_divisor == 0 {
            self.guide_width_divisor = defaults.guide_width_divisor;
        }
        self
    }

    /// Guide line width for a canvas `canvas_width` pixels wide.
    pub fn guide_width(&self, canvas_width: u32) -> u32 {
        let divisor = self.guide_width_divisor.max(1);
        (canvas_width / divisor).max(self.guide_min_width).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::new();
        assert_eq!(config.background, Rgb::new(30, 41, 59));
        assert_eq!(config.zoom_step, 0.05);
        assert_eq!(config.min_scale, 0.1);
        assert_eq!(config.download_stagger_ms, 200);
        assert_eq!(config.default_mode, SliceMode::Stack);
    }

    #[test]
    fn test_validated_repairs_bad_values() {
        let mut config = EditorConfig::default();
        config.min_scale = 0.0;
        config.zoom_step = f64::NAN;
        config.guide_dash = [0, 5];
        config.guide_width_divisor = 0;

        let config = config.validated();
        assert_eq!(config.min_scale, 0.1);
        assert_eq!(config.zoom_step, 0.05);
        assert_eq!(config.guide_dash, [15, 10]);
        assert_eq!(config.guide_width_divisor, 400);
    }

    #[test]
    fn test_validated_keeps_good_values() {
        let mut config = EditorConfig::default();
        config.min_scale = 0.25;
        config.zoom_step = 0.1;
        assert_eq!(config.clone().validated(), config);
    }

    #[test]
    fn test_guide_width() {
        let config = EditorConfig::default();
        assert_eq!(config.guide_width(400), 2);
        assert_eq!(config.guide_width(1200), 3);
        assert_eq!(config.guide_width(4000), 10);
    }
}
