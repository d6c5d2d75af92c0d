//! Dashed guide lines for the live preview.
//!
//! Guides show where the canvas will be cut: a centered crosshair in grid
//! mode, three horizontals at H/4, H/2 and 3H/4 in stack mode. They are
//! drawn on preview surfaces only and never reach the sliced output.

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::geometry::Dimensions;
use crate::slice::SliceMode;
use crate::surface::Surface;

/// Direction of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Constant y, spans the full width.
    Horizontal,
    /// Constant x, spans the full height.
    Vertical,
}

/// One full-length guide across the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub axis: Axis,
    /// Canvas coordinate of the line center (x for vertical, y for horizontal).
    pub position: f64,
}

/// Guide lines for `mode` on a canvas of `dimensions`.
pub fn guide_lines(dimensions: Dimensions, mode: SliceMode) -> Vec<GuideLine> {
    let w = dimensions.width as f64;
    let h = dimensions.height as f64;
    match mode {
        SliceMode::Grid => vec![
            GuideLine {
                axis: Axis::Vertical,
                position: w / 2.0,
            },
            GuideLine {
                axis: Axis::Horizontal,
                position: h / 2.0,
            },
        ],
        SliceMode::Stack => (1..4)
            .map(|i| GuideLine {
                axis: Axis::Horizontal,
                position: h / 4.0 * i as f64,
            })
            .collect(),
    }
}

/// Draw the dashed guides for `mode` onto `surface`.
pub fn draw_guides(surface: &mut Surface, mode: SliceMode, config: &EditorConfig) {
    if !surface.is_valid() {
        return;
    }
    let thickness = config.guide_width(surface.width);
    for line in guide_lines(surface.dimensions(), mode) {
        draw_dashed(surface, line, thickness, config);
    }
}

fn draw_dashed(surface: &mut Surface, line: GuideLine, thickness: u32, config: &EditorConfig) {
    let [dash, gap] = config.guide_dash;
    let period = (dash + gap).max(1);
    let color = config.guide_color.0;

    let (across_len, along_len) = match line.axis {
        Axis::Horizontal => (surface.height, surface.width),
        Axis::Vertical => (surface.width, surface.height),
    };
    let first = (line.position - thickness as f64 / 2.0).round().max(0.0) as u32;
    let last = (first + thickness).min(across_len);

    for across in first..last {
        for along in (0..along_len).filter(|t| t % period < dash) {
            match line.axis {
                Axis::Horizontal => surface.put_pixel(along, across, color),
                Axis::Vertical => surface.put_pixel(across, along, color),
            }
        }
    }
}
