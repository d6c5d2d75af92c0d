//! Transform compositor: draw the framed source image onto a canvas surface.
//!
//! # Algorithm
//!
//! 1. Fill the surface with the opaque background color, so transparent
//!    sources never leave holes.
//! 2. Draw the source at `framing.offset`, scaled by `framing.scale`.
//!
//! Drawing uses inverse mapping: destination pixel `(dx, dy)` is covered when
//! its center lies inside the drawn rectangle, and its source coordinate is
//!
//! ```text
//! src_x = (dx + 0.5 - offset_x) / scale - 0.5
//! src_y = (dy + 0.5 - offset_y) / scale - 0.5
//! ```
//!
//! Samples are premultiplied by alpha and composited over the background.
//! Anything that falls outside the surface is simply not drawn.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::decode::SourceImage;
use crate::geometry::Dimensions;
use crate::surface::Surface;

use super::Framing;

/// Resampling filter used when drawing the scaled source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFilter {
    /// Nearest neighbor, cheapest; handy for very large live previews.
    Nearest,
    /// Bilinear, matching a canvas with image smoothing enabled.
    #[default]
    Bilinear,
}

/// Render `source` framed by `framing` onto a new surface of `dimensions`.
pub fn render(
    source: &SourceImage,
    framing: &Framing,
    dimensions: Dimensions,
    config: &EditorConfig,
) -> Surface {
    let mut surface = Surface::filled(dimensions, config.background);
    draw_source(&mut surface, source, framing, config.filter);
    surface
}

/// Per-axis sampling plan: which destination pixels are covered and where
/// each one reads from in the source.
struct AxisMap {
    /// First covered destination index.
    start: u32,
    /// Source coordinate for each covered destination index.
    coords: Vec<f64>,
}

impl AxisMap {
    fn new(dst_len: u32, src_len: u32, offset: f64, scale: f64) -> Self {
        let extent = src_len as f64 * scale;
        let mut start = dst_len;
        let mut coords = Vec::new();
        for d in 0..dst_len {
            let center = d as f64 + 0.5;
            if center < offset || center >= offset + extent {
                if !coords.is_empty() {
                    break;
                }
                continue;
            }
            if coords.is_empty() {
                start = d;
            }
            coords.push((center - offset) / scale - 0.5);
        }
        Self { start, coords }
    }
}

fn draw_source(
    surface: &mut Surface,
    source: &SourceImage,
    framing: &Framing,
    filter: InterpolationFilter,
) {
    if source.is_empty() || surface.is_empty() {
        return;
    }
    let scale = framing.scale;
    if !(scale.is_finite() && scale > 0.0) {
        return;
    }

    let cols = AxisMap::new(surface.width, source.width, framing.offset.x, scale);
    let rows = AxisMap::new(surface.height, source.height, framing.offset.y, scale);
    trace!(
        "compositing {}x{} source at ({:.1}, {:.1}) x{:.3}: {}x{} covered",
        source.width,
        source.height,
        framing.offset.x,
        framing.offset.y,
        scale,
        cols.coords.len(),
        rows.coords.len()
    );

    let width = surface.width as usize;
    for (j, &sy) in rows.coords.iter().enumerate() {
        let dy = rows.start as usize + j;
        for (i, &sx) in cols.coords.iter().enumerate() {
            let dx = cols.start as usize + i;
            let premul = match filter {
                InterpolationFilter::Nearest => sample_nearest(source, sx, sy),
                InterpolationFilter::Bilinear => sample_bilinear(source, sx, sy),
            };
            let idx = (dy * width + dx) * 3;
            let bg = &mut surface.pixels[idx..idx + 3];
            let inv_alpha = 1.0 - premul[3];
            for c in 0..3 {
                let v = premul[c] + bg[c] as f64 * inv_alpha;
                bg[c] = v.clamp(0.0, 255.0).round() as u8;
            }
        }
    }
}

/// Premultiplied RGBA at integer source coordinates; alpha in 0..=1.
#[inline]
fn premultiplied(source: &SourceImage, x: u32, y: u32) -> [f64; 4] {
    let [r, g, b, a] = source.rgba(x, y);
    let alpha = a as f64 / 255.0;
    [r as f64 * alpha, g as f64 * alpha, b as f64 * alpha, alpha]
}

fn sample_nearest(source: &SourceImage, x: f64, y: f64) -> [f64; 4] {
    let max_x = (source.width - 1) as f64;
    let max_y = (source.height - 1) as f64;
    let px = (x + 0.5).floor().clamp(0.0, max_x) as u32;
    let py = (y + 0.5).floor().clamp(0.0, max_y) as u32;
    premultiplied(source, px, py)
}

/// Bilinear sample with edge clamping.
///
/// Coordinates within half a pixel of the border read the edge pixel, which
/// keeps the image edge crisp instead of fading into the background.
fn sample_bilinear(source: &SourceImage, x: f64, y: f64) -> [f64; 4] {
    let max_x = (source.width - 1) as f64;
    let max_y = (source.height - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(source.width - 1);
    let y1 = (y0 + 1).min(source.height - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = premultiplied(source, x0, y0);
    let p10 = premultiplied(source, x1, y0);
    let p01 = premultiplied(source, x0, y1);
    let p11 = premultiplied(source, x1, y1);

    let mut result = [0.0; 4];
    for i in 0..4 {
        result[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rgb;
    use crate::geometry::Point;

    /// Opaque source where each pixel encodes its position.
    fn test_source(width: u32, height: u32) -> SourceImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 77, 255]);
            }
        }
        SourceImage::new(width, height, pixels)
    }

    fn solid_source(width: u32, height: u32, rgba: [u8; 4]) -> SourceImage {
        SourceImage::new(width, height, rgba.repeat((width * height) as usize))
    }

    fn config_with_background(bg: Rgb) -> EditorConfig {
        let mut config = EditorConfig::default();
        config.background = bg;
        config
    }

    #[test]
    fn test_identity_render_copies_source() {
        let src = test_source(20, 10);
        let out = render(
            &src,
            &Framing::identity(),
            Dimensions::new(20, 10),
            &EditorConfig::default(),
        );
        for y in 0..10 {
            for x in 0..20 {
                assert_eq!(out.pixel(x, y), Some([x as u8, y as u8, 77]));
            }
        }
    }

    #[test]
    fn test_nearest_identity_copies_source() {
        let src = test_source(9, 9);
        let mut config = EditorConfig::default();
        config.filter = InterpolationFilter::Nearest;
        let out = render(&src, &Framing::identity(), Dimensions::new(9, 9), &config);
        assert_eq!(out.pixel(8, 3), Some([8, 3, 77]));
    }

    #[test]
    fn test_uncovered_area_is_background() {
        let bg = Rgb::new(1, 2, 3);
        let src = solid_source(10, 10, [200, 200, 200, 255]);
        let framing = Framing::new(Point::new(5.0, 5.0), 1.0);
        let out = render(&src, &framing, Dimensions::new(20, 20), &config_with_background(bg));

        assert_eq!(out.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(out.pixel(4, 10), Some([1, 2, 3]));
        assert_eq!(out.pixel(5, 5), Some([200, 200, 200]));
        assert_eq!(out.pixel(14, 14), Some([200, 200, 200]));
        assert_eq!(out.pixel(15, 14), Some([1, 2, 3]));
    }

    #[test]
    fn test_offscreen_image_leaves_background() {
        let bg = Rgb::new(9, 9, 9);
        let src = solid_source(10, 10, [255, 0, 0, 255]);
        let framing = Framing::new(Point::new(-500.0, 40.0), 1.0);
        let out = render(&src, &framing, Dimensions::new(30, 30), &config_with_background(bg));
        assert!(out.pixels.chunks(3).all(|p| p == [9, 9, 9]));
    }

    #[test]
    fn test_transparent_source_shows_background() {
        let bg = Rgb::new(30, 41, 59);
        let src = solid_source(4, 4, [255, 255, 255, 0]);
        let out = render(
            &src,
            &Framing::identity(),
            Dimensions::new(4, 4),
            &config_with_background(bg),
        );
        assert!(out.pixels.chunks(3).all(|p| p == [30, 41, 59]));
    }

    #[test]
    fn test_half_alpha_blends() {
        let bg = Rgb::new(0, 0, 0);
        let src = solid_source(2, 2, [200, 100, 50, 128]);
        let out = render(
            &src,
            &Framing::identity(),
            Dimensions::new(2, 2),
            &config_with_background(bg),
        );
        // 200 * 128/255 = 100.39
        assert_eq!(out.pixel(0, 0), Some([100, 50, 25]));
    }

    #[test]
    fn test_scale_two_doubles_size() {
        let src = solid_source(5, 5, [10, 20, 30, 255]);
        let framing = Framing::new(Point::ORIGIN, 2.0);
        let bg = Rgb::new(0, 0, 0);
        let out = render(&src, &framing, Dimensions::new(12, 12), &config_with_background(bg));
        assert_eq!(out.pixel(9, 9), Some([10, 20, 30]));
        assert_eq!(out.pixel(10, 10), Some([0, 0, 0]));
    }

    #[test]
    fn test_integer_offset_shifts_pixels() {
        let src = test_source(10, 10);
        let framing = Framing::new(Point::new(-3.0, -2.0), 1.0);
        let out = render(&src, &framing, Dimensions::new(5, 5), &EditorConfig::default());
        assert_eq!(out.pixel(0, 0), Some([3, 2, 77]));
        assert_eq!(out.pixel(4, 4), Some([7, 6, 77]));
    }

    #[test]
    fn test_positive_offset_leaves_background_strip() {
        let src = test_source(4, 4);
        let framing = Framing::new(Point::new(2.0, 0.0), 1.0);
        let bg = Rgb::new(0, 0, 0);
        let out = render(&src, &framing, Dimensions::new(4, 4), &config_with_background(bg));
        assert_eq!(out.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(out.pixel(1, 3), Some([0, 0, 0]));
        assert_eq!(out.pixel(2, 0), Some([0, 0, 77]));
    }

    #[test]
    fn test_degenerate_scale_draws_nothing() {
        let bg = Rgb::new(5, 5, 5);
        let src = solid_source(4, 4, [255, 255, 255, 255]);
        let framing = Framing::new(Point::ORIGIN, 0.0);
        let out = render(&src, &framing, Dimensions::new(4, 4), &config_with_background(bg));
        assert!(out.pixels.chunks(3).all(|p| p == [5, 5, 5]));
    }

    #[test]
    fn test_axis_map_bounds() {
        let map = AxisMap::new(10, 4, 2.0, 1.0);
        assert_eq!(map.start, 2);
        assert_eq!(map.coords, vec![0.0, 1.0, 2.0, 3.0]);

        let empty = AxisMap::new(10, 4, 20.0, 1.0);
        assert!(empty.coords.is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
