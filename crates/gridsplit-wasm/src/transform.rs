//! WASM bindings for framing, compositing and slicing.
//!
//! These are the stateless building blocks; [`crate::JsEditor`] wraps the
//! same operations in a session.

use crate::editor::config_from_js;
use crate::types::{JsSourceImage, JsSurface};
use gridsplit_core::geometry::{Dimensions, Point};
use gridsplit_core::transform::{render, Framing};
use gridsplit_core::{overlay, slice, AspectRatio, SliceMode};
use wasm_bindgen::prelude::*;

fn parse_mode(mode: &str) -> Result<SliceMode, JsValue> {
    mode
        .parse::<SliceMode>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_ratio(ratio: &str) -> Result<AspectRatio, JsValue> {
    ratio
        .parse::<AspectRatio>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render `source` onto a `width` x `height` canvas.
///
/// # Arguments
///
/// * `offset_x`, `offset_y` - Top-left placement of the scaled image
/// * `scale` - Uniform scale factor
/// * `guides` - Slice mode whose guides to draw (`"grid"`/`"stack"`), or
///   `undefined` for a clean render
/// * `config` - Partial `EditorConfig` (background, filter, guide style,
///   `min_scale`), or `undefined` for defaults
///
/// # Example (TypeScript)
///
/// ```typescript
/// const frame = render_frame(source, -120, 0, 1.5, 1200, 600, 'stack', { filter: 'nearest' });
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(frame.rgba()), frame.width), 0, 0);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_frame(
    source: &JsSourceImage,
    offset_x: f64,
    offset_y: f64,
    scale: f64,
    width: u32,
    height: u32,
    guides: Option<String>,
    config: JsValue,
) -> Result<JsSurface, JsValue> {
    let config = config_from_js(config)?;
    let framing = Framing::new(Point::new(offset_x, offset_y), scale.max(config.min_scale));
    let mut surface = render(source.source(), &framing, Dimensions::new(width, height), &config);
    if let Some(mode) = guides {
        overlay::draw_guides(&mut surface, parse_mode(&mode)?, &config);
    }
    Ok(JsSurface::from_surface(surface))
}

/// Canvas size and centered cover framing for an aspect-ratio preset.
///
/// Returns `{ dimensions: { width, height }, framing: { offset: { x, y }, scale } }`.
#[wasm_bindgen]
pub fn frame_for_ratio(src_width: u32, src_height: u32, ratio: &str) -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct Frame {
        dimensions: Dimensions,
        framing: Framing,
    }

    let dimensions = parse_ratio(ratio)?.dimensions_for(src_width, src_height);
    let frame = Frame {
        dimensions,
        framing: Framing::cover(src_width, src_height, dimensions),
    };
    serde_wasm_bindgen::to_value(&frame).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Cut a rendered surface into four tiles.
///
/// Returns an array of four `JsSurface` in posting order.
#[wasm_bindgen]
pub fn slice_surface(surface: &JsSurface, mode: &str) -> Result<js_sys::Array, JsValue> {
    let set = slice(&surface.to_surface(), parse_mode(mode)?)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(set
        .into_tiles()
        .into_iter()
        .map(|tile| JsValue::from(JsSurface::from_surface(tile)))
        .collect())
}
