//! Editor session WASM bindings.
//!
//! `JsEditor` keeps the upload → edit → result state in WASM memory. The
//! front end forwards user input and redraws from `render_preview()`.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const editor = new JsEditor(undefined);
//! editor.upload(file.type, new Uint8Array(await file.arrayBuffer()));
//! if (editor.stage === 'upload') showError(editor.upload_error);
//!
//! editor.set_aspect_ratio('1:2');
//! canvas.onpointerdown = (e) => editor.pointer_down(e.offsetX, e.offsetY);
//!
//! editor.confirm();
//! for (const d of editor.download_schedule()) {
//!   setTimeout(() => save(editor.result_slice(d.index)), d.delay_ms);
//! }
//! ```

use crate::types::{JsExportedSlice, JsSurface};
use gridsplit_core::geometry::Point;
use gridsplit_core::{AspectRatio, Editor, EditorConfig, SliceMode};
use wasm_bindgen::prelude::*;

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Read a partial `EditorConfig` object (snake_case fields).
///
/// `undefined` and `null` mean defaults. The result is validated.
pub(crate) fn config_from_js(config: JsValue) -> Result<EditorConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value::<EditorConfig>(config)
        .map(EditorConfig::validated)
        .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))
}

/// A single editing session.
#[wasm_bindgen]
pub struct JsEditor {
    inner: Editor,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor.
    ///
    /// `config` is a partial `EditorConfig` object (snake_case fields); pass
    /// `undefined` or `null` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditor, JsValue> {
        Ok(Self::with_config(config_from_js(config)?))
    }

    /// Current screen: `"upload"`, `"edit"` or `"result"`.
    #[wasm_bindgen(getter)]
    pub fn stage(&self) -> String {
        self.inner.stage_kind().as_str().to_string()
    }

    /// Message for the last rejected upload, if any.
    #[wasm_bindgen(getter)]
    pub fn upload_error(&self) -> Option<String> {
        self.inner.upload_error().map(|e| e.to_string())
    }

    /// Hand over an uploaded file.
    ///
    /// Returns `true` when the editor moved to the edit stage, `false` when
    /// the file was rejected (see `upload_error`).
    pub fn upload(&mut self, mime: &str, bytes: &[u8]) -> Result<bool, JsValue> {
        self.inner.upload(mime, bytes).map_err(to_js_error)?;
        Ok(self.inner.edit().is_ok())
    }

    /// Switch between `"stack"` and `"grid"`.
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: SliceMode = mode.parse().map_err(to_js_error)?;
        self.inner.set_mode(mode).map_err(to_js_error)
    }

    /// Apply an aspect-ratio preset (`"original"`, `"2:1"`, `"16:9"`, `"1:1"`,
    /// `"4:5"`, `"9:16"`, `"1:2"`) and recenter.
    pub fn set_aspect_ratio(&mut self, ratio: &str) -> Result<(), JsValue> {
        let ratio: AspectRatio = ratio.parse().map_err(to_js_error)?;
        self.inner.set_aspect_ratio(ratio).map_err(to_js_error)
    }

    /// Re-apply the current preset, undoing pan and zoom.
    pub fn reset_position(&mut self) -> Result<(), JsValue> {
        self.inner.reset_position().map_err(to_js_error)
    }

    pub fn zoom_in(&mut self) -> Result<(), JsValue> {
        self.inner.zoom_in().map_err(to_js_error)
    }

    pub fn zoom_out(&mut self) -> Result<(), JsValue> {
        self.inner.zoom_out().map_err(to_js_error)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.inner.pointer_down(Point::new(x, y)).map_err(to_js_error)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.inner.pointer_move(Point::new(x, y)).map_err(to_js_error)
    }

    /// Pointer released or left the canvas.
    pub fn pointer_up(&mut self) -> Result<(), JsValue> {
        self.inner.pointer_up().map_err(to_js_error)
    }

    /// Current slice mode while editing.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> Option<String> {
        self.inner.edit().ok().map(|s| s.mode().to_string())
    }

    /// Current aspect-ratio preset while editing.
    #[wasm_bindgen(getter)]
    pub fn aspect_ratio(&self) -> Option<String> {
        self.inner.edit().ok().map(|s| s.aspect_ratio().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_width(&self) -> Option<u32> {
        self.inner.edit().ok().map(|s| s.dimensions().width)
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_height(&self) -> Option<u32> {
        self.inner.edit().ok().map(|s| s.dimensions().height)
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> Option<f64> {
        self.inner.edit().ok().map(|s| s.offset().x)
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> Option<f64> {
        self.inner.edit().ok().map(|s| s.offset().y)
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> Option<f64> {
        self.inner.edit().ok().map(|s| s.scale())
    }

    /// Zoom readout, e.g. `105` for 105%.
    #[wasm_bindgen(getter)]
    pub fn zoom_percent(&self) -> Option<u32> {
        self.inner.edit().ok().map(|s| s.framing().zoom_percent())
    }

    /// Info badge text, e.g. `"1200 x 600 • 4x Stack"`.
    #[wasm_bindgen(getter)]
    pub fn badge(&self) -> Option<String> {
        self.inner
            .edit()
            .ok()
            .map(|s| format!("{} \u{2022} {}", s.dimensions(), s.mode().label()))
    }

    /// Render the live preview with guide lines.
    pub fn render_preview(&self) -> Result<JsSurface, JsValue> {
        self.inner
            .preview()
            .map(JsSurface::from_surface)
            .map_err(to_js_error)
    }

    /// Slice the current framing and move to the result stage.
    ///
    /// On failure the error is logged to the console, the editor stays in the
    /// edit stage and the message is returned for an alert.
    pub fn confirm(&mut self) -> Result<(), JsValue> {
        match self.inner.confirm() {
            Ok(_) => Ok(()),
            Err(e) => {
                let err = to_js_error(&e);
                web_sys::console::error_2(&JsValue::from_str("Failed to slice image"), &err);
                Err(err)
            }
        }
    }

    /// Number of finished slices (4 on the result stage, otherwise 0).
    #[wasm_bindgen(getter)]
    pub fn slice_count(&self) -> usize {
        self.inner
            .result()
            .map(|r| r.result().slices.len())
            .unwrap_or(0)
    }

    /// Finished slice at `index`, if on the result stage.
    pub fn result_slice(&self, index: usize) -> Option<JsExportedSlice> {
        let result = self.inner.result().ok()?;
        result.result().slices.get(index).map(JsExportedSlice::from)
    }

    /// Posting instructions for the result screen.
    #[wasm_bindgen(getter)]
    pub fn posting_hint(&self) -> Option<String> {
        self.inner
            .result()
            .ok()
            .map(|r| r.result().posting_hint().to_string())
    }

    /// Staggered "download all" plan: `[{ index, filename, delay_ms }, ...]`.
    pub fn download_schedule(&self) -> Result<JsValue, JsValue> {
        let stagger_ms = self.inner.config().download_stagger_ms;
        let schedule = self
            .inner
            .result()
            .map(|r| r.result().schedule(stagger_ms))
            .unwrap_or_default();
        serde_wasm_bindgen::to_value(&schedule).map_err(to_js_error)
    }

    /// Drop everything and return to the upload stage.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// "Change image": leave the edit stage without slicing.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
}

impl JsEditor {
    pub(crate) fn with_config(config: EditorConfig) -> Self {
        Self {
            inner: Editor::new(config),
        }
    }
}
