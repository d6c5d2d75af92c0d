//! Editor session: the upload → edit → result flow.
//!
//! [`Editor`] owns the whole state of one editing session. The three screens
//! are the variants of [`Stage`]; every operation checks the stage it needs
//! and transitions with a plain `match`. There is no global state and at most
//! one confirm can run at a time because it borrows the editor mutably.
//!
//! ```text
//! Upload --upload ok--> Edit --confirm ok--> Result
//!   ^  \--upload err--/  |  \--confirm err--/   |
//!   |                    |                      |
//!   +------ cancel ------+-------- reset -------+
//! ```

use std::fmt;

use log::{debug, warn};
use thiserror::Error;

use crate::aspect::AspectRatio;
use crate::config::EditorConfig;
use crate::decode::{accept_upload, IntakeError, SourceImage};
use crate::encode::EncodeError;
use crate::export::{export_slices, SliceResult};
use crate::geometry::{Dimensions, Point};
use crate::overlay::draw_guides;
use crate::slice::{slice, SliceError, SliceMode, SliceSet};
use crate::surface::Surface;
use crate::transform::{render, DragState, Framing};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Upload,
    Edit,
    Result,
}

impl StageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StageKind::Upload => "upload",
            StageKind::Edit => "edit",
            StageKind::Result => "result",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation was invoked on the wrong screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Operation requires the {expected} stage, but the session is in {actual}")]
    WrongStage {
        expected: StageKind,
        actual: StageKind,
    },
}

/// Failure while rendering, slicing or encoding on confirm.
///
/// The session stays in the edit stage and keeps no partial results.
#[derive(Debug, Error)]
pub enum SliceProcessingError {
    #[error("Something went wrong processing the image: {0}")]
    Slice(#[from] SliceError),

    #[error("Something went wrong processing the image: {0}")]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Live editing state for one uploaded image.
#[derive(Debug, Clone)]
pub struct EditSession {
    source: SourceImage,
    ratio: AspectRatio,
    mode: SliceMode,
    dimensions: Dimensions,
    framing: Framing,
    drag: DragState,
}

impl EditSession {
    /// Start editing `source`: native size, offset (0, 0), scale 1.
    pub fn new(source: SourceImage, mode: SliceMode) -> Self {
        let dimensions = Dimensions::new(source.width, source.height);
        Self {
            source,
            ratio: AspectRatio::Original,
            mode,
            dimensions,
            framing: Framing::identity(),
            drag: DragState::new(),
        }
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.ratio
    }

    pub fn mode(&self) -> SliceMode {
        self.mode
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    pub fn offset(&self) -> Point {
        self.framing.offset
    }

    pub fn scale(&self) -> f64 {
        self.framing.scale
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn set_mode(&mut self, mode: SliceMode) {
        self.mode = mode;
    }

    /// Switch preset, resize the canvas and recenter with a cover scale.
    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.ratio = ratio;
        self.dimensions = ratio.dimensions_for(self.source.width, self.source.height);
        self.framing = Framing::cover(self.source.width, self.source.height, self.dimensions);
        debug!(
            "aspect ratio {ratio}: canvas {}, scale {:.3}",
            self.dimensions, self.framing.scale
        );
    }

    /// Re-apply the current preset, undoing any pan and zoom.
    pub fn reset_position(&mut self) {
        self.set_aspect_ratio(self.ratio);
    }

    pub fn zoom_in(&mut self, config: &EditorConfig) {
        self.framing.zoom(config.zoom_step, config.min_scale);
    }

    pub fn zoom_out(&mut self, config: &EditorConfig) {
        self.framing.zoom(-config.zoom_step, config.min_scale);
    }

    /// Pointer pressed at `pointer` (canvas pixels).
    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag.begin(pointer, self.framing.offset);
    }

    /// Pointer moved; pans only while a drag is active.
    pub fn pointer_move(&mut self, pointer: Point) {
        if let Some(offset) = self.drag.update(pointer) {
            self.framing.offset = offset;
        }
    }

    /// Pointer released or left the canvas.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Final render without guides.
    pub fn render(&self, config: &EditorConfig) -> Surface {
        render(&self.source, &self.framing, self.dimensions, config)
    }

    /// Render with the dashed guides for the current mode.
    pub fn preview(&self, config: &EditorConfig) -> Surface {
        let mut surface = self.render(config);
        draw_guides(&mut surface, self.mode, config);
        surface
    }
}

/// Finished slices shown on the result screen.
#[derive(Debug, Clone)]
pub struct ResultStage {
    slices: SliceSet,
    result: SliceResult,
}

impl ResultStage {
    pub fn slices(&self) -> &SliceSet {
        &self.slices
    }

    pub fn result(&self) -> &SliceResult {
        &self.result
    }
}

/// Current screen and its state.
#[derive(Debug)]
pub enum Stage {
    /// Waiting for a file; holds the error from the last rejected upload.
    Upload { error: Option<IntakeError> },
    Edit(EditSession),
    Result(ResultStage),
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Upload { .. } => StageKind::Upload,
            Stage::Edit(_) => StageKind::Edit,
            Stage::Result(_) => StageKind::Result,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Upload { error: None }
    }
}

/// Render, slice and encode in one go.
///
/// This is the confirm action without a session around it.
pub fn process_slices(
    source: &SourceImage,
    framing: &Framing,
    dimensions: Dimensions,
    mode: SliceMode,
    config: &EditorConfig,
) -> Result<(SliceSet, SliceResult), SliceProcessingError> {
    let surface = render(source, framing, dimensions, config);
    let slices = slice(&surface, mode)?;
    let exported = export_slices(&slices)?;
    Ok((
        slices,
        SliceResult {
            mode,
            slices: exported,
        },
    ))
}

/// One user's editing session.
#[derive(Debug, Default)]
pub struct Editor {
    config: EditorConfig,
    stage: Stage,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config: config.validated(),
            stage: Stage::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_kind(&self) -> StageKind {
        self.stage.kind()
    }

    /// Error from the most recent rejected upload, while on the upload screen.
    pub fn upload_error(&self) -> Option<&IntakeError> {
        match &self.stage {
            Stage::Upload { error } => error.as_ref(),
            _ => None,
        }
    }

    /// Take a file from the upload screen.
    ///
    /// On success the session moves to Edit with a fresh framing. On failure
    /// it stays on Upload and the error is kept for display.
    pub fn upload(&mut self, mime: &str, bytes: &[u8]) -> Result<(), SessionError> {
        let Stage::Upload { error } = &mut self.stage else {
            return Err(self.wrong_stage(StageKind::Upload));
        };

        match accept_upload(mime, bytes) {
            Ok(source) => {
                debug!("editing {}x{} image", source.width, source.height);
                self.stage = Stage::Edit(EditSession::new(source, self.config.default_mode));
            }
            Err(err) => {
                warn!("upload rejected: {err}");
                *error = Some(err);
            }
        }
        Ok(())
    }

    /// Start editing an already decoded image.
    pub fn load(&mut self, source: SourceImage) -> Result<(), SessionError> {
        if self.stage_kind() != StageKind::Upload {
            return Err(self.wrong_stage(StageKind::Upload));
        }
        self.stage = Stage::Edit(EditSession::new(source, self.config.default_mode));
        Ok(())
    }

    pub fn edit(&self) -> Result<&EditSession, SessionError> {
        match &self.stage {
            Stage::Edit(session) => Ok(session),
            other => Err(SessionError::WrongStage {
                expected: StageKind::Edit,
                actual: other.kind(),
            }),
        }
    }

    pub fn edit_mut(&mut self) -> Result<&mut EditSession, SessionError> {
        match &mut self.stage {
            Stage::Edit(session) => Ok(session),
            other => Err(SessionError::WrongStage {
                expected: StageKind::Edit,
                actual: other.kind(),
            }),
        }
    }

    pub fn result(&self) -> Result<&ResultStage, SessionError> {
        match &self.stage {
            Stage::Result(result) => Ok(result),
            other => Err(SessionError::WrongStage {
                expected: StageKind::Result,
                actual: other.kind(),
            }),
        }
    }

    pub fn set_mode(&mut self, mode: SliceMode) -> Result<(), SessionError> {
        self.edit_mut()?.set_mode(mode);
        Ok(())
    }

    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) -> Result<(), SessionError> {
        self.edit_mut()?.set_aspect_ratio(ratio);
        Ok(())
    }

    pub fn reset_position(&mut self) -> Result<(), SessionError> {
        self.edit_mut()?.reset_position();
        Ok(())
    }

    pub fn zoom_in(&mut self) -> Result<(), SessionError> {
        let config = self.config.clone();
        self.edit_mut()?.zoom_in(&config);
        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), SessionError> {
        let config = self.config.clone();
        self.edit_mut()?.zoom_out(&config);
        Ok(())
    }

    pub fn pointer_down(&mut self, pointer: Point) -> Result<(), SessionError> {
        self.edit_mut()?.pointer_down(pointer);
        Ok(())
    }

    pub fn pointer_move(&mut self, pointer: Point) -> Result<(), SessionError> {
        self.edit_mut()?.pointer_move(pointer);
        Ok(())
    }

    pub fn pointer_up(&mut self) -> Result<(), SessionError> {
        self.edit_mut()?.pointer_up();
        Ok(())
    }

    /// Live preview with guides.
    pub fn preview(&self) -> Result<Surface, SessionError> {
        Ok(self.edit()?.preview(&self.config))
    }

    /// Slice the current framing and move to the result screen.
    ///
    /// On failure the session stays in Edit with its framing intact.
    pub fn confirm(&mut self) -> Result<&ResultStage, SliceProcessingError> {
        let session = self.edit()?;
        let (slices, result) = process_slices(
            &session.source,
            &session.framing,
            session.dimensions,
            session.mode,
            &self.config,
        )
        .inspect_err(|err| warn!("slicing failed: {err}"))?;

        debug!("sliced into {} {} images", slices.len(), slices.mode());
        self.stage = Stage::Result(ResultStage { slices, result });
        Ok(self.result()?)
    }

    /// Drop the image and any slices; back to the upload screen.
    pub fn reset(&mut self) {
        debug!("reset from {} stage", self.stage_kind());
        self.stage = Stage::default();
    }

    /// "Change image" on the edit screen: same as [`Editor::reset`].
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn wrong_stage(&self, expected: StageKind) -> SessionError {
        SessionError::WrongStage {
            expected,
            actual: self.stage_kind(),
        }
    }
}
