//! Export naming and the "download all" schedule.
//!
//! Each slice is saved as `x-grid-part-{n}.png` with `n` counting from 1.
//! Browsers block bursts of programmatic downloads, so "download all" spaces
//! them out by a fixed stagger.

use serde::{Deserialize, Serialize};

use crate::encode::{encode_surface_png, EncodeError};
use crate::slice::{SliceMode, SliceSet};

/// File name prefix shared by every exported slice.
pub const FILENAME_PREFIX: &str = "x-grid-part-";

/// File name for the slice at zero-based `index`.
pub fn slice_filename(index: usize) -> String {
    format!("{FILENAME_PREFIX}{}.png", index + 1)
}

/// One encoded slice ready to hand to the download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSlice {
    /// Zero-based posting position.
    pub index: usize,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    /// PNG file bytes.
    pub png: Vec<u8>,
}

/// Encode all four slices as PNG, in posting order.
pub fn export_slices(set: &SliceSet) -> Result<Vec<ExportedSlice>, EncodeError> {
    set.iter()
        .enumerate()
        .map(|(index, tile)| {
            Ok(ExportedSlice {
                index,
                filename: slice_filename(index),
                width: tile.width,
                height: tile.height,
                png: encode_surface_png(tile)?,
            })
        })
        .collect()
}

/// When to start one download in a "download all" batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDownload {
    pub index: usize,
    pub filename: String,
    /// Delay from the click, in milliseconds.
    pub delay_ms: u32,
}

/// Staggered schedule for downloading `count` slices.
pub fn download_schedule(count: usize, stagger_ms: u32) -> Vec<ScheduledDownload> {
    (0..count)
        .map(|index| ScheduledDownload {
            index,
            filename: slice_filename(index),
            delay_ms: stagger_ms.saturating_mul(index as u32),
        })
        .collect()
}

/// Everything the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceResult {
    pub mode: SliceMode,
    pub slices: Vec<ExportedSlice>,
}

impl SliceResult {
    pub fn posting_hint(&self) -> &'static str {
        self.mode.posting_hint()
    }

    pub fn schedule(&self, stagger_ms: u32) -> Vec<ScheduledDownload> {
        download_schedule(self.slices.len(), stagger_ms)
    }
}
