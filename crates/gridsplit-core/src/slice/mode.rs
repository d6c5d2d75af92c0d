//! Output layouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a slice mode label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown slice mode: {0}")]
pub struct ParseSliceModeError(pub String);

/// How the rendered canvas is cut into four images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceMode {
    /// Four full-width horizontal bands, top to bottom. Posted as a
    /// self-reply thread.
    #[default]
    Stack,
    /// 2x2 quadrants in row-major order. Posted as one four-image post.
    Grid,
}

impl SliceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SliceMode::Stack => "stack",
            SliceMode::Grid => "grid",
        }
    }

    /// Short label for the canvas info badge.
    pub fn label(self) -> &'static str {
        match self {
            SliceMode::Stack => "4x Stack",
            SliceMode::Grid => "2x2",
        }
    }

    /// Instructions shown with the finished slices.
    pub fn posting_hint(self) -> &'static str {
        match self {
            SliceMode::Grid => {
                "Download these 4 images and upload them to X in one post (order: 1\u{2192}4)."
            }
            SliceMode::Stack => {
                "Download these slices. Post them as a Thread (reply to yourself) to create the stack effect."
            }
        }
    }
}

impl fmt::Display for SliceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SliceMode {
    type Err = ParseSliceModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(SliceMode::Stack),
            "grid" => Ok(SliceMode::Grid),
            _ => Err(ParseSliceModeError(s.to_string())),
        }
    }
}
