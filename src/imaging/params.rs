//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans the geometry) and the [`backend`](super::backend) (which does
//! the pixel work). This separation allows swapping backends (e.g. for testing
//! with a mock) without changing the batch logic.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100, default 75). Clamped on construction.
//! - [`OutputFormat`] — Encoder selected from the source suffix.
//! - [`LetterboxParams`] — Everything one output needs: source, output path,
//!   canvas size, fitted size, offset, background.

use crate::naming::ImageKind;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Encoder for the written canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg(Quality),
    Png,
}

impl From<ImageKind> for OutputFormat {
    fn from(kind: ImageKind) -> Self {
        match kind {
            ImageKind::Jpeg => Self::Jpeg(Quality::default()),
            ImageKind::Png => Self::Png,
        }
    }
}

/// Parameters for one resize-and-pad operation.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterboxParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Final canvas dimensions.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Dimensions the source is resampled to before pasting.
    pub fit_width: u32,
    pub fit_height: u32,
    /// Top-left corner of the pasted image on the canvas.
    pub x_offset: u32,
    pub y_offset: u32,
    pub background: [u8; 3],
}
