//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the batch loop needs:
//! identify (header-only dimensions) and letterbox (decode, resample, pad,
//! encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::LetterboxParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resample the source to the fitted size, paste it onto a filled canvas
    /// and write the canvas to `params.output`.
    fn letterbox(&self, params: &LetterboxParams) -> Result<(), BackendError>;
}
