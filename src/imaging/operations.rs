//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take the job configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{calculate_center_offset, calculate_fit_dimensions};
use super::params::{LetterboxParams, OutputFormat};
use crate::config::JobConfig;
use crate::naming::ImageKind;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Whether an image of `original` size has to be rewritten for `config`.
///
/// Images that already have the exact canvas size are left alone.
pub fn needs_letterbox(original: (u32, u32), config: &JobConfig) -> bool {
    original != config.canvas()
}

/// Plan a letterbox operation without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_letterbox(
    source: &Path,
    output: &Path,
    kind: ImageKind,
    original: (u32, u32),
    config: &JobConfig,
) -> LetterboxParams {
    let canvas = config.canvas();
    let (fit_w, fit_h) = calculate_fit_dimensions(original, canvas);
    let (x_offset, y_offset) = calculate_center_offset((fit_w, fit_h), canvas);

    LetterboxParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        format: OutputFormat::from(kind),
        canvas_width: canvas.0,
        canvas_height: canvas.1,
        fit_width: fit_w,
        fit_height: fit_h,
        x_offset,
        y_offset,
        background: config.background.rgb(),
    }
}

/// Resize `source` onto a padded canvas and write it to `output`.
///
/// Returns the fitted (pre-padding) dimensions.
pub fn create_letterboxed(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    kind: ImageKind,
    original: (u32, u32),
    config: &JobConfig,
) -> Result<(u32, u32)> {
    let params = plan_letterbox(source, output, kind, original, config);
    log::debug!(
        "{}: {}x{} → {}x{} at ({}, {}) on {}x{} {}",
        source.display(),
        original.0,
        original.1,
        params.fit_width,
        params.fit_height,
        params.x_offset,
        params.y_offset,
        params.canvas_width,
        params.canvas_height,
        config.background
    );
    backend.letterbox(&params)?;
    Ok((params.fit_width, params.fit_height))
}
