//! The batch resizer.
//!
//! Takes a [`JobConfig`], lists the eligible files of the source directory and
//! writes one letterboxed copy per file into the target directory.
//!
//! ## Steps
//!
//! ```text
//! 1. create target/ (and parents) if missing
//! 2. scan source/ for *.jpg / *.png (top level, filesystem order)
//! 3. per file:
//!      identify → same size as canvas? skip silently
//!                 otherwise fit, pad, write <stem>_resized.<ext>
//! ```
//!
//! ## Output Structure
//!
//! ```text
//! target/
//! ├── a_resized.jpg      # from source/a.jpg
//! └── b_resized.png      # from source/b.png
//! ```
//!
//! Processing is sequential: each file is decoded, transformed and written
//! before the next one is opened. The first error aborts the batch, and
//! outputs already written stay in place.

use crate::config::{ConfigError, JobConfig};
use crate::imaging::{
    BackendError, ImageBackend, RustBackend, create_letterboxed, get_dimensions, needs_letterbox,
};
use crate::naming::resized_filename;
use crate::scan::{self, ScanError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Cannot create target directory {path}: {source}")]
    CreateTarget {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Progress events emitted while the batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// An output file was written.
    Resized(ResizedImage),
}

/// One written output.
///
/// Names are for display and lossily converted when not UTF-8; `output_path`
/// is the exact path written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedImage {
    pub source_name: String,
    pub output_name: String,
    pub output_path: PathBuf,
    pub original: (u32, u32),
    /// Size of the pasted image before padding.
    pub fitted: (u32, u32),
}

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub resized: Vec<ResizedImage>,
    /// Source filenames that already had the canvas size.
    pub skipped: Vec<String>,
}

/// Run the batch with the `image`-crate backend.
pub fn run(
    config: &JobConfig,
    on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessSummary, ProcessError> {
    run_with_backend(&RustBackend::new(), config, on_event)
}

pub fn run_with_backend(
    backend: &impl ImageBackend,
    config: &JobConfig,
    mut on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessSummary, ProcessError> {
    config.validate()?;
    std::fs::create_dir_all(&config.target).map_err(|source| ProcessError::CreateTarget {
        path: config.target.clone(),
        source,
    })?;

    let entries = scan::scan(&config.source)?;
    log::info!(
        "{} eligible image(s) in {} → {}x{} canvas in {}",
        entries.len(),
        config.source.display(),
        config.width,
        config.height,
        config.target.display()
    );

    let mut summary = ProcessSummary::default();
    for entry in entries {
        let original = get_dimensions(backend, &entry.path)?;
        let source_name = entry.filename.to_string_lossy().into_owned();

        if !needs_letterbox(original, config) {
            log::debug!("{} already {}x{}, skipping", source_name, original.0, original.1);
            summary.skipped.push(source_name);
            continue;
        }

        let output_name = resized_filename(&entry.filename);
        let output_path = config.target.join(&output_name);
        let fitted = create_letterboxed(
            backend,
            &entry.path,
            &output_path,
            entry.kind,
            original,
            config,
        )?;

        let resized = ResizedImage {
            source_name,
            output_name: output_name.to_string_lossy().into_owned(),
            output_path,
            original,
            fitted,
        };
        on_event(&ProcessEvent::Resized(resized.clone()));
        summary.resized.push(resized);
    }

    log::info!(
        "resized {}, skipped {}",
        summary.resized.len(),
        summary.skipped.len()
    );
    Ok(summary)
}
