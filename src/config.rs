//! Job configuration.
//!
//! A [`JobConfig`] is built once from the command line and never changes
//! during a run:
//!
//! ```text
//! letterbox <source_folder> <target_folder> <width> <height> [--blackback]
//! ```
//!
//! There are no config files. The CLI already rejects non-numeric, negative
//! and zero sizes; [`JobConfig::new`] repeats the zero check so library
//! callers get the same guarantee.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Target {axis} must be a positive integer")]
    ZeroDimension { axis: &'static str },
}

/// Canvas fill color for the padding bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    White,
    Black,
}

impl Background {
    /// Select the background from the `--blackback` flag.
    pub fn from_black_flag(black: bool) -> Self {
        if black { Self::Black } else { Self::White }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::White => [255, 255, 255],
            Self::Black => [0, 0, 0],
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("white"),
            Self::Black => f.write_str("black"),
        }
    }
}

/// Everything one batch run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    /// Directory scanned (top level only) for `.jpg` / `.png` files.
    pub source: PathBuf,
    /// Directory receiving `*_resized.*` files. Created if missing.
    pub target: PathBuf,
    pub width: u32,
    pub height: u32,
    pub background: Background,
}

impl JobConfig {
    pub fn new(
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        width: u32,
        height: u32,
        background: Background,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            source: source.into(),
            target: target.into(),
            width,
            height,
            background,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the canvas size. Fields are public, so [`process::run`] checks
    /// again before touching the filesystem.
    ///
    /// [`process::run`]: crate::process::run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { axis: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { axis: "height" });
        }
        Ok(())
    }

    /// Canvas size as `(width, height)`.
    pub fn canvas(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
