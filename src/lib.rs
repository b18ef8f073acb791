//! # Letterbox
//!
//! Batch-resizes the JPEG and PNG files of one directory so each fits a fixed
//! canvas, preserving aspect ratio and padding the rest with a solid color.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      source/  →  eligible entries   (top level, *.jpg / *.png)
//! 2. Plan      dimensions → fitted size + offset (pure arithmetic)
//! 3. Write     decode → Lanczos3 resize → paste onto canvas → target/
//! ```
//!
//! Files that already match the canvas size are skipped without output.
//! The first error of any kind aborts the batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | One-shot job configuration: folders, canvas size, background |
//! | [`naming`] | Eligibility rule and `_resized` output filename derivation |
//! | [`scan`] | Lists eligible entries of the source directory |
//! | [`imaging`] | Aspect-fit math, backend trait, `image`-crate backend |
//! | [`process`] | The batch loop — [`process::run`] |
//! | [`output`] | CLI output formatting for progress events |
//!
//! # Design Decisions
//!
//! ## Integer Aspect Math
//!
//! Aspect ratios are compared by cross-multiplication (`W * th` vs `tw * H`)
//! and fitted sides are computed as `floor(tw * H / W)` in `u64`. This is the
//! real-valued rule evaluated exactly, so a 4:3 source and a 4:3 canvas always
//! compare equal and no padding bar is ever off by one from float drift.
//!
//! ## Header-Only Skip Check
//!
//! The dimension check reads only the image header. Files that already have
//! the canvas size are never fully decoded.
//!
//! ## Format Follows the Source Suffix
//!
//! The encoder is chosen from the suffix that made the file eligible, never
//! re-inferred from the derived output name.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
