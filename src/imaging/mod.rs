//! Image processing — pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Resize** | Lanczos3 via `DynamicImage::resize_exact` |
//! | **Pad** | RGB canvas + `imageops::replace` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for fit and centering math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{calculate_center_offset, calculate_fit_dimensions, compare_aspect};
pub use operations::{create_letterboxed, get_dimensions, needs_letterbox, plan_letterbox};
pub use params::{LetterboxParams, OutputFormat, Quality};
pub use rust_backend::RustBackend;
