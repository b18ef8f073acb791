//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG) | `image::ImageReader` |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Canvas + paste | `image::RgbImage::from_pixel` + `imageops::replace` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//!
//! The canvas is always RGB8. Sources with alpha are converted to RGB before
//! pasting, which drops the alpha channel rather than blending it.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{LetterboxParams, OutputFormat};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a reader whose format is sniffed from content, falling back to the extension.
fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    if path.is_dir() {
        return Err(BackendError::Io(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is a directory", path.display()),
        )));
    }
    ImageReader::open(path)?
        .with_guessed_format()
        .map_err(BackendError::Io)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Build the output canvas: background fill with `resized` pasted at the offset.
fn compose_canvas(resized: &DynamicImage, params: &LetterboxParams) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        params.canvas_width,
        params.canvas_height,
        Rgb(params.background),
    );
    let rgb = resized.to_rgb8();
    image::imageops::replace(
        &mut canvas,
        &rgb,
        params.x_offset as i64,
        params.y_offset as i64,
    );
    canvas
}

/// Encode the canvas to `path`, replacing any existing file.
fn save_canvas(canvas: &RgbImage, path: &Path, format: OutputFormat) -> Result<(), BackendError> {
    let file = File::create(path).map_err(BackendError::Io)?;
    let mut writer = BufWriter::new(file);

    let result = match format {
        OutputFormat::Jpeg(quality) => canvas.write_with_encoder(JpegEncoder::new_with_quality(
            &mut writer,
            quality.value() as u8,
        )),
        OutputFormat::Png => canvas.write_with_encoder(PngEncoder::new(&mut writer)),
    };
    result.map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    })?;

    writer.flush().map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?.into_dimensions().map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn letterbox(&self, params: &LetterboxParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.fit_width, params.fit_height, FilterType::Lanczos3);
        let canvas = compose_canvas(&resized, params);
        save_canvas(&canvas, &params.output, params.format)
    }
}
