//! Filename rules shared by the scanner and the batch loop.
//!
//! Names are handled as `OsStr`, so entries that are not valid UTF-8 (e.g. a
//! Latin-1 `caf\xe9.jpg`) are matched and renamed like any other.
//!
//! ## Eligibility
//!
//! A source entry is eligible when its raw name ends in exactly `.jpg` or
//! `.png`. The match is case-sensitive: `photo.JPG` and `photo.jpeg` are
//! ignored.
//!
//! ## Output Names
//!
//! `_resized` is inserted between the file stem and its extension:
//! - `photo.jpg` → `photo_resized.jpg`
//! - `a.b.png` → `a.b_resized.png`
//! - `.png` → `.png_resized` (a leading dot is part of the stem)
//!
//! The last case has no extension, but the file is still encoded as PNG
//! because the encoder follows [`ImageKind`], not the output name. A
//! name-driven encoder would reject `.png_resized` and abort the batch.

use std::ffi::{OsStr, OsString};
use std::path::Path;

const RESIZED_SUFFIX: &str = "_resized";

/// Image format implied by an eligible filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Classify a filename by its exact suffix. `None` means not eligible.
    pub fn from_name(name: impl AsRef<OsStr>) -> Option<Self> {
        let bytes = name.as_ref().as_encoded_bytes();
        if bytes.ends_with(b".jpg") {
            Some(Self::Jpeg)
        } else if bytes.ends_with(b".png") {
            Some(Self::Png)
        } else {
            None
        }
    }
}

/// Derive the output filename for an eligible source filename.
pub fn resized_filename(name: impl AsRef<OsStr>) -> OsString {
    let name = name.as_ref();
    let path = Path::new(name);

    let mut out = path.file_stem().unwrap_or(name).to_os_string();
    out.push(RESIZED_SUFFIX);
    if let Some(ext) = path.extension() {
        out.push(".");
        out.push(ext);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpg_and_png_are_eligible() {
        assert_eq!(ImageKind::from_name("a.jpg"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_name("b.png"), Some(ImageKind::Png));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(ImageKind::from_name("a.JPG"), None);
        assert_eq!(ImageKind::from_name("b.Png"), None);
    }

    #[test]
    fn other_formats_are_not_eligible() {
        for name in ["a.jpeg", "b.gif", "notes.txt", "c.webp", "jpg", "png"] {
            assert_eq!(ImageKind::from_name(name), None, "{name} should be ignored");
        }
    }

    #[test]
    fn resized_name_inserts_suffix_before_extension() {
        assert_eq!(resized_filename("photo.jpg"), "photo_resized.jpg");
        assert_eq!(resized_filename("x.png"), "x_resized.png");
    }

    #[test]
    fn resized_name_keeps_inner_dots() {
        assert_eq!(resized_filename("a.b.png"), "a.b_resized.png");
        assert_eq!(resized_filename("2024.01.shot.jpg"), "2024.01.shot_resized.jpg");
    }

    #[test]
    fn resized_name_for_dot_file() {
        assert_eq!(resized_filename(".png"), ".png_resized");
        assert_eq!(ImageKind::from_name(".png"), Some(ImageKind::Png));
    }

    #[test]
    fn resized_name_keeps_spaces_and_unicode() {
        assert_eq!(resized_filename("my photo.jpg"), "my photo_resized.jpg");
        assert_eq!(resized_filename("写真.png"), "写真_resized.png");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_eligible_and_renamed() {
        use std::os::unix::ffi::OsStrExt;

        let latin1 = OsStr::from_bytes(b"caf\xe9.jpg");
        assert_eq!(ImageKind::from_name(latin1), Some(ImageKind::Jpeg));
        assert_eq!(
            resized_filename(latin1).as_bytes(),
            b"caf\xe9_resized.jpg".as_slice()
        );
    }
}
