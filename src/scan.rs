//! Source directory scanning.
//!
//! Lists the top-level entries of the source directory and keeps the ones
//! [`naming::ImageKind::from_name`] accepts. Order is whatever the filesystem
//! yields; nothing is sorted. Subdirectories are never entered.
//!
//! Eligibility is by name only. A directory called `folder.jpg` is returned
//! like a file and fails when the backend tries to open it.

use crate::naming::ImageKind;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),
}

/// An eligible image file in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: PathBuf,
    /// Bare filename, e.g. `a.jpg`. Not necessarily UTF-8.
    pub filename: OsString,
    pub kind: ImageKind,
}

pub fn scan(source: &Path) -> Result<Vec<SourceEntry>, ScanError> {
    if !source.is_dir() {
        return Err(ScanError::SourceNotFound(source.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let filename = entry.file_name();
        let Some(kind) = ImageKind::from_name(&filename) else {
            continue;
        };
        entries.push(SourceEntry {
            path: entry.path(),
            filename,
            kind,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn sorted_names(entries: &[SourceEntry]) -> Vec<String> {
        let mut names: Vec<String> = entries
            .iter()
            .map(|e| e.filename.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn keeps_only_jpg_and_png() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.jpg", "b.png", "c.gif", "d.txt", "e.jpeg", "f.JPG"] {
            touch(tmp.path(), name);
        }

        let entries = scan(tmp.path()).unwrap();
        assert_eq!(sorted_names(&entries), vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn records_kind_and_full_path() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "only.png");

        let entries = scan(tmp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, ImageKind::Png);
        assert_eq!(entries[0].path, tmp.path().join("only.png"));
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "deep.jpg");
        touch(tmp.path(), "top.jpg");

        let entries = scan(tmp.path()).unwrap();
        assert_eq!(sorted_names(&entries), vec!["top.jpg"]);
    }

    #[test]
    fn directory_with_image_suffix_is_listed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("folder.jpg")).unwrap();

        let entries = scan(tmp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, ImageKind::Jpeg);
        assert!(entries[0].path.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.jpg");
        fs::write(tmp.path().join(name), b"").unwrap();
        touch(tmp.path(), "plain.png");

        let entries = scan(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        let latin1 = entries.iter().find(|e| e.filename == name).unwrap();
        assert_eq!(latin1.kind, ImageKind::Jpeg);
        assert_eq!(latin1.path, tmp.path().join(name));
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(scan(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_source_errors() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let result = scan(&missing);
        assert!(matches!(result, Err(ScanError::SourceNotFound(p)) if p == missing));
    }
}
