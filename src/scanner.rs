//! File acquisition for the command line: list the regular files of a
//! directory as [`RawFile`]s. Nothing here ever writes to the filesystem.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

use crate::pipeline::RawFile;
use crate::transform::FileMeta;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub include_hidden: bool,
}

/// Regular files directly inside `target`, sorted by name
pub fn scan_files(target: &Path, options: ScanOptions) -> Result<Vec<RawFile>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut files = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            trace!(path = ?path, "Skipping non-file");
            continue;
        }

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        if name.starts_with('.') && !options.include_hidden {
            trace!(name = %name, "Skipping hidden file");
            continue;
        }

        let modified = metadata
            .modified()
            .ok()
            .map(|t| DateTime::<Local>::from(t).naive_local());

        debug!(name = %name, "Found file");
        files.push(RawFile::with_handle(
            name,
            Arc::from(path.as_path()),
            FileMeta { modified },
        ));
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = files.len(), "Scan complete");

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_files(dir.path(), ScanOptions::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_files_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zebra.txt"), "z").unwrap();
        fs::write(dir.path().join("alpha.txt"), "a").unwrap();

        let result = scan_files(dir.path(), ScanOptions::default()).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "alpha.txt");
        assert_eq!(result[1].name, "zebra.txt");
        assert!(result[0].meta.modified.is_some());
        assert!(result[0].handle.ends_with("alpha.txt"));
    }

    #[test]
    fn test_ignores_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        fs::write(dir.path().join("file.txt"), "content").unwrap();

        let result = scan_files(dir.path(), ScanOptions::default()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "file.txt");
    }

    #[test]
    fn test_hidden_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".env"), "").unwrap();
        fs::write(dir.path().join("visible"), "").unwrap();

        let result = scan_files(dir.path(), ScanOptions::default()).unwrap();
        assert_eq!(result.len(), 1);

        let result = scan_files(dir.path(), ScanOptions { include_hidden: true }).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, ".env");
    }

    #[test]
    fn test_path_not_found() {
        let result = scan_files(Path::new("/nonexistent/path"), ScanOptions::default());
        assert!(matches!(result, Err(ScannerError::PathNotFound(_))));
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        let result = scan_files(&file_path, ScanOptions::default());
        assert!(matches!(result, Err(ScannerError::NotADirectory(_))));
    }
}
