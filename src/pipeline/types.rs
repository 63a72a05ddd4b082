use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::transform::FileMeta;
use crate::validator::RenameIssue;

/// Identifier of a queued file, unique within one pipeline store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileId(pub u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// Shared, read-only reference to the file's content owned by file acquisition
pub type ContentHandle = Arc<Path>;

/// A file as handed over by file acquisition, before it is queued
#[derive(Debug, Clone)]
pub struct RawFile {
    pub name: String,
    pub handle: ContentHandle,
    pub meta: FileMeta,
}

impl RawFile {
    /// A file whose handle is its own name; useful when no content is attached
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let handle: ContentHandle = Arc::from(Path::new(&name));
        Self {
            name,
            handle,
            meta: FileMeta::default(),
        }
    }

    pub fn with_handle(name: impl Into<String>, handle: ContentHandle, meta: FileMeta) -> Self {
        Self {
            name: name.into(),
            handle,
            meta,
        }
    }
}

/// A queued file and its most recent evaluation
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub id: FileId,
    pub original_name: String,
    /// Extension of the original name, leading dot included; empty for none
    pub extension: String,
    pub handle: ContentHandle,
    pub meta: FileMeta,
    pub proposed_name: String,
    pub is_valid: bool,
    pub error: Option<RenameIssue>,
}

impl FileEntry {
    pub fn new(id: FileId, raw: RawFile) -> Self {
        let (_, extension) = super::split_name(&raw.name);
        let extension = extension.to_string();
        Self {
            id,
            proposed_name: raw.name.clone(),
            original_name: raw.name,
            extension,
            handle: raw.handle,
            meta: raw.meta,
            is_valid: true,
            error: None,
        }
    }

    /// Copy an evaluation result into the derived fields
    pub fn apply_result(&mut self, result: &FileResult) {
        self.proposed_name = result.proposed_name.clone();
        self.is_valid = result.is_valid;
        self.error = result.issue.clone();
    }

    pub fn is_unchanged(&self) -> bool {
        self.proposed_name == self.original_name
    }
}

/// Outcome of evaluating the pipeline for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub id: FileId,
    pub proposed_name: String,
    pub is_valid: bool,
    pub issue: Option<RenameIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_derives_extension() {
        let entry = FileEntry::new(FileId(1), RawFile::new("archive.tar.gz"));
        assert_eq!(entry.extension, ".gz");
        assert_eq!(entry.proposed_name, "archive.tar.gz");
        assert!(entry.is_valid);
        assert!(entry.is_unchanged());
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let entry = FileEntry::new(FileId(1), RawFile::new(".gitignore"));
        assert_eq!(entry.extension, "");
    }

    #[test]
    fn test_apply_result() {
        let mut entry = FileEntry::new(FileId(4), RawFile::new("a.txt"));
        entry.apply_result(&FileResult {
            id: FileId(4),
            proposed_name: "b.txt".to_string(),
            is_valid: false,
            issue: Some(RenameIssue::Duplicate),
        });

        assert_eq!(entry.proposed_name, "b.txt");
        assert!(!entry.is_valid);
        assert_eq!(entry.error, Some(RenameIssue::Duplicate));
        assert!(!entry.is_unchanged());
        assert_eq!(entry.original_name, "a.txt");
    }
}
