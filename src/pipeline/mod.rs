//! Pipeline evaluation: fold the enabled operations over every queued file.

mod types;

pub use types::*;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::operation::Operation;
use crate::transform::{self, TransformContext};
use crate::validator::{check_name, has_invalid_characters, mark_duplicates, RenameIssue};

/// Split a file name into base and extension.
///
/// The extension starts at the last dot, unless that dot is the first
/// character, so dotfiles like `.gitignore` have no extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 => name.split_at(pos),
        _ => (name, ""),
    }
}

/// Evaluate `operations` against `files` using the local clock for date-time
pub fn evaluate(files: &[FileEntry], operations: &[Operation]) -> Vec<FileResult> {
    evaluate_at(files, operations, Local::now().naive_local())
}

/// Evaluate with an explicit "current" timestamp.
///
/// Results are index-aligned with `files`. A failure on one file never stops
/// the others from being evaluated.
pub fn evaluate_at(
    files: &[FileEntry],
    operations: &[Operation],
    now: NaiveDateTime,
) -> Vec<FileResult> {
    let active: Vec<&Operation> = operations.iter().filter(|op| op.enabled).collect();

    debug!(
        files = files.len(),
        operations = operations.len(),
        enabled = active.len(),
        "Evaluating pipeline"
    );

    let mut results: Vec<FileResult> = files
        .iter()
        .enumerate()
        .map(|(index, file)| evaluate_file(file, index, &active, now))
        .collect();

    mark_duplicates(&mut results);

    let invalid = results.iter().filter(|r| !r.is_valid).count();
    if invalid > 0 {
        info!(invalid, total = results.len(), "Evaluation produced invalid names");
    }

    results
}

fn evaluate_file(
    file: &FileEntry,
    index: usize,
    operations: &[&Operation],
    now: NaiveDateTime,
) -> FileResult {
    let (base, extension) = split_name(&file.original_name);
    let mut base = base.to_string();
    let mut extension = extension.to_string();

    let ctx = TransformContext {
        index,
        meta: &file.meta,
        now,
    };

    for op in operations {
        if let Err(e) = transform::apply(&op.config, &mut base, &mut extension, &ctx) {
            warn!(
                file = %file.original_name,
                operation = %op.id,
                kind = %op.kind(),
                error = %e,
                "Operation failed"
            );
            return FileResult {
                id: file.id,
                proposed_name: file.original_name.clone(),
                is_valid: false,
                issue: Some(RenameIssue::OperationFailed {
                    kind: op.kind(),
                    message: e.to_string(),
                }),
            };
        }
    }

    let proposed_name = format!("{}{}", base, extension);
    // An untouched name is only held to the character rule
    let issue = if proposed_name == file.original_name {
        has_invalid_characters(&proposed_name).then_some(RenameIssue::InvalidCharacters)
    } else {
        check_name(&base, &proposed_name)
    };

    debug!(
        original = %file.original_name,
        proposed = %proposed_name,
        valid = issue.is_none(),
        "Evaluated file"
    );

    FileResult {
        id: file.id,
        proposed_name,
        is_valid: issue.is_none(),
        issue,
    }
}
