//! The pipeline store: the single owner of the file queue, the live pipeline
//! and its history.
//!
//! Pipeline commands keep the snapshot under the history cursor equal to the
//! live pipeline. A change therefore leaves the pre-change pipeline as the
//! undo target and commits the changed pipeline at the new tip. File commands
//! are not versioned. Every successful command re-evaluates synchronously.

use chrono::{Local, NaiveDateTime};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::history::History;
use crate::operation::{Operation, OperationId, OperationKind, PatchError, Pipeline};
use crate::pipeline::{evaluate_at, FileEntry, FileId, RawFile};
use crate::preset::Preset;
use crate::validator::RenameIssue;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No operation with id {0}")]
    OperationNotFound(OperationId),

    #[error("No file with id {0}")]
    FileNotFound(FileId),

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid config patch for {id}: {source}")]
    InvalidPatch {
        id: OperationId,
        #[source]
        source: PatchError,
    },
}

/// Source of the "current" timestamp used by date-time operations
pub type Clock = fn() -> NaiveDateTime;

fn local_clock() -> NaiveDateTime {
    Local::now().naive_local()
}

/// One row of the rename preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow<'a> {
    pub id: FileId,
    pub original: &'a str,
    pub proposed: &'a str,
    pub is_valid: bool,
    pub issue: Option<&'a RenameIssue>,
}

pub struct PipelineStore {
    files: Vec<FileEntry>,
    operations: Pipeline,
    history: History,
    next_file_id: u64,
    next_operation_id: u64,
    clock: Clock,
}

impl Default for PipelineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStore {
    pub fn new() -> Self {
        Self::with_clock(local_clock)
    }

    /// Store whose date-time "current" source reads `clock`
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            files: Vec::new(),
            operations: Pipeline::new(),
            history: History::default(),
            next_file_id: 1,
            next_operation_id: 1,
            clock,
        }
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn operation(&self, id: OperationId) -> Option<&Operation> {
        self.operations.iter().find(|op| op.id == id)
    }

    pub fn preview(&self) -> Vec<PreviewRow<'_>> {
        self.files
            .iter()
            .map(|f| PreviewRow {
                id: f.id,
                original: &f.original_name,
                proposed: &f.proposed_name,
                is_valid: f.is_valid,
                issue: f.error.as_ref(),
            })
            .collect()
    }

    pub fn invalid_count(&self) -> usize {
        self.files.iter().filter(|f| !f.is_valid).count()
    }

    // ---------------------------------------------------------------------
    // File queue
    // ---------------------------------------------------------------------

    /// Queue `raw` files, skipping names that are already queued.
    ///
    /// Returns the entries that were accepted.
    pub fn ingest(&mut self, raw: Vec<RawFile>) -> Vec<FileEntry> {
        let mut known: HashSet<String> =
            self.files.iter().map(|f| f.original_name.clone()).collect();
        let mut accepted = Vec::new();
        let mut skipped = 0usize;

        for file in raw {
            if !known.insert(file.name.clone()) {
                debug!(name = %file.name, "Skipping already queued file");
                skipped += 1;
                continue;
            }

            let id = FileId(self.next_file_id);
            self.next_file_id += 1;
            let entry = FileEntry::new(id, file);
            self.files.push(entry.clone());
            accepted.push(entry);
        }

        info!(accepted = accepted.len(), skipped, "Ingested files");
        self.reevaluate();

        let ids: HashSet<FileId> = accepted.iter().map(|e| e.id).collect();
        self.files
            .iter()
            .filter(|f| ids.contains(&f.id))
            .cloned()
            .collect()
    }

    pub fn remove_file(&mut self, id: FileId) -> Result<(), StoreError> {
        let pos = self
            .files
            .iter()
            .position(|f| f.id == id)
            .ok_or(StoreError::FileNotFound(id))?;
        self.files.remove(pos);
        self.reevaluate();
        Ok(())
    }

    pub fn reorder_files(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        move_item(&mut self.files, from, to)?;
        self.reevaluate();
        Ok(())
    }

    pub fn clear_files(&mut self) {
        self.files.clear();
        self.reevaluate();
    }

    // ---------------------------------------------------------------------
    // Pipeline commands
    // ---------------------------------------------------------------------

    fn issue_operation_id(&mut self) -> OperationId {
        let id = OperationId(self.next_operation_id);
        self.next_operation_id += 1;
        id
    }

    fn position(&self, id: OperationId) -> Result<usize, StoreError> {
        self.operations
            .iter()
            .position(|op| op.id == id)
            .ok_or(StoreError::OperationNotFound(id))
    }

    /// Record the live pipeline in history and re-evaluate
    fn commit(&mut self) {
        // The tip mirrors the live pipeline so one undo reaches the pre-change state
        self.history.commit(&self.operations);
        self.reevaluate();
    }

    /// Append an operation of `kind` with its default config
    pub fn add_operation(&mut self, kind: OperationKind) -> OperationId {
        let id = self.issue_operation_id();
        self.operations.push(Operation::new(id, kind));
        info!(%id, %kind, "Added operation");
        self.commit();
        id
    }

    /// Merge the fields of `patch` into the operation's config
    pub fn update_operation(&mut self, id: OperationId, patch: &Value) -> Result<(), StoreError> {
        let pos = self.position(id)?;
        let merged = self.operations[pos]
            .config
            .merged(patch)
            .map_err(|source| StoreError::InvalidPatch { id, source })?;

        if merged == self.operations[pos].config {
            return Ok(());
        }

        self.operations[pos].config = merged;
        debug!(%id, "Updated operation config");
        self.commit();
        Ok(())
    }

    pub fn remove_operation(&mut self, id: OperationId) -> Result<(), StoreError> {
        let pos = self.position(id)?;
        self.operations.remove(pos);
        info!(%id, "Removed operation");
        self.commit();
        Ok(())
    }

    pub fn toggle_operation(&mut self, id: OperationId) -> Result<(), StoreError> {
        let pos = self.position(id)?;
        let op = &mut self.operations[pos];
        op.enabled = !op.enabled;
        debug!(%id, enabled = op.enabled, "Toggled operation");
        self.commit();
        Ok(())
    }

    pub fn reorder_operations(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        if move_item(&mut self.operations, from, to)? {
            self.commit();
        }
        Ok(())
    }

    pub fn clear_operations(&mut self) {
        if self.operations.is_empty() {
            return;
        }
        self.operations.clear();
        info!("Cleared pipeline");
        self.commit();
    }

    /// Replace the pipeline with fresh-id clones of the preset's operations
    pub fn apply_preset(&mut self, preset: &Preset) {
        let mut next = self.next_operation_id;
        let operations = preset.instantiate(|| {
            let id = OperationId(next);
            next += 1;
            id
        });
        self.next_operation_id = next;
        self.operations = operations;

        info!(preset = %preset.name, operations = self.operations.len(), "Applied preset");
        self.commit();
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(pipeline) => {
                self.operations = pipeline;
                self.reevaluate();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(pipeline) => {
                self.operations = pipeline;
                self.reevaluate();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Recompute every file's proposed name from the live pipeline
    pub fn reevaluate(&mut self) {
        let results = evaluate_at(&self.files, &self.operations, (self.clock)());
        for (entry, result) in self.files.iter_mut().zip(results.iter()) {
            entry.apply_result(result);
        }
    }
}

/// Move the item at `from` to `to`; returns whether anything moved
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<bool, StoreError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
    }

    if from == to {
        return Ok(false);
    }

    let item = items.remove(from);
    items.insert(to, item);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn store_with(names: &[&str]) -> PipelineStore {
        let mut store = PipelineStore::with_clock(fixed_clock);
        store.ingest(names.iter().map(|n| RawFile::new(*n)).collect());
        store
    }

    fn proposed(store: &PipelineStore) -> Vec<&str> {
        store.files().iter().map(|f| f.proposed_name.as_str()).collect()
    }

    #[test]
    fn test_ingest_skips_duplicates() {
        let mut store = store_with(&["a.txt", "b.txt"]);
        let accepted = store.ingest(vec![
            RawFile::new("b.txt"),
            RawFile::new("c.txt"),
            RawFile::new("c.txt"),
        ]);

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].original_name, "c.txt");
        assert_eq!(store.files().len(), 3);
    }

    #[test]
    fn test_ingested_ids_are_unique() {
        let store = store_with(&["a", "b", "c"]);
        let ids: HashSet<FileId> = store.files().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_operation_evaluates() {
        let mut store = store_with(&["a.txt", "b.txt", "c.txt"]);
        store.add_operation(OperationKind::Numbering);

        assert_eq!(proposed(&store), vec!["001_a.txt", "002_b.txt", "003_c.txt"]);
        assert!(store.can_undo());
    }

    #[test]
    fn test_undo_redo_restores_pipeline_and_names() {
        let mut store = store_with(&["a.txt"]);
        let id = store.add_operation(OperationKind::Numbering);
        store.update_operation(id, &json!({ "padding": 1 })).unwrap();
        assert_eq!(proposed(&store), vec!["1_a.txt"]);

        assert!(store.undo());
        assert_eq!(proposed(&store), vec!["001_a.txt"]);

        assert!(store.undo());
        assert!(store.operations().is_empty());
        assert_eq!(proposed(&store), vec!["a.txt"]);
        assert!(!store.undo());

        assert!(store.redo());
        assert!(store.redo());
        assert_eq!(proposed(&store), vec!["1_a.txt"]);
        assert!(!store.can_redo());
    }

    #[test]
    fn test_update_rejects_bad_patch_without_commit() {
        let mut store = store_with(&["a.txt"]);
        let id = store.add_operation(OperationKind::Prefix);

        let err = store.update_operation(id, &json!({ "nope": true })).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPatch { .. }));

        assert!(store.undo());
        assert!(!store.can_undo());
    }

    #[test]
    fn test_unknown_operation_id() {
        let mut store = PipelineStore::new();
        assert!(matches!(
            store.toggle_operation(OperationId(42)),
            Err(StoreError::OperationNotFound(OperationId(42)))
        ));
        assert!(!store.can_undo());
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut store = store_with(&["a.txt"]);
        let id = store.add_operation(OperationKind::Suffix);
        store.update_operation(id, &json!({ "text": "_x" })).unwrap();
        assert_eq!(proposed(&store), vec!["a_x.txt"]);

        store.toggle_operation(id).unwrap();
        assert_eq!(proposed(&store), vec!["a.txt"]);
        assert!(!store.operation(id).unwrap().enabled);

        store.toggle_operation(id).unwrap();
        store.remove_operation(id).unwrap();
        assert!(store.operations().is_empty());
        assert_eq!(proposed(&store), vec!["a.txt"]);

        assert!(store.undo());
        assert_eq!(proposed(&store), vec!["a_x.txt"]);
    }

    #[test]
    fn test_reorder_operations() {
        let mut store = store_with(&["Name.txt"]);
        let upper = store.add_operation(OperationKind::CaseChange);
        store.update_operation(upper, &json!({ "target": "upper" })).unwrap();
        let suffix = store.add_operation(OperationKind::Suffix);
        store.update_operation(suffix, &json!({ "text": "_v" })).unwrap();
        assert_eq!(proposed(&store), vec!["NAME_v.txt"]);

        store.reorder_operations(1, 0).unwrap();
        assert_eq!(store.operations()[0].id, suffix);
        assert_eq!(proposed(&store), vec!["NAME_V.txt"]);

        assert!(matches!(
            store.reorder_operations(0, 5),
            Err(StoreError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_reorder_same_index_commits_nothing() {
        let mut store = PipelineStore::new();
        store.add_operation(OperationKind::Trim);
        store.reorder_operations(0, 0).unwrap();

        assert!(store.undo());
        assert!(!store.can_undo());
    }

    #[test]
    fn test_clear_operations_is_undoable() {
        let mut store = store_with(&["a.txt"]);
        store.add_operation(OperationKind::Numbering);
        store.clear_operations();
        assert_eq!(proposed(&store), vec!["a.txt"]);

        assert!(store.undo());
        assert_eq!(store.operations().len(), 1);
    }

    #[test]
    fn test_apply_preset_uses_fresh_ids() {
        let mut store = store_with(&["a.txt"]);
        let existing = store.add_operation(OperationKind::Trim);

        let preset = Preset::from_pipeline(
            "numbered",
            &[Operation::new(existing, OperationKind::Numbering)],
        );
        store.apply_preset(&preset);

        assert_eq!(store.operations().len(), 1);
        assert_ne!(store.operations()[0].id, existing);
        assert_eq!(proposed(&store), vec!["001_a.txt"]);

        store.undo();
        assert_eq!(store.operations()[0].kind(), OperationKind::Trim);
    }

    #[test]
    fn test_file_commands_are_not_versioned() {
        let mut store = store_with(&["a.txt", "b.txt"]);
        store.add_operation(OperationKind::Numbering);

        store.reorder_files(1, 0).unwrap();
        assert_eq!(proposed(&store), vec!["001_b.txt", "002_a.txt"]);

        let first = store.files()[0].id;
        store.remove_file(first).unwrap();
        assert_eq!(proposed(&store), vec!["001_a.txt"]);

        assert!(store.undo());
        assert!(!store.can_undo());
        assert_eq!(store.files().len(), 1);
    }

    #[test]
    fn test_clear_files_keeps_pipeline_and_reingest_evaluates() {
        let mut store = store_with(&["a.txt", "a.txt.bak"]);
        store.add_operation(OperationKind::Extension);

        store.clear_files();
        assert!(store.files().is_empty());
        assert!(store.preview().is_empty());
        assert_eq!(store.invalid_count(), 0);
        assert_eq!(store.operations().len(), 1);

        store.ingest(vec![RawFile::new("b.TXT")]);
        assert_eq!(proposed(&store), vec!["b.txt"]);
    }

    #[test]
    fn test_remove_unknown_file() {
        let mut store = store_with(&["a.txt"]);
        assert!(matches!(
            store.remove_file(FileId(999)),
            Err(StoreError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_date_time_uses_store_clock() {
        let mut store = store_with(&["log.txt"]);
        let id = store.add_operation(OperationKind::DateTime);
        store
            .update_operation(id, &json!({ "format": "YYYYMMDD-HHmm" }))
            .unwrap();

        assert_eq!(proposed(&store), vec!["20240517-0930_log.txt"]);
    }

    #[test]
    fn test_preview_rows() {
        let mut store = store_with(&["a.txt", "b.txt"]);
        let id = store.add_operation(OperationKind::Numbering);
        store
            .update_operation(id, &json!({ "position": "replace", "format": "same" }))
            .unwrap();

        let rows = store.preview();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].original, "a.txt");
        assert_eq!(rows[0].proposed, "same.txt");
        assert!(!rows[0].is_valid);
        assert_eq!(rows[0].issue, Some(&RenameIssue::Duplicate));
        assert_eq!(store.invalid_count(), 2);
    }
}
