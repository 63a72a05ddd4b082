pub mod config;
pub mod history;
pub mod operation;
pub mod pipeline;
pub mod preset;
pub mod scanner;
pub mod store;
pub mod transform;
pub mod validator;

pub use history::{History, HISTORY_LIMIT};
pub use operation::{
    Operation, OperationConfig, OperationId, OperationKind, PatchError, Pipeline,
};
pub use pipeline::{evaluate, evaluate_at, split_name, FileEntry, FileId, FileResult, RawFile};
pub use preset::{read_preset, Preset, PresetError};
pub use scanner::{scan_files, ScanOptions, ScannerError};
pub use store::{PipelineStore, PreviewRow, StoreError};
pub use transform::{compile_pattern, CompiledPattern, FileMeta, PatternError, TransformError};
pub use validator::{check_name, mark_duplicates, RenameIssue};
