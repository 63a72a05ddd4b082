use serde::Serialize;
use std::fmt;

use crate::operation::OperationKind;

/// Why a proposed name cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum RenameIssue {
    /// Reserved filesystem characters or ASCII control characters
    InvalidCharacters,

    /// The base name is empty once surrounding whitespace is ignored
    EmptyName,

    /// Another queued file resolves to the same proposed name
    Duplicate,

    /// An operation could not be executed for this file
    OperationFailed { kind: OperationKind, message: String },
}

impl RenameIssue {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RenameIssue::InvalidCharacters => "invalid_characters",
            RenameIssue::EmptyName => "empty_name",
            RenameIssue::Duplicate => "duplicate",
            RenameIssue::OperationFailed { .. } => "operation_failed",
        }
    }
}

impl fmt::Display for RenameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameIssue::InvalidCharacters => f.write_str("contains invalid characters"),
            RenameIssue::EmptyName => f.write_str("name cannot be empty"),
            RenameIssue::Duplicate => f.write_str("duplicate filename"),
            RenameIssue::OperationFailed { kind, message } => {
                write!(f, "{} failed: {}", kind, message)
            }
        }
    }
}
