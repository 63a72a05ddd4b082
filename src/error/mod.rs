mod codes;

pub use codes::ExitCode;

use renamepipe::{PresetError, ScannerError, StoreError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Preset error: {message}")]
    PresetError { path: PathBuf, message: String },

    #[error("Invalid operation '{spec}': {message}")]
    InvalidOperation { spec: String, message: String },

    #[error("{count} proposed names are invalid")]
    InvalidNames { count: usize, examples: Vec<String> },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::PresetError { .. } => ExitCode::PresetError,
            AppError::InvalidOperation { .. } => ExitCode::InvalidOperation,
            AppError::InvalidNames { .. } => ExitCode::InvalidNames,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::PresetError { path, message } => {
                format!(
                    "Could not load preset:\n  {}\nFile: {}\n\n\
                     Ensure the preset exists and is valid JSON with a \"name\" and an \"operations\" list.",
                    message,
                    path.display()
                )
            }

            AppError::InvalidOperation { spec, message } => {
                format!(
                    "Could not add operation '{}':\n  {}\n\n\
                     Expected KIND or KIND=JSON, for example:\n  \
                     --op numbering='{{\"padding\": 2}}'\n\n\
                     Known kinds: find-replace, prefix, suffix, remove-characters, case-change,\n  \
                     numbering, date-time, regex, trim, extension",
                    spec, message
                )
            }

            AppError::InvalidNames { count, examples } => {
                let mut msg = format!("{} proposed names are invalid:\n", count);
                for ex in examples.iter().take(10) {
                    msg.push_str(&format!("  - {}\n", ex));
                }
                if examples.len() > 10 {
                    msg.push_str(&format!("  ... and {} more\n", examples.len() - 10));
                }
                msg.push_str("\nAdjust the pipeline until every name is valid.");
                msg
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl AppError {
    pub fn from_preset(path: PathBuf, err: PresetError) -> Self {
        AppError::PresetError {
            path,
            message: err.to_string(),
        }
    }

    pub fn from_store(spec: &str, err: StoreError) -> Self {
        AppError::InvalidOperation {
            spec: spec.to_string(),
            message: err.to_string(),
        }
    }
}
