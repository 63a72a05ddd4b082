//! Per-kind rename transformers.
//!
//! Every transformer is a pure function of the working name, its config, the
//! file's position in the queue and (for date-time) the file metadata. Bad
//! user patterns degrade to the identity; only arithmetic limits surface as
//! [`TransformError`].

mod affix;
mod case;
mod datetime;
mod extension;
mod find_replace;
mod numbering;
mod pattern;
mod regex_replace;
mod remove;
mod trim;

pub use affix::{apply_prefix, apply_suffix};
pub use case::change_case;
pub use datetime::{apply_date_time, format_timestamp};
pub use extension::apply_extension;
pub use find_replace::find_replace;
pub use numbering::{apply_numbering, counter_value, pad_number};
pub use pattern::{compile_pattern, CompiledPattern, PatternError};
pub use regex_replace::regex_replace;
pub use remove::remove_characters;
pub use trim::trim_clean;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::operation::OperationConfig;

/// Widest zero padding a counter may ask for
pub const MAX_PADDING: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("counter overflow at position {index}")]
    CounterOverflow { index: usize },

    #[error("padding {requested} exceeds the maximum of {max}")]
    PaddingTooLarge { requested: usize, max: usize },
}

/// File metadata supplied by file acquisition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileMeta {
    /// Last modification time, local wall clock
    pub modified: Option<NaiveDateTime>,
}

/// Per-file inputs shared by all operations of one evaluation
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    pub index: usize,
    pub meta: &'a FileMeta,
    pub now: NaiveDateTime,
}

/// Apply one operation to the split name.
///
/// The extension kind rewrites `extension`; every other kind rewrites `base`.
pub fn apply(
    config: &OperationConfig,
    base: &mut String,
    extension: &mut String,
    ctx: &TransformContext<'_>,
) -> Result<(), TransformError> {
    match config {
        OperationConfig::FindReplace(c) => *base = find_replace(base, c),
        OperationConfig::Prefix(c) => *base = apply_prefix(base, c, ctx.index)?,
        OperationConfig::Suffix(c) => *base = apply_suffix(base, c, ctx.index)?,
        OperationConfig::RemoveCharacters(c) => *base = remove_characters(base, c),
        OperationConfig::CaseChange(c) => *base = change_case(base, c.target),
        OperationConfig::Numbering(c) => *base = apply_numbering(base, c, ctx.index)?,
        OperationConfig::DateTime(c) => *base = apply_date_time(base, c, ctx.meta, ctx.now),
        OperationConfig::Regex(c) => *base = regex_replace(base, c),
        OperationConfig::Trim(c) => *base = trim_clean(base, c),
        OperationConfig::Extension(c) => *extension = apply_extension(extension, c),
    }
    Ok(())
}
