mod types;

pub use types::*;

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use crate::pipeline::FileResult;

/// Characters no proposed name may contain, besides ASCII controls
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub fn has_invalid_characters(name: &str) -> bool {
    name.chars()
        .any(|c| RESERVED_CHARS.contains(&c) || (c as u32) < 32)
}

/// Per-file validity of a proposed name and its base component
pub fn check_name(base: &str, proposed: &str) -> Option<RenameIssue> {
    if has_invalid_characters(proposed) {
        return Some(RenameIssue::InvalidCharacters);
    }

    if base.trim().is_empty() {
        return Some(RenameIssue::EmptyName);
    }

    None
}

/// Flag every result whose proposed name occurs more than once.
///
/// Matching is exact and case-sensitive. A duplicate replaces whatever issue
/// the result carried before. Returns the number of results flagged.
pub fn mark_duplicates(results: &mut [FileResult]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(results.len());
    for result in results.iter() {
        *counts.entry(result.proposed_name.as_str()).or_insert(0) += 1;
    }

    let duplicated: HashSet<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect();

    if duplicated.is_empty() {
        return 0;
    }

    let mut flagged = 0;
    for result in results.iter_mut() {
        if duplicated.contains(result.proposed_name.as_str()) {
            debug!(name = %result.proposed_name, "Duplicate proposed name");
            result.is_valid = false;
            result.issue = Some(RenameIssue::Duplicate);
            flagged += 1;
        }
    }

    info!(
        names = duplicated.len(),
        files = flagged,
        "Duplicate proposed names detected"
    );

    flagged
}
