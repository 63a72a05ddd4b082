use tracing::debug;

use crate::operation::{RemoveConfig, RemoveMode};

use super::pattern::compile_pattern;

pub fn remove_characters(name: &str, config: &RemoveConfig) -> String {
    match config.mode {
        RemoveMode::FirstN => name.chars().skip(config.count).collect(),
        RemoveMode::LastN => {
            let len = name.chars().count();
            name.chars().take(len.saturating_sub(config.count)).collect()
        }
        RemoveMode::Range => remove_range(name, config.start, config.end),
        RemoveMode::Characters => name
            .chars()
            .filter(|c| !config.characters.contains(*c))
            .collect(),
        RemoveMode::Pattern => remove_pattern(name, &config.pattern),
    }
}

/// Drop characters in `[start, end)`; an empty or inverted range removes nothing
fn remove_range(name: &str, start: usize, end: usize) -> String {
    if end <= start {
        return name.to_string();
    }

    name.chars()
        .enumerate()
        .filter(|(i, _)| *i < start || *i >= end)
        .map(|(_, c)| c)
        .collect()
}

fn remove_pattern(name: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        return name.to_string();
    }

    match compile_pattern(pattern, "g") {
        Ok(compiled) => compiled.replace_literal(name, ""),
        Err(e) => {
            debug!(pattern = %pattern, error = %e, "Ignoring invalid removal pattern");
            name.to_string()
        }
    }
}
