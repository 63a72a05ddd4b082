use regex::RegexBuilder;
use tracing::debug;

use crate::operation::FindReplaceConfig;

use super::pattern::{compile_pattern, CompiledPattern};

pub fn find_replace(name: &str, config: &FindReplaceConfig) -> String {
    if config.find.is_empty() {
        return name.to_string();
    }

    if config.use_regex {
        return regex_mode(name, config);
    }

    if config.case_sensitive {
        return if config.replace_all {
            name.replace(&config.find, &config.replace)
        } else {
            name.replacen(&config.find, &config.replace, 1)
        };
    }

    // Case-insensitive literal search goes through an escaped pattern
    match RegexBuilder::new(&regex::escape(&config.find))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => CompiledPattern::from_regex(regex, config.replace_all)
            .replace_literal(name, &config.replace),
        Err(e) => {
            debug!(error = %e, "Escaped search text did not compile");
            name.to_string()
        }
    }
}

fn regex_mode(name: &str, config: &FindReplaceConfig) -> String {
    let mut flags = String::new();
    if config.replace_all {
        flags.push('g');
    }
    if !config.case_sensitive {
        flags.push('i');
    }

    match compile_pattern(&config.find, &flags) {
        Ok(pattern) => pattern.replace(name, &config.replace),
        Err(e) => {
            debug!(pattern = %config.find, error = %e, "Ignoring invalid find pattern");
            name.to_string()
        }
    }
}
