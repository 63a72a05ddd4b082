use once_cell::sync::Lazy;
use regex::Regex;

use crate::operation::TrimConfig;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

pub fn trim_clean(name: &str, config: &TrimConfig) -> String {
    let mut result = if config.trim_whitespace {
        name.trim().to_string()
    } else {
        name.to_string()
    };

    if config.collapse_spaces {
        result = WHITESPACE_RUN.replace_all(&result, " ").into_owned();
    }

    if !config.remove_chars.is_empty() {
        result.retain(|c| !config.remove_chars.contains(c));
    }

    if !config.replace_spaces_with.is_empty() {
        result = result
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    config.replace_spaces_with.clone()
                } else {
                    c.to_string()
                }
            })
            .collect();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trims_and_collapses() {
        assert_eq!(trim_clean("  my   file \t name ", &TrimConfig::default()), "my file name");
    }

    #[test]
    fn test_replace_spaces() {
        let config = TrimConfig {
            replace_spaces_with: "_".to_string(),
            ..TrimConfig::default()
        };
        assert_eq!(trim_clean(" a  b c ", &config), "a_b_c");
    }

    #[test]
    fn test_replace_without_collapse_keeps_run_length() {
        let config = TrimConfig {
            collapse_spaces: false,
            replace_spaces_with: ".".to_string(),
            ..TrimConfig::default()
        };
        assert_eq!(trim_clean("a  b", &config), "a..b");
    }

    #[test]
    fn test_remove_chars() {
        let config = TrimConfig {
            remove_chars: "#!".to_string(),
            ..TrimConfig::default()
        };
        assert_eq!(trim_clean("#hot! take", &config), "hot take");
    }

    #[test]
    fn test_everything_disabled() {
        let config = TrimConfig {
            trim_whitespace: false,
            collapse_spaces: false,
            remove_chars: String::new(),
            replace_spaces_with: String::new(),
        };
        assert_eq!(trim_clean("  as  is ", &config), "  as  is ");
    }
}
