use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid pattern: {0}")]
    Syntax(String),

    #[error("Unsupported flag: {0}")]
    UnsupportedFlag(char),

    #[error("Flag given more than once: {0}")]
    RepeatedFlag(char),
}

/// A user pattern compiled together with its flags
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    global: bool,
}

/// Compile `text` with single-letter `flags` (`g`, `i`, `m`, `s`, `u`).
///
/// Callers treat any error as "leave the name unchanged".
pub fn compile_pattern(text: &str, flags: &str) -> Result<CompiledPattern, PatternError> {
    let mut builder = RegexBuilder::new(text);
    let mut global = false;
    let mut seen = Vec::with_capacity(flags.len());

    for flag in flags.chars() {
        if seen.contains(&flag) {
            return Err(PatternError::RepeatedFlag(flag));
        }
        seen.push(flag);

        match flag {
            'g' => global = true,
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'u' => {}
            other => return Err(PatternError::UnsupportedFlag(other)),
        }
    }

    let regex = builder
        .build()
        .map_err(|e| PatternError::Syntax(e.to_string()))?;

    Ok(CompiledPattern { regex, global })
}

impl CompiledPattern {
    /// Wrap an already built regex
    pub fn from_regex(regex: Regex, global: bool) -> Self {
        Self { regex, global }
    }

    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Replace matches using `$1` / `$<name>` / `$&` / `$$` replacement syntax
    pub fn replace(&self, haystack: &str, replacement: &str) -> String {
        let template = self.translate_replacement(replacement);
        if self.global {
            self.regex.replace_all(haystack, template.as_str()).into_owned()
        } else {
            self.regex.replace(haystack, template.as_str()).into_owned()
        }
    }

    /// Replace matches with `replacement` taken literally
    pub fn replace_literal(&self, haystack: &str, replacement: &str) -> String {
        if self.global {
            self.regex
                .replace_all(haystack, regex::NoExpand(replacement))
                .into_owned()
        } else {
            self.regex
                .replace(haystack, regex::NoExpand(replacement))
                .into_owned()
        }
    }

    /// Rewrite a replacement template into the regex crate's `${group}` form
    fn translate_replacement(&self, replacement: &str) -> String {
        let groups = self.regex.captures_len();
        let chars: Vec<char> = replacement.chars().collect();
        let mut out = String::with_capacity(replacement.len() + 8);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c != '$' {
                out.push(c);
                i += 1;
                continue;
            }

            match chars.get(i + 1).copied() {
                Some('$') => {
                    out.push_str("$$");
                    i += 2;
                }
                Some('&') => {
                    out.push_str("${0}");
                    i += 2;
                }
                Some(d) if d.is_ascii_digit() => {
                    let one = d.to_digit(10).unwrap_or(0) as usize;
                    let two = chars
                        .get(i + 2)
                        .and_then(|d2| d2.to_digit(10))
                        .map(|d2| one * 10 + d2 as usize);

                    match two {
                        Some(n) if n > 0 && n < groups => {
                            out.push_str(&format!("${{{}}}", n));
                            i += 3;
                        }
                        _ if one > 0 && one < groups => {
                            out.push_str(&format!("${{{}}}", one));
                            i += 2;
                        }
                        _ => {
                            out.push_str("$$");
                            i += 1;
                        }
                    }
                }
                Some('<') => {
                    let rest: String = chars[i + 2..].iter().collect();
                    match rest.find('>') {
                        Some(end) if end > 0 => {
                            let name = &rest[..end];
                            out.push_str(&format!("${{{}}}", name));
                            i += 2 + name.chars().count() + 1;
                        }
                        _ => {
                            out.push_str("$$");
                            i += 1;
                        }
                    }
                }
                _ => {
                    out.push_str("$$");
                    i += 1;
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid_pattern() {
        let pattern = compile_pattern(r"\d+", "g").unwrap();
        assert!(pattern.is_global());
        assert_eq!(pattern.replace("a1b22", "#"), "a#b#");
    }

    #[test]
    fn test_non_global_replaces_first_only() {
        let pattern = compile_pattern(r"\d", "").unwrap();
        assert_eq!(pattern.replace("a1b2", "#"), "a#b2");
    }

    #[test]
    fn test_case_insensitive_flag() {
        let pattern = compile_pattern("img", "gi").unwrap();
        assert_eq!(pattern.replace("IMG_img", "pic"), "pic_pic");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            compile_pattern("([a-z", "g"),
            Err(PatternError::Syntax(_))
        ));
    }

    #[test]
    fn test_unsupported_and_repeated_flags() {
        assert_eq!(
            compile_pattern("a", "gx").unwrap_err(),
            PatternError::UnsupportedFlag('x')
        );
        assert_eq!(
            compile_pattern("a", "gg").unwrap_err(),
            PatternError::RepeatedFlag('g')
        );
    }

    #[test]
    fn test_numbered_group_replacement() {
        let pattern = compile_pattern(r"(\w+)-(\w+)", "").unwrap();
        assert_eq!(pattern.replace("left-right", "$2-$1"), "right-left");
    }

    #[test]
    fn test_group_followed_by_text() {
        let pattern = compile_pattern(r"(\d+)", "").unwrap();
        assert_eq!(pattern.replace("v7", "$1a"), "v7a");
    }

    #[test]
    fn test_whole_match_and_dollar() {
        let pattern = compile_pattern("cat", "g").unwrap();
        assert_eq!(pattern.replace("cat", "[$&]$$"), "[cat]$");
    }

    #[test]
    fn test_named_group_replacement() {
        let pattern = compile_pattern(r"(?P<year>\d{4})", "").unwrap();
        assert_eq!(pattern.replace("shot 2024", "y$<year>"), "shot y2024");
    }

    #[test]
    fn test_unknown_group_is_literal() {
        let pattern = compile_pattern("a", "").unwrap();
        assert_eq!(pattern.replace("a", "$5"), "$5");
    }

    #[test]
    fn test_replace_literal_ignores_dollar() {
        let pattern = compile_pattern("a", "g").unwrap();
        assert_eq!(pattern.replace_literal("aa", "$1"), "$1$1");
    }
}
