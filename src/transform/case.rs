use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::operation::CaseTarget;

// camelCase: a run of non-alphanumerics is dropped and the next character upper-cased
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+(.)").unwrap());

// lowerUpper transitions get a separator between them
static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static NOT_SNAKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());

static NOT_KEBAB: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9-]").unwrap());

pub fn change_case(name: &str, target: CaseTarget) -> String {
    match target {
        CaseTarget::Upper => name.to_uppercase(),
        CaseTarget::Lower => name.to_lowercase(),
        CaseTarget::Title => title_case(name),
        CaseTarget::Sentence => sentence_case(name),
        CaseTarget::Camel => camel_case(name),
        CaseTarget::Snake => separated_case(name, "_", &NOT_SNAKE),
        CaseTarget::Kebab => separated_case(name, "-", &NOT_KEBAB),
    }
}

fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;

    for c in name.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

fn sentence_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

fn camel_case(name: &str) -> String {
    let lowered = name.to_lowercase();
    CAMEL_BOUNDARY
        .replace_all(&lowered, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

fn separated_case(name: &str, separator: &str, not_allowed: &Regex) -> String {
    let split = LOWER_UPPER.replace_all(name, format!("${{1}}{}${{2}}", separator).as_str());
    let spaced = WHITESPACE_RUN.replace_all(&split, separator);
    let cleaned = not_allowed.replace_all(&spaced, separator);
    cleaned.to_lowercase()
}
