use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::operation::{DateSource, DateTimeConfig};

use super::numbering::place;
use super::FileMeta;

/// Render `format`, substituting `YYYY`, `YY`, `MM`, `DD`, `HH`, `mm` and `ss`
pub fn format_timestamp(format: &str, at: NaiveDateTime) -> String {
    let tokens: [(&str, String); 7] = [
        ("YYYY", format!("{:04}", at.year())),
        ("YY", format!("{:02}", at.year().rem_euclid(100))),
        ("MM", format!("{:02}", at.month())),
        ("DD", format!("{:02}", at.day())),
        ("HH", format!("{:02}", at.hour())),
        ("mm", format!("{:02}", at.minute())),
        ("ss", format!("{:02}", at.second())),
    ];

    let mut out = String::with_capacity(format.len() + 8);
    let mut rest = format;

    'scan: while !rest.is_empty() {
        for (token, value) in &tokens {
            if let Some(after) = rest.strip_prefix(token) {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}

pub fn apply_date_time(
    name: &str,
    config: &DateTimeConfig,
    meta: &FileMeta,
    now: NaiveDateTime,
) -> String {
    let at = match config.source {
        DateSource::Current => now,
        // No creation time is available from file acquisition; both read mtime
        DateSource::Modified | DateSource::Created => meta.modified.unwrap_or(now),
    };

    let stamp = format_timestamp(&config.format, at);
    place(name, &stamp, config.position, &config.separator)
}
