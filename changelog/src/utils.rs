use once_cell::sync::Lazy;
use regex::Regex;

pub const BULLET_PREFIX: &str = "- ";

pub static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s").expect("Failed to compile heading regex"));

pub static LINE_BREAK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("Failed to compile line break regex"));

/// Prefixes `line` with a bullet unless it already starts with a dash.
/// `-foo` is kept as is.
#[must_use]
pub fn normalize_bullet(line: &str) -> String {
    if line.starts_with('-') {
        line.to_string()
    } else {
        format!("{BULLET_PREFIX}{line}")
    }
}

/// Splits text on `\r\n`, `\r` or `\n`. A terminator at the very end does not
/// start another line, and empty text has no lines.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&str> = LINE_BREAK_PATTERN.split(content).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}

#[must_use]
pub fn is_heading(line: &str) -> bool {
    HEADING_PATTERN.is_match(line)
}
