//! Post-filter cleanup: timestamps, whitespace, consecutive repeats.

use crate::patterns::TIMESTAMP;
use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip leading timestamps. Each table entry is applied once, in order.
pub fn strip_timestamp(line: &str) -> String {
    let mut result = line.to_string();
    for pattern in TIMESTAMP.iter() {
        result = pattern.regex.replace(&result, "").into_owned();
    }
    result
}

/// Timestamp removal, whitespace collapse and trim.
pub fn clean_line(line: &str) -> String {
    let stripped = strip_timestamp(line);
    RE_WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Collapse runs of identical neighbouring lines. Non-adjacent repeats stay.
pub fn dedup_consecutive(lines: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if result.last() != Some(&line) {
            result.push(line);
        }
    }
    result
}
