//! Pattern tables. Order within a table is match priority.

use regex::Regex;
use std::sync::LazyLock;

/// A compiled pattern with a stable name.
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl NamedPattern {
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

fn table(entries: &[(&'static str, &str)]) -> Vec<NamedPattern> {
    entries
        .iter()
        .map(|&(name, pattern)| NamedPattern {
            name,
            regex: Regex::new(pattern).unwrap(),
        })
        .collect()
}

/// First table entry matching `line`.
pub fn first_match<'a>(patterns: &'a [NamedPattern], line: &str) -> Option<&'a NamedPattern> {
    patterns.iter().find(|p| p.is_match(line))
}

pub fn any_match(patterns: &[NamedPattern], line: &str) -> bool {
    first_match(patterns, line).is_some()
}

/// Lines that open a new error group.
pub static ERROR_PREFIX: LazyLock<Vec<NamedPattern>> = LazyLock::new(|| table(&[
    ("error", r"(?i)^.*?Error:"),
    ("exception", r"(?i)^.*?Exception:"),
    ("failed", r"(?i)^.*?Failed:"),
    ("fatal", r"(?i)^.*?Fatal:"),
]));

/// Frames belonging to the current error group.
pub static STACK_FRAME: LazyLock<Vec<NamedPattern>> = LazyLock::new(|| table(&[
    ("js-frame", r"^\s*at\s+.*?\(.*?:\d+:\d+\)"),
    ("js-location", r"^\s*at\s+.*?:\d+:\d+"),
    ("jvm-frame", r"^\s*at\s+[\w$./<>]+\([\w$.\-]+:\d+\)"),
    ("native-frame", r"^\s*at\s+.*\((?:<anonymous>|native|Native Method|Unknown Source)\)\s*$"),
    ("python-file", r#"^\s*File ".*?", line \d+"#),
    ("at-line", r"^\s*at\s+"),
]));

/// Runtime, dependency and bundler internals.
pub static FRAMEWORK_NOISE: LazyLock<Vec<NamedPattern>> = LazyLock::new(|| table(&[
    ("node-modules", r"node_modules"),
    ("webpack", r"(?i)webpack"),
    ("babel", r"(?i)babel"),
    ("node-internal-process", r"internal/process"),
    ("node-internal-modules", r"internal/modules"),
    ("module-internals", r"^\s*at\s+Module\._"),
    ("anonymous-object", r"^\s*at\s+Object\.<anonymous>"),
    ("require", r"^\s*at\s+require\s*\("),
    ("module-load", r"^\s*at\s+Function\.Module\._load"),
]));

/// Leading timestamps, stripped in table order.
pub static TIMESTAMP: LazyLock<Vec<NamedPattern>> = LazyLock::new(|| table(&[
    ("iso", r"^\d{4}-\d{2}-\d{2}[T\s]\d{2}:\d{2}:\d{2}(?:[.,]\d+)?(?:Z|[+-]\d{2}:?\d{2})?"),
    ("bracketed", r"^\[\d{4}-\d{2}-\d{2}[^\]]*\]"),
    ("time", r"^\d{2}:\d{2}:\d{2}(?:[.,]\d+)?"),
]));

/// Words that keep a line at the aggressive level.
pub const AGGRESSIVE_KEYWORDS: &[&str] = &["error", "failed", "exception"];

pub fn has_aggressive_keyword(line: &str) -> bool {
    let lower = line.to_lowercase();
    AGGRESSIVE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
