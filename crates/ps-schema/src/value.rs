//! Statistics over a bag of JSON values.

use ps_core::{canonical_json, normalize};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Distinct values are kept in full up to this count.
pub const ENUM_LIMIT: usize = 20;
/// Distinct values kept once `ENUM_LIMIT` is exceeded.
pub const TRUNCATED_OBSERVED: usize = 5;
pub const EXAMPLE_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Boolean,
    Number,
    String,
    Object,
    Array,
    Null,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringPattern {
    Date,
    Email,
    Url,
    Uuid,
    NumericString,
}

impl StringPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Email => "email",
            Self::Url => "url",
            Self::Uuid => "uuid",
            Self::NumericString => "numeric-string",
        }
    }
}

impl fmt::Display for StringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String pattern table, in reporting order.
static STRING_PATTERNS: LazyLock<Vec<(StringPattern, Regex)>> = LazyLock::new(|| {
    [
        (StringPattern::Date, r"^\d{4}-\d{2}-\d{2}"),
        (StringPattern::Email, r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"),
        (StringPattern::Url, r"^https?://"),
        (StringPattern::Uuid, r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"),
        (StringPattern::NumericString, r"^\d+$"),
    ]
    .into_iter()
    .map(|(p, re)| (p, Regex::new(re).unwrap()))
    .collect()
});

/// Every pattern `text` matches, in table order.
pub fn string_patterns(text: &str) -> impl Iterator<Item = StringPattern> + '_ {
    STRING_PATTERNS
        .iter()
        .filter(move |(_, re)| re.is_match(text))
        .map(|(p, _)| *p)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAnalysis {
    pub kind: ValueKind,
    /// Distinct values in first-seen order; cut to `TRUNCATED_OBSERVED`
    /// once more than `ENUM_LIMIT` are seen.
    pub observed_values: Vec<Value>,
    pub observed_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<NumericRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<StringPattern>,
    pub examples: Vec<Value>,
}

impl ValueAnalysis {
    pub fn is_enumerable(&self) -> bool {
        self.observed_count <= ENUM_LIMIT
    }
}

/// Most frequent kind; on equal counts the kind seen first wins.
fn primary_kind(values: &[&Value]) -> ValueKind {
    let mut counts: Vec<(ValueKind, usize)> = Vec::new();
    for v in values {
        let kind = ValueKind::of(v);
        match counts.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, n)) => *n += 1,
            None => counts.push((kind, 1)),
        }
    }

    let mut best = (ValueKind::Null, 0);
    for (kind, n) in counts {
        if n > best.1 {
            best = (kind, n);
        }
    }
    best.0
}

fn distinct(values: &[&Value]) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        let normalized = normalize(v);
        if seen.insert(canonical_json(&normalized)) {
            out.push(normalized);
        }
    }
    out
}

fn numeric_range(values: &[&Value]) -> Option<NumericRange> {
    values
        .iter()
        .filter_map(|v| v.as_f64())
        .fold(None, |acc, n| match acc {
            None => Some(NumericRange { min: n, max: n }),
            Some(r) => Some(NumericRange { min: r.min.min(n), max: r.max.max(n) }),
        })
}

fn observed_patterns(values: &[&Value]) -> Vec<StringPattern> {
    let mut found: Vec<StringPattern> = Vec::new();
    for s in values.iter().filter_map(|v| v.as_str()) {
        for p in string_patterns(s) {
            if !found.contains(&p) {
                found.push(p);
            }
        }
    }
    found.sort_by_key(|p| *p as u8);
    found
}

/// Analyze a bag of values. An empty bag is `Null` with nothing observed.
pub fn analyze_values(values: &[&Value]) -> ValueAnalysis {
    let unique = distinct(values);
    let observed_count = unique.len();
    let kind = primary_kind(values);

    let range = match kind {
        ValueKind::Number => numeric_range(values),
        _ => None,
    };
    let patterns = match kind {
        ValueKind::String => observed_patterns(values),
        _ => Vec::new(),
    };

    let examples: Vec<Value> = unique.iter().take(EXAMPLE_COUNT).cloned().collect();
    let mut observed_values = unique;
    if observed_count > ENUM_LIMIT {
        observed_values.truncate(TRUNCATED_OBSERVED);
    }

    ValueAnalysis {
        kind,
        observed_values,
        observed_count,
        range,
        patterns,
        examples,
    }
}
