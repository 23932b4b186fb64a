//! Shape signatures: cheap content addressing for array deduplication.

use ps_core::{canonical_json, normalize_number};
use serde_json::Value;

/// Elements scanned per kept representative.
pub const SCAN_FACTOR: usize = 3;

/// Objects map to their sorted key list; everything else to type and value.
/// Nested arrays use their canonical JSON text as the value; `1.0` and `1`
/// share a signature.
pub fn shape_signature(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
            keys.sort_unstable();
            serde_json::to_string(&keys).unwrap_or_default()
        }
        Value::Null => "null:null".into(),
        Value::Bool(b) => format!("boolean:{b}"),
        Value::Number(n) => format!("number:{}", normalize_number(n)),
        Value::String(s) => format!("string:{s}"),
        Value::Array(_) => format!("array:{}", canonical_json(value)),
    }
}

/// First element for each distinct signature, in first-seen order.
///
/// Scans at most `max_samples * SCAN_FACTOR` leading elements and stops once
/// `max_samples` signatures are collected.
pub fn representatives(items: &[Value], max_samples: usize) -> Vec<&Value> {
    let max_samples = max_samples.max(1);
    let window = items.len().min(max_samples.saturating_mul(SCAN_FACTOR));
    let mut seen: Vec<(String, &Value)> = Vec::new();

    for item in &items[..window] {
        let sig = shape_signature(item);
        if !seen.iter().any(|(s, _)| *s == sig) {
            seen.push((sig, item));
        }
        if seen.len() >= max_samples {
            break;
        }
    }

    seen.into_iter().map(|(_, v)| v).collect()
}
