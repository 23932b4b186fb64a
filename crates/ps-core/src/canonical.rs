//! Canonical JSON text for value identity.

use serde_json::{Number, Value};

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Integral floats collapse to integers, so `1.0` and `1` are one number.
pub fn normalize_number(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT => {
            Number::from(f as i64)
        }
        _ => n.clone(),
    }
}

/// Copy of `value` with every number normalized.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(normalize_number(n)),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Compact JSON of the normalized value. Equal texts mean equal values.
pub fn canonical_json(value: &Value) -> String {
    serde_json::to_string(&normalize(value)).unwrap_or_default()
}
