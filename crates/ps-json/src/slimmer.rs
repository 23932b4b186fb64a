//! Recursive slimming over a parsed JSON value.

use crate::signature::representatives;
use ps_core::{CompressionLevel, Result, SlimOptions, SlimResult};
use serde_json::{Map, Value};

/// Lowercase key substrings dropped at `Aggressive`. Matching is by
/// containment, so `metadataX` and `x_debug_info` are noise too.
pub const NOISE_KEYS: &[&str] = &["metadata", "debug", "trace", "__typename", "_links", "etag"];

fn is_noise_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    NOISE_KEYS.iter().any(|noise| lower.contains(noise))
}

/// Summary element appended after the kept representatives.
pub fn more_items_marker(omitted: usize) -> Value {
    Value::String(format!("... and {omitted} more similar items"))
}

/// Slim a parsed value. The input is left untouched.
pub fn slim_value(value: &Value, options: &SlimOptions) -> Value {
    match value {
        Value::Array(items) => slim_array(items, options),
        Value::Object(map) => slim_object(map, options),
        scalar => scalar.clone(),
    }
}

fn slim_array(items: &[Value], options: &SlimOptions) -> Value {
    if items.is_empty() {
        return Value::Array(Vec::new());
    }

    let reps = representatives(items, options.max_array_samples);
    if reps.len() < items.len() {
        let omitted = items.len() - reps.len();
        tracing::debug!(len = items.len(), kept = reps.len(), omitted, "array deduplicated");
        let mut out: Vec<Value> = reps.into_iter().map(|v| slim_value(v, options)).collect();
        out.push(more_items_marker(omitted));
        return Value::Array(out);
    }

    Value::Array(items.iter().map(|v| slim_value(v, options)).collect())
}

fn slim_object(map: &Map<String, Value>, options: &SlimOptions) -> Value {
    let aggressive = options.compression_level == CompressionLevel::Aggressive;
    let mut out = Map::with_capacity(map.len());

    for (key, value) in map {
        if !options.preserves(key) && aggressive && is_noise_key(key) {
            continue;
        }
        out.insert(key.clone(), slim_value(value, options));
    }

    Value::Object(out)
}

/// Parse `json_text`, slim it, and re-serialize with 2-space indentation.
pub fn slim(json_text: &str, options: &SlimOptions) -> Result<SlimResult> {
    let parsed: Value = serde_json::from_str(json_text)?;
    let slimmed = slim_value(&parsed, options);
    let text = serde_json::to_string_pretty(&slimmed)?;
    let result = SlimResult::new(json_text, text);
    tracing::debug!(
        level = %options.compression_level,
        original = result.original_size,
        slimmed = result.transformed_size,
        "json slimmed"
    );
    Ok(result)
}
