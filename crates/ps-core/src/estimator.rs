//! Token estimation: character-length heuristic shared by all engines.

/// Characters per token for JSON and log text.
pub const CHARS_PER_TOKEN: f64 = 3.5;

/// Approximate token count: `ceil(chars / 3.5)`.
pub fn estimate_size(text: &str) -> usize {
    (text.chars().count() as f64 / CHARS_PER_TOKEN).ceil() as usize
}

/// `(original - transformed) / original`, or 0 when `original` is 0.
/// Negative when the transformed text grew.
pub fn reduction_ratio(original: usize, transformed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - transformed as f64) / original as f64
}
