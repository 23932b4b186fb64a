use crate::estimator::{estimate_size, reduction_ratio};
use serde::Serialize;

/// Transformed text with before/after token sizing.
#[derive(Debug, Clone, Serialize)]
pub struct SlimResult {
    pub original: String,
    pub transformed: String,
    pub original_size: usize,
    pub transformed_size: usize,
    pub reduction_ratio: f64,
}

impl SlimResult {
    pub fn new(original: impl Into<String>, transformed: impl Into<String>) -> Self {
        let original = original.into();
        let transformed = transformed.into();
        let original_size = estimate_size(&original);
        let transformed_size = estimate_size(&transformed);
        Self {
            reduction_ratio: reduction_ratio(original_size, transformed_size),
            original,
            transformed,
            original_size,
            transformed_size,
        }
    }

    /// Reduction as a percentage, for display.
    pub fn reduction_pct(&self) -> f64 {
        self.reduction_ratio * 100.0
    }
}
