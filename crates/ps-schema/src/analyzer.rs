use crate::schema::{analyze_data, SchemaAnalysis};
use crate::summary::render_summary;
use ps_core::{estimate_size, reduction_ratio, Result};
use serde::Serialize;
use serde_json::Value;

/// Inferred schema plus its summary, sized against the original text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub original: String,
    pub schema: SchemaAnalysis,
    pub summary: String,
    pub original_size: usize,
    pub schema_size: usize,
    pub reduction_ratio: f64,
}

/// Parse `json_text` and infer its schema.
pub fn analyze(json_text: &str) -> Result<AnalysisResult> {
    let data: Value = serde_json::from_str(json_text)?;
    let schema = analyze_data(&data);
    let summary = render_summary(&schema);

    let original_size = estimate_size(json_text);
    let schema_size = estimate_size(&summary);
    tracing::debug!(
        samples = schema.sample_count(),
        original = original_size,
        summary = schema_size,
        "schema analyzed"
    );

    Ok(AnalysisResult {
        original: json_text.to_string(),
        schema,
        summary,
        original_size,
        schema_size,
        reduction_ratio: reduction_ratio(original_size, schema_size),
    })
}
