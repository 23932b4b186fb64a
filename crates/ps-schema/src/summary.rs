//! Human-readable rendering of a schema.

use crate::schema::{ArrayItems, SchemaAnalysis, SchemaField};
use crate::value::{ValueAnalysis, ValueKind};
use serde_json::Value;

const MAX_REQUIRED_SHOWN: usize = 10;
const MAX_OPTIONAL_SHOWN: usize = 5;

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| serde_json::to_string(v).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_patterns(analysis: &ValueAnalysis) -> String {
    analysis
        .patterns
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn numeric_range(analysis: &ValueAnalysis) -> Option<String> {
    match (analysis.kind, analysis.range) {
        (ValueKind::Number, Some(r)) => Some(format!("{} to {}", r.min, r.max)),
        _ => None,
    }
}

/// Field annotation: range, else possible values, else patterns.
fn field_annotation(analysis: &ValueAnalysis) -> Option<String> {
    if let Some(range) = numeric_range(analysis) {
        return Some(format!(" ({range})"));
    }
    if analysis.is_enumerable() {
        return Some(format!(" (possible values: {})", join_values(&analysis.observed_values)));
    }
    if !analysis.patterns.is_empty() {
        return Some(format!(" (patterns: {})", join_patterns(analysis)));
    }
    None
}

/// Value-list annotation: possible values, else range, else patterns.
fn values_annotation(analysis: &ValueAnalysis) -> Option<String> {
    if analysis.is_enumerable() {
        return Some(format!("\nPossible values: {}", join_values(&analysis.observed_values)));
    }
    if let Some(range) = numeric_range(analysis) {
        return Some(format!("\nRange: {range}"));
    }
    if !analysis.patterns.is_empty() {
        return Some(format!("\nPatterns: {}", join_patterns(analysis)));
    }
    None
}

fn render_required(field: &SchemaField) -> String {
    let a = &field.analysis;
    format!(
        "• {}: {}{}\n",
        field.name,
        a.kind,
        field_annotation(a).unwrap_or_default()
    )
}

fn render_optional(field: &SchemaField) -> String {
    let a = &field.analysis;
    format!(
        "• {}: {} ({}% present){}\n",
        field.name,
        a.kind,
        (field.presence_frequency * 100.0).round(),
        field_annotation(a).unwrap_or_default()
    )
}

fn render_object(fields: &[SchemaField]) -> String {
    let (required, optional): (Vec<&SchemaField>, Vec<&SchemaField>) =
        fields.iter().partition(|f| f.required);

    let mut out = format!("Object with {} fields:\n", fields.len());

    if !required.is_empty() {
        out.push_str(&format!("\nRequired fields ({}):\n", required.len()));
        for field in required.iter().take(MAX_REQUIRED_SHOWN) {
            out.push_str(&render_required(field));
        }
    }

    if !optional.is_empty() {
        out.push_str(&format!("\nOptional fields ({}):\n", optional.len()));
        for field in optional.iter().take(MAX_OPTIONAL_SHOWN) {
            out.push_str(&render_optional(field));
        }
        if optional.len() > MAX_OPTIONAL_SHOWN {
            out.push_str(&format!(
                "... and {} more optional fields\n",
                optional.len() - MAX_OPTIONAL_SHOWN
            ));
        }
    }

    out
}

/// Render `schema` as a deterministic text summary.
pub fn render_summary(schema: &SchemaAnalysis) -> String {
    match schema {
        SchemaAnalysis::Object { fields, .. } => render_object(fields),
        SchemaAnalysis::Array { items, .. } => match items {
            ArrayItems::Schema(inner) => {
                format!("Array containing objects:\n{}", render_summary(inner))
            }
            ArrayItems::Values(analysis) => format!(
                "Array of {} values{}",
                analysis.kind,
                values_annotation(analysis).unwrap_or_default()
            ),
            ArrayItems::Empty => "Array (empty)".to_string(),
        },
        SchemaAnalysis::Primitive { analysis, .. } => format!(
            "{} value{}",
            analysis.kind,
            values_annotation(analysis).unwrap_or_default()
        ),
    }
}
