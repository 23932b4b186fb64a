//! JSON schema inference.
//!
//! Walks a parsed document and infers, per field, the dominant type, numeric
//! range, recognizable string patterns and a bounded set of observed values,
//! then renders a compact human-readable summary.

pub mod analyzer;
pub mod schema;
pub mod summary;
pub mod value;

pub use analyzer::{analyze, AnalysisResult};
pub use schema::{analyze_array_schema, analyze_data, analyze_object_schema, ArrayItems, SchemaAnalysis, SchemaField};
pub use summary::render_summary;
pub use value::{analyze_values, NumericRange, StringPattern, ValueAnalysis, ValueKind};

#[cfg(test)]
mod tests;
