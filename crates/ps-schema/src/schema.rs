//! Object, array and primitive schema inference.

use crate::value::{analyze_values, ValueAnalysis};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Fields present in more than this share of objects are required.
pub const REQUIRED_THRESHOLD: f64 = 0.9;
/// Share of object items above which an array is treated as a record list.
pub const OBJECT_ARRAY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaField {
    pub name: String,
    pub analysis: ValueAnalysis,
    pub required: bool,
    pub presence_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayItems {
    /// Record list: the schema of the object items.
    Schema(Box<SchemaAnalysis>),
    /// Scalars or mixed items.
    Values(ValueAnalysis),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaAnalysis {
    Object {
        /// Descending presence frequency, first-seen order on ties.
        fields: Vec<SchemaField>,
        sample_count: usize,
    },
    Array {
        items: ArrayItems,
        sample_count: usize,
    },
    Primitive {
        analysis: ValueAnalysis,
        sample_count: usize,
    },
}

impl SchemaAnalysis {
    pub fn sample_count(&self) -> usize {
        match self {
            Self::Object { sample_count, .. }
            | Self::Array { sample_count, .. }
            | Self::Primitive { sample_count, .. } => *sample_count,
        }
    }

    /// Fields of an object schema, or of the item schema of a record list.
    pub fn fields(&self) -> &[SchemaField] {
        match self {
            Self::Object { fields, .. } => fields,
            Self::Array { items: ArrayItems::Schema(inner), .. } => inner.fields(),
            _ => &[],
        }
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields().iter().find(|f| f.name == name)
    }
}

/// Union the fields of `objects`. Non-object entries are skipped but still
/// count as samples.
pub fn analyze_object_schema(objects: &[&Value]) -> SchemaAnalysis {
    let total = objects.len();
    let mut order: Vec<(String, Vec<&Value>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for obj in objects {
        let Some(map) = obj.as_object() else { continue };
        for (key, value) in map {
            match index.get(key.as_str()) {
                Some(&i) => order[i].1.push(value),
                None => {
                    index.insert(key.as_str(), order.len());
                    order.push((key.clone(), vec![value]));
                }
            }
        }
    }

    let mut fields: Vec<SchemaField> = order
        .into_iter()
        .map(|(name, values)| {
            let presence_frequency = values.len() as f64 / total as f64;
            SchemaField {
                analysis: analyze_values(&values),
                required: presence_frequency > REQUIRED_THRESHOLD,
                presence_frequency,
                name,
            }
        })
        .collect();

    // sort_by is stable, so ties keep first-seen order.
    fields.sort_by(|a, b| b.presence_frequency.total_cmp(&a.presence_frequency));

    tracing::debug!(objects = total, fields = fields.len(), "object schema inferred");
    SchemaAnalysis::Object { fields, sample_count: total }
}

/// Flatten the items of `arrays` and analyze them as a record list or as
/// plain values.
pub fn analyze_array_schema(arrays: &[&Value]) -> SchemaAnalysis {
    let items: Vec<&Value> = arrays
        .iter()
        .filter_map(|a| a.as_array())
        .flatten()
        .collect();
    let sample_count = arrays.len();

    if items.is_empty() {
        return SchemaAnalysis::Array { items: ArrayItems::Empty, sample_count };
    }

    let objects: Vec<&Value> = items.iter().copied().filter(|v| v.is_object()).collect();
    let items = if objects.len() as f64 >= items.len() as f64 * OBJECT_ARRAY_THRESHOLD {
        ArrayItems::Schema(Box::new(analyze_object_schema(&objects)))
    } else {
        ArrayItems::Values(analyze_values(&items))
    };

    SchemaAnalysis::Array { items, sample_count }
}

/// Top-level dispatch on the shape of `data`.
pub fn analyze_data(data: &Value) -> SchemaAnalysis {
    match data {
        Value::Array(_) => analyze_array_schema(&[data]),
        Value::Object(_) => analyze_object_schema(&[data]),
        _ => SchemaAnalysis::Primitive {
            analysis: analyze_values(&[data]),
            sample_count: 1,
        },
    }
}
