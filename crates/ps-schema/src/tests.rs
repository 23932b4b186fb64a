use crate::*;
use crate::value::string_patterns;
use ps_core::SlimError;
use serde_json::{json, Value};

fn schema_of(v: &Value) -> SchemaAnalysis {
    analyze(&v.to_string()).unwrap().schema
}

// ========== Value analysis ==========

#[test]
fn test_values_empty() {
    let a = analyze_values(&[]);
    assert_eq!(a.kind, ValueKind::Null);
    assert_eq!(a.observed_count, 0);
    assert!(a.examples.is_empty());
}

#[test]
fn test_values_distinct_first_seen() {
    let vals = [json!("b"), json!("a"), json!("b"), json!("c")];
    let refs: Vec<&Value> = vals.iter().collect();
    let a = analyze_values(&refs);
    assert_eq!(a.observed_count, 3);
    assert_eq!(a.observed_values, vec![json!("b"), json!("a"), json!("c")]);
}

#[test]
fn test_values_deep_equality() {
    let vals = [json!({"x": [1, 2]}), json!({"x": [1, 2]}), json!({"x": [2, 1]})];
    let refs: Vec<&Value> = vals.iter().collect();
    assert_eq!(analyze_values(&refs).observed_count, 2);
}

#[test]
fn test_values_integral_floats_equal_integers() {
    let vals = [json!(1), json!(1.0), json!(2), json!(2.0), json!(2.5)];
    let refs: Vec<&Value> = vals.iter().collect();
    let a = analyze_values(&refs);
    assert_eq!(a.observed_count, 3);
    assert_eq!(a.observed_values, vec![json!(1), json!(2), json!(2.5)]);
}

#[test]
fn test_values_kind_majority() {
    let vals = [json!("a"), json!(1), json!(2)];
    let refs: Vec<&Value> = vals.iter().collect();
    assert_eq!(analyze_values(&refs).kind, ValueKind::Number);
}

#[test]
fn test_values_kind_tie_first_seen() {
    let vals = [json!(1), json!("a")];
    let refs: Vec<&Value> = vals.iter().collect();
    assert_eq!(analyze_values(&refs).kind, ValueKind::Number);
    let vals = [json!("a"), json!(1)];
    let refs: Vec<&Value> = vals.iter().collect();
    assert_eq!(analyze_values(&refs).kind, ValueKind::String);
}

#[test]
fn test_values_range_numbers_only() {
    let vals = [json!(3), json!(-1.5), json!("x"), json!(10), json!(3)];
    let refs: Vec<&Value> = vals.iter().collect();
    let a = analyze_values(&refs);
    assert_eq!(a.range, Some(NumericRange { min: -1.5, max: 10.0 }));
    assert!(a.patterns.is_empty());
}

#[test]
fn test_values_no_range_for_strings() {
    let v = json!("1");
    assert!(analyze_values(&[&v]).range.is_none());
}

#[test]
fn test_string_pattern_table() {
    assert_eq!(string_patterns("2024-01-15T10:00:00Z").collect::<Vec<_>>(), vec![StringPattern::Date]);
    assert_eq!(string_patterns("dev@example.com").collect::<Vec<_>>(), vec![StringPattern::Email]);
    assert_eq!(string_patterns("https://example.com/a").collect::<Vec<_>>(), vec![StringPattern::Url]);
    assert_eq!(
        string_patterns("123e4567-e89b-12d3-a456-426614174000").collect::<Vec<_>>(),
        vec![StringPattern::Uuid]
    );
    assert_eq!(string_patterns("00123").collect::<Vec<_>>(), vec![StringPattern::NumericString]);
    assert_eq!(string_patterns("plain text").count(), 0);
}

#[test]
fn test_values_patterns_union_in_table_order() {
    let vals = [json!("42"), json!("https://a.io"), json!("2024-02-02"), json!("plain")];
    let refs: Vec<&Value> = vals.iter().collect();
    let a = analyze_values(&refs);
    assert_eq!(a.kind, ValueKind::String);
    assert_eq!(a.patterns, vec![StringPattern::Date, StringPattern::Url, StringPattern::NumericString]);
}

#[test]
fn test_values_observed_truncated_examples_kept() {
    let vals: Vec<Value> = (0..25).map(|i| json!(format!("v{i}"))).collect();
    let refs: Vec<&Value> = vals.iter().collect();
    let a = analyze_values(&refs);
    assert_eq!(a.observed_count, 25);
    assert_eq!(a.observed_values.len(), 5);
    assert_eq!(a.examples, vec![json!("v0"), json!("v1"), json!("v2")]);
    assert!(!a.is_enumerable());
}

#[test]
fn test_values_enum_limit_inclusive() {
    let vals: Vec<Value> = (0..20).map(|i| json!(i)).collect();
    let refs: Vec<&Value> = vals.iter().collect();
    let a = analyze_values(&refs);
    assert_eq!(a.observed_values.len(), 20);
    assert!(a.is_enumerable());
}

// ========== Schemas ==========

#[test]
fn test_simple_object() {
    let s = schema_of(&json!({"a": 1, "b": 2}));
    assert!(matches!(s, SchemaAnalysis::Object { sample_count: 1, .. }));
    let fields = s.fields();
    assert_eq!(fields.len(), 2);
    for (f, n) in fields.iter().zip([1.0, 2.0]) {
        assert!(f.required);
        assert_eq!(f.presence_frequency, 1.0);
        assert_eq!(f.analysis.kind, ValueKind::Number);
        assert_eq!(f.analysis.range, Some(NumericRange { min: n, max: n }));
    }
}

#[test]
fn test_record_list_enum_and_truncation() {
    let statuses = ["active", "pending", "closed"];
    let rows: Vec<Value> = (0..25)
        .map(|i| json!({"id": format!("u{i}"), "status": statuses[i % 3]}))
        .collect();
    let s = schema_of(&Value::Array(rows));
    let status = s.field("status").unwrap();
    assert_eq!(status.analysis.observed_count, 3);
    for st in statuses {
        assert!(status.analysis.observed_values.contains(&json!(st)));
    }
    let id = s.field("id").unwrap();
    assert_eq!(id.analysis.observed_count, 25);
    assert_eq!(id.analysis.observed_values.len(), 5);
    assert_eq!(id.analysis.examples.len(), 3);
}

#[test]
fn test_required_threshold_strict() {
    let mut rows: Vec<Value> = (0..9).map(|i| json!({"a": i, "b": i})).collect();
    rows.push(json!({"a": 9}));
    let s = schema_of(&Value::Array(rows));
    let a = s.field("a").unwrap();
    let b = s.field("b").unwrap();
    assert!(a.required);
    assert!((b.presence_frequency - 0.9).abs() < 1e-9);
    assert!(!b.required);
}

#[test]
fn test_fields_ordered_by_frequency_stable() {
    let rows = json!([
        {"rare": 1, "x": 1, "y": 1},
        {"x": 2, "y": 2},
        {"y": 3, "x": 3, "late": 1}
    ]);
    let s = schema_of(&rows);
    let names: Vec<&str> = s.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y", "rare", "late"]);
}

#[test]
fn test_object_threshold_inclusive() {
    let s = schema_of(&json!([{"a": 1}, {"a": 2}, {"a": 3}, {"a": 4}, 5]));
    match s {
        SchemaAnalysis::Array { items: ArrayItems::Schema(inner), sample_count } => {
            assert_eq!(sample_count, 1);
            assert_eq!(inner.sample_count(), 4);
        }
        other => panic!("expected record list, got {other:?}"),
    }
}

#[test]
fn test_mixed_array_is_values() {
    let s = schema_of(&json!([{"a": 1}, {"a": 2}, {"a": 3}, 4, 5]));
    match s {
        SchemaAnalysis::Array { items: ArrayItems::Values(a), .. } => {
            assert_eq!(a.kind, ValueKind::Object);
            assert_eq!(a.observed_count, 5);
        }
        other => panic!("expected values, got {other:?}"),
    }
}

#[test]
fn test_nested_arrays_not_flattened_twice() {
    let s = schema_of(&json!([[1, 2], [3]]));
    match s {
        SchemaAnalysis::Array { items: ArrayItems::Values(a), .. } => assert_eq!(a.kind, ValueKind::Array),
        other => panic!("expected values, got {other:?}"),
    }
}

#[test]
fn test_empty_array() {
    let s = schema_of(&json!([]));
    assert!(matches!(s, SchemaAnalysis::Array { items: ArrayItems::Empty, .. }));
}

#[test]
fn test_empty_object() {
    let s = schema_of(&json!({}));
    assert!(s.fields().is_empty());
    assert_eq!(s.sample_count(), 1);
}

#[test]
fn test_primitive() {
    let s = schema_of(&json!("hello"));
    match s {
        SchemaAnalysis::Primitive { analysis, sample_count } => {
            assert_eq!(sample_count, 1);
            assert_eq!(analysis.kind, ValueKind::String);
        }
        other => panic!("expected primitive, got {other:?}"),
    }
}

#[test]
fn test_object_schema_direct_counts_non_objects() {
    let a = json!({"k": 1});
    let b = json!(3);
    let s = analyze_object_schema(&[&a, &b]);
    assert_eq!(s.field("k").unwrap().presence_frequency, 0.5);
}

#[test]
fn test_object_schema_empty_input() {
    let s = analyze_object_schema(&[]);
    assert_eq!(s.sample_count(), 0);
    assert!(s.fields().is_empty());
}

#[test]
fn test_array_schema_flattens_many() {
    let a = json!([1, 2]);
    let b = json!([3]);
    match analyze_array_schema(&[&a, &b]) {
        SchemaAnalysis::Array { items: ArrayItems::Values(v), sample_count } => {
            assert_eq!(sample_count, 2);
            assert_eq!(v.range, Some(NumericRange { min: 1.0, max: 3.0 }));
        }
        other => panic!("expected values, got {other:?}"),
    }
}

// ========== Summary ==========

#[test]
fn test_summary_simple_object() {
    let r = analyze(r#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(
        r.summary,
        "Object with 2 fields:\n\nRequired fields (2):\n• a: number (1 to 1)\n• b: number (2 to 2)\n"
    );
}

#[test]
fn test_summary_record_list() {
    let r = analyze(r#"[{"id":1,"status":"ok"},{"id":2,"status":"fail"}]"#).unwrap();
    assert_eq!(
        r.summary,
        "Array containing objects:\nObject with 2 fields:\n\nRequired fields (2):\n\
         • id: number (1 to 2)\n• status: string (possible values: \"ok\", \"fail\")\n"
    );
}

#[test]
fn test_summary_optional_fields() {
    let r = analyze(r#"[{"a":1,"note":"x"},{"a":2}]"#).unwrap();
    assert!(r.summary.contains("• note: string (50% present) (possible values: \"x\")\n"));
}

#[test]
fn test_summary_patterns_when_not_enumerable() {
    let rows: Vec<Value> = (0..25).map(|i| json!({"email": format!("u{i}@example.com")})).collect();
    let r = analyze(&Value::Array(rows).to_string()).unwrap();
    assert!(r.summary.contains("• email: string (patterns: email)\n"));
}

#[test]
fn test_summary_plain_when_nothing_to_say() {
    let rows: Vec<Value> = (0..25).map(|i| json!({"name": format!("user {i}")})).collect();
    let r = analyze(&Value::Array(rows).to_string()).unwrap();
    assert!(r.summary.contains("• name: string\n"));
}

#[test]
fn test_summary_required_capped_at_ten() {
    let obj: serde_json::Map<String, Value> = (0..12).map(|i| (format!("f{i}"), json!(i))).collect();
    let r = analyze(&Value::Object(obj).to_string()).unwrap();
    assert!(r.summary.contains("Required fields (12):"));
    assert_eq!(r.summary.matches('•').count(), 10);
    assert!(!r.summary.contains("more"));
}

#[test]
fn test_summary_optional_more_suffix() {
    let wide: serde_json::Map<String, Value> = (0..8).map(|i| (format!("k{i}"), json!(i))).collect();
    let rows = json!([Value::Object(wide), {}, {}, {}]);
    let r = analyze(&rows.to_string()).unwrap();
    assert!(r.summary.contains("Optional fields (8):"));
    assert!(r.summary.contains("(25% present)"));
    assert_eq!(r.summary.matches('•').count(), 5);
    assert!(r.summary.ends_with("... and 3 more optional fields\n"));
}

#[test]
fn test_summary_value_array_range() {
    let nums: Vec<Value> = (1..=30).map(|i| json!(i)).collect();
    let r = analyze(&Value::Array(nums).to_string()).unwrap();
    assert_eq!(r.summary, "Array of number values\nRange: 1 to 30");
}

#[test]
fn test_summary_value_array_enumerated() {
    let r = analyze("[1.5, 2.5, 1.5]").unwrap();
    assert_eq!(r.summary, "Array of number values\nPossible values: 1.5, 2.5");
}

#[test]
fn test_summary_float_and_integer_collapse() {
    let r = analyze("[1, 1.0, 2]").unwrap();
    assert_eq!(r.summary, "Array of number values\nPossible values: 1, 2");
    let r = analyze("[3.0, 3]").unwrap();
    assert_eq!(r.summary, "Array of number values\nPossible values: 3");
}

#[test]
fn test_summary_presence_rounds_half_up() {
    let rows = json!([{"a": 1, "rare": true}, {"a": 2}, {"a": 3}, {"a": 4}, {"a": 5}, {"a": 6}, {"a": 7}, {"a": 8}]);
    let r = analyze(&rows.to_string()).unwrap();
    assert!(r.summary.contains("• rare: boolean (13% present)"));
    assert!(!r.summary.contains("12% present"));
}

#[test]
fn test_summary_primitive() {
    assert_eq!(analyze("42").unwrap().summary, "number value\nPossible values: 42");
    assert_eq!(analyze("null").unwrap().summary, "null value\nPossible values: null");
}

#[test]
fn test_summary_empty_array() {
    assert_eq!(analyze("[]").unwrap().summary, "Array (empty)");
}

// ========== Entry point ==========

#[test]
fn test_analyze_invalid_json() {
    let err = analyze("{\"a\": }").unwrap_err();
    assert!(matches!(err, SlimError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid JSON: "));
}

#[test]
fn test_analyze_sizes() {
    let rows: Vec<Value> = (0..200).map(|i| json!({"id": i, "kind": "event"})).collect();
    let text = Value::Array(rows).to_string();
    let r = analyze(&text).unwrap();
    assert_eq!(r.original, text);
    assert_eq!(r.schema_size, ps_core::estimate_size(&r.summary));
    assert!(r.reduction_ratio > 0.5);
}

#[test]
fn test_schema_serializes_tagged() {
    let r = analyze(r#"{"when":"2024-01-01"}"#).unwrap();
    let v = serde_json::to_value(&r.schema).unwrap();
    assert_eq!(v["type"], "object");
    assert_eq!(v["fields"][0]["analysis"]["kind"], "string");
    assert_eq!(v["fields"][0]["analysis"]["patterns"][0], "date");
}
