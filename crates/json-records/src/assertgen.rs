//! Assertion statement generation from decoded records.

use serde_json::Value;

use crate::types::{DecodedCollection, DecodedRecord};

/// Generates JUnit-style assertion statements from decoded JSON.
///
/// Every scalar leaf yields one statement naming its access path from a
/// `result` root: nested records extend the path with `.key`, sequence
/// elements with `.get(index)`. Explicit nulls become `assertNull`,
/// booleans `assertTrue`/`assertFalse`, everything else `assertEquals`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssertionGenerator;

impl AssertionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates assertions for a single decoded record, rooted at `result`.
    pub fn generate_record(&self, record: &DecodedRecord) -> String {
        let mut out = String::new();
        walk_record(record, "result", &mut out);
        out
    }

    /// Generates assertions for a decoded collection, rooting element
    /// `index` at `result.get(index)`.
    pub fn generate_collection(&self, records: &DecodedCollection) -> String {
        let mut out = String::new();
        for (index, record) in records.iter().enumerate() {
            walk_record(record, &format!("result.get({index})"), &mut out);
        }
        out
    }
}

fn walk_record(record: &DecodedRecord, path: &str, out: &mut String) {
    for (key, value) in record {
        walk_value(value, &format!("{path}.{key}"), out);
    }
}

fn walk_value(value: &Value, path: &str, out: &mut String) {
    match value {
        Value::Object(record) => walk_record(record, path, out),
        Value::Array(elements) => {
            for (index, element) in elements.iter().enumerate() {
                walk_value(element, &format!("{path}.get({index})"), out);
            }
        }
        scalar => push_assertion(scalar, path, out),
    }
}

fn push_assertion(value: &Value, path: &str, out: &mut String) {
    let statement = match value {
        Value::Null => format!("assertNull({path});"),
        Value::Bool(true) => format!("assertTrue({path});"),
        Value::Bool(false) => format!("assertFalse({path});"),
        other => format!("assertEquals({}, {path});", value_literal(other)),
    };
    out.push_str(&statement);
    out.push('\n');
}

/// Renders a scalar as an assertion-argument literal.
///
/// All-digit strings are emitted bare, other strings quoted. Non-integral
/// numbers keep only their integer part.
fn value_literal(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                s.clone()
            } else {
                format!("\"{s}\"")
            }
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else if let Some(f) = n.as_f64() {
                (f.trunc() as i64).to_string()
            } else {
                n.to_string()
            }
        }
        other => other.to_string(),
    }
}
