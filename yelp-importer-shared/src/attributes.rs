//! Flattening of the nested attribute structure carried by business records.
//!
//! A business record's `attributes` field is a JSON map whose values may be
//! nested maps, booleans, numbers, or strings. The schema stores one flat
//! (name, value) row per leaf, so nested names are joined with `.`.
use serde_json::{Map, Value};

/// Flattens one record's raw attribute map into (name, value) pairs.
///
/// Nested maps contribute their leaves under dotted names
/// (`BusinessParking.garage`). String leaves keep their raw text; every
/// other leaf is rendered in its JSON text form.
pub fn flatten(attributes: &Map<String, Value>) -> Vec<(String, String)> {
    let mut flat = Vec::new();
    for (name, value) in attributes {
        push_leaves(name.clone(), value, &mut flat);
    }
    flat
}

fn push_leaves(name: String, value: &Value, flat: &mut Vec<(String, String)>) {
    match value {
        Value::Object(nested) => {
            for (key, nested_value) in nested {
                push_leaves(format!("{name}.{key}"), nested_value, flat);
            }
        }
        Value::String(text) => flat.push((name, text.clone())),
        other => flat.push((name, other.to_string())),
    }
}
