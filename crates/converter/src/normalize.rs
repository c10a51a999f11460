//! Recursive schema cleanup

use crate::refs::resolve_ref;
use serde_json::{Map, Value};

/// Keys that only affect presentation and never the wire shape.
const PRESENTATION_KEYS: [&str; 3] = ["example", "format", "xml"];

/// Return a cleaned copy of a schema subtree.
///
/// Presentation-only keys are dropped at every level, `$ref` values are
/// rewritten to flat model names, and the transform recurses into every
/// nested mapping and sequence. The input is never mutated; normalizing an
/// already-normalized node is a fixed point.
pub fn normalize_schema(node: &Value) -> Value {
    match node {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, value) in map {
                if PRESENTATION_KEYS.contains(&key.as_str()) {
                    continue;
                }
                if key == "$ref" {
                    if let Some(reference) = value.as_str() {
                        out.insert(key.clone(), Value::String(resolve_ref(reference)));
                        continue;
                    }
                }
                out.insert(key.clone(), normalize_schema(value));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize_schema).collect()),
        scalar => scalar.clone(),
    }
}
