#![deny(missing_docs)]

//! # Reference Rewriting
//!
//! Recursive rewriting of internal `$ref` pointers so every reusable schema
//! and parameter reference carries its source document's namespace prefix.
//!
//! Only references into the schema and parameter component areas are
//! rewritten. References to any other area (responses, examples, links) and
//! external references pass through unchanged; after merge such a pointer may
//! dangle, which is accepted rather than defended against.

use serde_json::Value;

/// Reference root of the reusable-schema area.
pub const SCHEMA_REF_ROOT: &str = "#/components/schemas/";

/// Reference root of the reusable-parameter area.
pub const PARAMETER_REF_ROOT: &str = "#/components/parameters/";

/// Rewrites every schema and parameter `$ref` under `node` to its
/// namespace-qualified form, in place.
///
/// Traversal handles the three node shapes: keyed mapping, ordered sequence,
/// and scalar leaf (no-op). Non-string `$ref` values are left untouched.
pub fn rewrite_refs(node: &mut Value, namespace: &str) {
    match node {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                if key == "$ref" {
                    if let Value::String(target) = value {
                        *target = qualify_ref(target, namespace);
                    }
                } else {
                    rewrite_refs(value, namespace);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_refs(item, namespace);
            }
        }
        _ => {}
    }
}

/// Inserts the namespace between the area root and the definition name, or
/// returns the target unchanged if it points outside the rewritten areas.
fn qualify_ref(target: &str, namespace: &str) -> String {
    if let Some(name) = target.strip_prefix(SCHEMA_REF_ROOT) {
        format!("{}{}_{}", SCHEMA_REF_ROOT, namespace, name)
    } else if let Some(name) = target.strip_prefix(PARAMETER_REF_ROOT) {
        format!("{}{}_{}", PARAMETER_REF_ROOT, namespace, name)
    } else {
        target.to_string()
    }
}
