#![deny(missing_docs)]

//! # Merge Operations
//!
//! Folds one source document at a time into the consolidated document:
//! reusable definitions, route table, and taxonomy tags, plus the shared
//! response envelopes added once at the end of a run.

use crate::config::ServiceConfig;
use crate::model::ConsolidatedSpec;
use crate::refs::rewrite_refs;
use serde_json::{json, Map, Value};

impl ConsolidatedSpec {
    /// Merges one source document using the fixed per-source sequence:
    /// rewrite references, then components, paths, and tags.
    pub fn merge_source(&mut self, mut source: Value, service: &ServiceConfig) {
        rewrite_refs(&mut source, &service.name);
        self.merge_components(&source, &service.name);
        self.merge_paths(&source, &service.prefix);
        self.merge_tags(&source, &service.name);
    }

    /// Merges the source's reusable definitions.
    ///
    /// Schemas and parameters are inserted under `{namespace}_{name}`; a
    /// collision on a qualified name overwrites silently (structurally
    /// impossible under distinct namespaces, not defended against).
    /// Security schemes keep their original name and the first-processed
    /// definition wins; later duplicates are dropped.
    pub fn merge_components(&mut self, source: &Value, namespace: &str) {
        let Some(components) = source.get("components").and_then(Value::as_object) else {
            return;
        };

        if let Some(schemas) = components.get("schemas").and_then(Value::as_object) {
            for (name, def) in schemas {
                self.components
                    .schemas
                    .insert(format!("{}_{}", namespace, name), def.clone());
            }
        }

        if let Some(parameters) = components.get("parameters").and_then(Value::as_object) {
            for (name, def) in parameters {
                self.components
                    .parameters
                    .insert(format!("{}_{}", namespace, name), def.clone());
            }
        }

        if let Some(schemes) = components.get("securitySchemes").and_then(Value::as_object) {
            for (name, def) in schemes {
                if !self.components.security_schemes.contains_key(name) {
                    self.components
                        .security_schemes
                        .insert(name.clone(), def.clone());
                }
            }
        }
    }

    /// Merges the source's route table under `/{prefix}/v1{path}`.
    ///
    /// No collision detection: an identical computed path silently
    /// overwrites the earlier entry.
    pub fn merge_paths(&mut self, source: &Value, prefix: &str) {
        let Some(paths) = source.get("paths").and_then(Value::as_object) else {
            return;
        };

        for (path, def) in paths {
            self.paths
                .insert(format!("/{}/v1{}", prefix, path), def.clone());
        }
    }

    /// Appends the source's tags with display names rewritten to
    /// `"{namespace} - {original}"`, carrying the description when present.
    /// Entries without a string `name` are skipped.
    pub fn merge_tags(&mut self, source: &Value, namespace: &str) {
        let Some(tags) = source.get("tags").and_then(Value::as_array) else {
            return;
        };

        for tag in tags {
            let Some(tag) = tag.as_object() else {
                continue;
            };
            let Some(name) = tag.get("name").and_then(Value::as_str) else {
                continue;
            };

            let mut entry = Map::new();
            entry.insert(
                "name".to_string(),
                Value::String(format!("{} - {}", namespace, name)),
            );
            if let Some(description) = tag.get("description") {
                entry.insert("description".to_string(), description.clone());
            }
            self.tags.push(Value::Object(entry));
        }
    }

    /// Inserts the shared success and error response envelopes under their
    /// fixed, non-namespaced names, overwriting any source-contributed
    /// schema that already uses one of them.
    pub fn add_common_schemas(&mut self) {
        self.components.schemas.insert(
            "SuccessResponse".to_string(),
            json!({
                "type": "object",
                "properties": {
                    "success": {
                        "type": "boolean",
                        "example": true,
                    },
                    "data": {
                        "type": "object",
                        "description": "Response payload (varies by endpoint)",
                    },
                    "meta": {
                        "type": "object",
                        "description": "Metadata (pagination, timestamps, etc.)",
                    },
                },
            }),
        );

        self.components.schemas.insert(
            "ErrorResponse".to_string(),
            json!({
                "type": "object",
                "properties": {
                    "success": {
                        "type": "boolean",
                        "example": false,
                    },
                    "error": {
                        "type": "object",
                        "properties": {
                            "code": {
                                "type": "string",
                                "description": "Error code",
                            },
                            "message": {
                                "type": "string",
                                "description": "Human-readable error message",
                            },
                        },
                    },
                },
            }),
        );
    }
}
