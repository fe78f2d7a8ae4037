#![deny(missing_docs)]

//! # Consolidated Document Model
//!
//! Typed top-level structure of the merged OpenAPI document. Only the fixed
//! top-level fields are typed; everything contributed by a source document
//! stays an untyped `serde_json::Value` so arbitrary content survives the
//! round trip.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

/// Reusable definitions of the consolidated document.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Authentication scheme declarations, merged by identity name.
    pub security_schemes: IndexMap<String, Value>,
    /// Schema definitions, keyed by namespace-qualified name.
    pub schemas: IndexMap<String, Value>,
    /// Parameter definitions, keyed by namespace-qualified name.
    pub parameters: IndexMap<String, Value>,
}

/// The single merged output document.
///
/// Field declaration order is the serialization order, so repeated runs over
/// unchanged inputs produce byte-identical output.
#[derive(Debug, Serialize)]
pub struct ConsolidatedSpec {
    /// OpenAPI format version.
    pub openapi: String,
    /// Descriptive metadata (title, description, version, contact).
    pub info: Value,
    /// Server endpoints.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Value>,
    /// Global security requirements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<Value>,
    /// Reusable definitions.
    pub components: Components,
    /// Merged route table, keyed by prefixed path.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, Value>,
    /// Merged taxonomy tag descriptors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Value>,
}

impl ConsolidatedSpec {
    /// Creates the output document scaffolding: fixed metadata, server list,
    /// global security requirements, and the two shared security schemes.
    /// Schemas, parameters, paths, and tags start empty.
    pub fn new() -> Self {
        let mut security_schemes = IndexMap::new();
        security_schemes.insert(
            "BearerAuth".to_string(),
            json!({
                "type": "http",
                "scheme": "bearer",
                "bearerFormat": "JWT",
                "description": "JWT Bearer token authentication",
            }),
        );
        security_schemes.insert(
            "ApiKeyAuth".to_string(),
            json!({
                "type": "apiKey",
                "in": "header",
                "name": "X-API-Key",
                "description": "API Key authentication",
            }),
        );

        Self {
            openapi: "3.0.1".to_string(),
            info: json!({
                "title": "Dhaam Platform API - Consolidated",
                "description": "Unified OpenAPI 3.0 specification for Dhaam Platform.\n\n\
                    This specification consolidates multiple microservices:\n\
                    - **Catalog Service**: Category and item management (products, modifiers, variants, bundles)\n\
                    - **Order Service**: Order and quotation management\n\
                    - **User Profile Service**: User profiles, customers, merchants, stores, locations (regions, geofences, outlets)\n\n\
                    All specifications have been merged into a single file for easier consumption.",
                "version": "2.0.0",
                "contact": {
                    "name": "Dhaam API Support",
                    "email": "support@dhaam.ai",
                },
            }),
            servers: vec![
                json!({
                    "url": "https://api.dhaam.ai",
                    "description": "Production server",
                }),
                json!({
                    "url": "https://staging-api.dhaam.ai",
                    "description": "Staging server",
                }),
                json!({
                    "url": "https://dev-nexus.dhaamai.com/api/v1",
                    "description": "Development server",
                }),
            ],
            security: vec![
                json!({ "BearerAuth": [] }),
                json!({ "ApiKeyAuth": [] }),
            ],
            components: Components {
                security_schemes,
                ..Components::default()
            },
            paths: IndexMap::new(),
            tags: Vec::new(),
        }
    }
}

impl Default for ConsolidatedSpec {
    fn default() -> Self {
        Self::new()
    }
}
