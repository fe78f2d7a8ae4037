#![deny(missing_docs)]

//! # Service Configuration
//!
//! The static table mapping each source document to its namespace prefix and
//! route prefix. The table is passed into the merge pipeline explicitly so
//! the merge logic stays testable with synthetic sources.

/// Configuration for one service document to merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// File name of the source document inside the specs directory.
    pub file: String,
    /// Namespace prefix applied to reusable definition names and their
    /// `$ref` targets.
    pub name: String,
    /// Path segment prepended to every route contributed by this source.
    pub prefix: String,
}

impl ServiceConfig {
    /// Creates a new service entry.
    pub fn new(file: &str, name: &str, prefix: &str) -> Self {
        Self {
            file: file.to_string(),
            name: name.to_string(),
            prefix: prefix.to_string(),
        }
    }
}

/// Returns the production service table.
///
/// The order of this table is the fixed processing order; it decides which
/// definition wins when two sources declare the same security scheme name.
pub fn default_services() -> Vec<ServiceConfig> {
    vec![
        ServiceConfig::new("catalog.yml", "Catalog", "catalog"),
        ServiceConfig::new("order.yml", "Order", "order"),
        ServiceConfig::new("user_profile.yml", "UserProfile", "profile"),
    ]
}
