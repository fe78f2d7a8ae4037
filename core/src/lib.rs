#![deny(missing_docs)]

//! # Apimerge Core
//!
//! Core library for consolidating per-service OpenAPI documents into a
//! single specification.
//!
//! - **config**: the static service table (file / namespace / route prefix).
//! - **document**: YAML loading and serialization.
//! - **refs**: recursive `$ref` rewriting.
//! - **model**: the consolidated document structure and its scaffolding.
//! - **merge**: folding one source document at a time into the output.

/// Shared error types.
pub mod error;

/// Static service configuration.
pub mod config;

/// Document loading and serialization.
pub mod document;

/// Internal reference rewriting.
pub mod refs;

/// Consolidated document model.
pub mod model;

/// Merge operations.
pub mod merge;

pub use config::{default_services, ServiceConfig};
pub use document::{load_source, to_yaml, write_document};
pub use error::{AppError, AppResult};
pub use model::{Components, ConsolidatedSpec};
pub use refs::rewrite_refs;
