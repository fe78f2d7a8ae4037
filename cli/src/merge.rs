#![deny(missing_docs)]

//! # Merge Command
//!
//! Implements the pipeline: check directory -> load each source -> rewrite
//! references -> merge -> append common schemas -> write once.
//!
//! A declared source file that is absent on disk is skipped with a warning;
//! any other load or parse failure aborts the whole run before the output
//! file is created.

use std::path::{Path, PathBuf};

use apimerge_core::{
    load_source, write_document, AppError, AppResult, ConsolidatedSpec, ServiceConfig,
};

/// Arguments for the merge command.
#[derive(clap::Args, Debug, Clone)]
pub struct MergeArgs {
    /// Directory holding the per-service spec files.
    #[clap(long, default_value = "specs")]
    pub specs_dir: PathBuf,

    /// Output path for the consolidated spec.
    #[clap(long, default_value = "consolidated-openapi.yml")]
    pub output: PathBuf,
}

/// Executes the merge.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `services` - The service table, in fixed processing order.
pub fn execute(args: &MergeArgs, services: &[ServiceConfig]) -> AppResult<()> {
    if !args.specs_dir.is_dir() {
        return Err(AppError::DirectoryNotFound(
            args.specs_dir.display().to_string(),
        ));
    }

    println!("Starting OpenAPI specification merge...");

    let mut consolidated = ConsolidatedSpec::new();

    for service in services {
        let path = args.specs_dir.join(&service.file);

        if !path.exists() {
            eprintln!("Warning: {} not found, skipping...", service.file);
            continue;
        }

        println!(
            "Processing {} service from {}...",
            service.name, service.file
        );

        // 1. Load (a present but malformed file is fatal)
        let source = load_source(&path)
            .map_err(|e| AppError::General(format!("failed to load {}: {}", service.file, e)))?;

        // 2. Rewrite refs, then merge components, paths, and tags
        consolidated.merge_source(source, service);

        println!("Merged {} service", service.name);
    }

    // 3. Shared response envelopes
    consolidated.add_common_schemas();

    // 4. Single write, after all merging work
    println!("Writing consolidated spec to {:?}...", args.output);
    write_document(&args.output, &consolidated)
        .map_err(|e| AppError::General(format!("failed to write output: {}", e)))?;

    print_summary(&consolidated, &args.output);

    Ok(())
}

fn print_summary(spec: &ConsolidatedSpec, output: &Path) {
    println!("Merge completed successfully.");
    println!("  Schemas:    {}", spec.components.schemas.len());
    println!("  Parameters: {}", spec.components.parameters.len());
    println!("  Paths:      {}", spec.paths.len());
    println!("  Tags:       {}", spec.tags.len());
    println!("Output file: {}", output.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use apimerge_core::default_services;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG_YAML: &str = r#"
openapi: 3.0.1
info: { title: Catalog Service, version: 1.0.0 }
tags:
  - name: Items
    description: Item management
paths:
  /categories:
    get:
      parameters:
        - $ref: '#/components/parameters/PageSize'
      responses:
        '200':
          description: OK
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Item'
components:
  securitySchemes:
    ServiceAuth: { type: http, scheme: basic }
  schemas:
    Item: { type: object }
  parameters:
    PageSize: { name: page_size, in: query }
"#;

    const ORDER_YAML: &str = r#"
openapi: 3.0.1
info: { title: Order Service, version: 1.0.0 }
tags:
  - name: Orders
paths:
  /orders:
    get:
      responses:
        '200': { description: OK }
components:
  schemas:
    Order: { type: object }
"#;

    const USER_PROFILE_YAML: &str = r#"
openapi: 3.0.1
info: { title: User Profile Service, version: 1.0.0 }
tags:
  - name: Customers
paths:
  /customers:
    get:
      responses:
        '200': { description: OK }
components:
  schemas:
    Customer: { type: object }
"#;

    fn write_specs(dir: &Path, files: &[(&str, &str)]) {
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
    }

    fn read_output(path: &Path) -> Value {
        serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_execute_merges_three_services() {
        let dir = tempdir().unwrap();
        let specs_dir = dir.path().join("specs");
        fs::create_dir(&specs_dir).unwrap();
        write_specs(
            &specs_dir,
            &[
                ("catalog.yml", CATALOG_YAML),
                ("order.yml", ORDER_YAML),
                ("user_profile.yml", USER_PROFILE_YAML),
            ],
        );

        let args = MergeArgs {
            specs_dir,
            output: dir.path().join("consolidated-openapi.yml"),
        };
        execute(&args, &default_services()).unwrap();

        let out = read_output(&args.output);
        let schemas = &out["components"]["schemas"];
        for name in [
            "Catalog_Item",
            "Order_Order",
            "UserProfile_Customer",
            "SuccessResponse",
            "ErrorResponse",
        ] {
            assert!(schemas.get(name).is_some(), "missing schema {}", name);
        }

        for path in ["/catalog/v1/categories", "/order/v1/orders", "/profile/v1/customers"] {
            assert!(out["paths"].get(path).is_some(), "missing path {}", path);
        }

        assert_eq!(out["tags"][0]["name"], "Catalog - Items");
        assert_eq!(out["tags"][1]["name"], "Order - Orders");
        assert_eq!(out["tags"][2]["name"], "UserProfile - Customers");

        // References inside the merged route tree are namespace-qualified.
        let get = &out["paths"]["/catalog/v1/categories"]["get"];
        assert_eq!(
            get["parameters"][0]["$ref"],
            "#/components/parameters/Catalog_PageSize"
        );
        assert_eq!(
            get["responses"]["200"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/Catalog_Item"
        );

        // Source security schemes merge next to the scaffolded ones.
        assert!(out["components"]["securitySchemes"].get("BearerAuth").is_some());
        assert!(out["components"]["securitySchemes"].get("ServiceAuth").is_some());
    }

    #[test]
    fn test_execute_skips_missing_source() {
        let dir = tempdir().unwrap();
        let specs_dir = dir.path().join("specs");
        fs::create_dir(&specs_dir).unwrap();
        write_specs(
            &specs_dir,
            &[
                ("catalog.yml", CATALOG_YAML),
                ("user_profile.yml", USER_PROFILE_YAML),
            ],
        );

        let args = MergeArgs {
            specs_dir,
            output: dir.path().join("consolidated-openapi.yml"),
        };
        execute(&args, &default_services()).unwrap();

        let out = read_output(&args.output);
        assert!(out["components"]["schemas"].get("Catalog_Item").is_some());
        // No trace of the missing service.
        assert!(out["components"]["schemas"].get("Order_Order").is_none());
        assert!(out["paths"].get("/order/v1/orders").is_none());
        // The envelopes are present regardless.
        assert!(out["components"]["schemas"].get("SuccessResponse").is_some());
    }

    #[test]
    fn test_execute_zero_sources_still_writes_envelopes() {
        let dir = tempdir().unwrap();
        let specs_dir = dir.path().join("specs");
        fs::create_dir(&specs_dir).unwrap();

        let args = MergeArgs {
            specs_dir,
            output: dir.path().join("consolidated-openapi.yml"),
        };
        execute(&args, &default_services()).unwrap();

        let out = read_output(&args.output);
        assert!(out["components"]["schemas"].get("SuccessResponse").is_some());
        assert!(out["components"]["schemas"].get("ErrorResponse").is_some());
        // Empty route table and tag list are omitted entirely.
        assert!(out.get("paths").is_none());
        assert!(out.get("tags").is_none());
    }

    #[test]
    fn test_execute_missing_specs_dir() {
        let dir = tempdir().unwrap();
        let args = MergeArgs {
            specs_dir: dir.path().join("no-such-dir"),
            output: dir.path().join("consolidated-openapi.yml"),
        };

        let err = execute(&args, &default_services()).unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound(_)));
        assert!(!args.output.exists());
    }

    #[test]
    fn test_execute_malformed_source_aborts_without_output() {
        let dir = tempdir().unwrap();
        let specs_dir = dir.path().join("specs");
        fs::create_dir(&specs_dir).unwrap();
        write_specs(
            &specs_dir,
            &[
                ("catalog.yml", CATALOG_YAML),
                ("order.yml", "paths: [unterminated"),
            ],
        );

        let args = MergeArgs {
            specs_dir,
            output: dir.path().join("consolidated-openapi.yml"),
        };

        let err = execute(&args, &default_services()).unwrap_err();
        assert!(format!("{}", err).contains("failed to load order.yml"));
        // No partial output is ever written.
        assert!(!args.output.exists());
    }

    #[test]
    fn test_execute_repeat_runs_byte_identical() {
        let dir = tempdir().unwrap();
        let specs_dir = dir.path().join("specs");
        fs::create_dir(&specs_dir).unwrap();
        write_specs(
            &specs_dir,
            &[("catalog.yml", CATALOG_YAML), ("order.yml", ORDER_YAML)],
        );

        let args = MergeArgs {
            specs_dir,
            output: dir.path().join("consolidated-openapi.yml"),
        };
        execute(&args, &default_services()).unwrap();
        let first = fs::read_to_string(&args.output).unwrap();
        execute(&args, &default_services()).unwrap();
        let second = fs::read_to_string(&args.output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_execute_with_synthetic_service_table() {
        let dir = tempdir().unwrap();
        let specs_dir = dir.path().join("specs");
        fs::create_dir(&specs_dir).unwrap();
        write_specs(&specs_dir, &[("billing.yml", ORDER_YAML)]);

        let services = vec![ServiceConfig::new("billing.yml", "Billing", "billing")];
        let args = MergeArgs {
            specs_dir,
            output: dir.path().join("consolidated-openapi.yml"),
        };
        execute(&args, &services).unwrap();

        let out = read_output(&args.output);
        assert!(out["components"]["schemas"].get("Billing_Order").is_some());
        assert!(out["paths"].get("/billing/v1/orders").is_some());
    }
}
