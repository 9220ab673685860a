//! Developer tasks (schema generation and drift checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// The workspace root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "auditview.config.v1.json",
            generate: || schema_for!(auditview_settings::AuditviewConfigV1),
        },
        SchemaSpec {
            filename: "auditview.summary.v1.json",
            generate: || schema_for!(auditview_types::AuditSummaryPayload),
        },
        SchemaSpec {
            filename: "auditview.trend.v1.json",
            generate: || schema_for!(auditview_types::TrendSummary),
        },
        SchemaSpec {
            filename: "auditview.templates.v1.json",
            generate: || schema_for!(Vec<auditview_types::ComplianceTemplate>),
        },
        SchemaSpec {
            filename: "auditview.assessment.v1.json",
            generate: || schema_for!(auditview_types::ComplianceAssessment),
        },
        SchemaSpec {
            filename: "auditview.export.v1.json",
            generate: || schema_for!(auditview_types::ExportResult),
        },
        SchemaSpec {
            filename: "auditview.error.v1.json",
            generate: || schema_for!(auditview_types::EngineError),
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Fails when any file under schemas/ is missing or differs from generated output.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path).unwrap_or_default();
        if expected != actual {
            stale.push(spec.filename);
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    eprintln!("Schemas missing or out of date:");
    for name in &stale {
        eprintln!("  - {}", name);
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schema_serializes() {
        for spec in schema_specs() {
            let json = serialize_schema(&(spec.generate)()).unwrap();
            assert!(json.ends_with('\n'), "{}", spec.filename);
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(value.is_object(), "{}", spec.filename);
        }
    }

    #[test]
    fn config_schema_rejects_unknown_fields() {
        let schema = serde_json::to_value(schema_for!(auditview_settings::AuditviewConfigV1))
            .unwrap();
        assert_eq!(schema["additionalProperties"], false);
        assert!(schema["properties"]["sort_by"].is_object());
    }
}
