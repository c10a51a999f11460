//! Guzzle service describer CLI
//!
//! Command-line interface converting an OpenAPI 3.x document (YAML or JSON)
//! into the Guzzle service describer JSON consumed by generic HTTP-client
//! generators.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use guzzle_describer_common::{DescriberError, Diagnostic, Level};
use guzzle_describer_converter::DescriptorBuilder;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Output file written to the current working directory.
const OUTPUT_FILE: &str = "guzzle_service.json";

#[derive(Parser)]
#[command(name = "guzzle-describer")]
#[command(version, about = "Convert an openapi.yaml|json file to a Guzzle service describer", long_about = None)]
struct Cli {
    /// Path of the openapi file
    path: PathBuf,

    /// Base URL overriding the document's first server entry
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "{} Parsing OpenAPI document: {}",
        "→".cyan(),
        cli.path.display()
    );

    let document = load_document(&cli.path).context("Failed to load OpenAPI document")?;

    let mut builder = DescriptorBuilder::new(document);
    if let Some(ref base_url) = cli.base_url {
        if cli.verbose {
            println!("  Base URL override: {base_url}");
        }
        builder = builder.with_base_url(base_url);
    }

    let conversion = builder
        .build()
        .context("Failed to convert OpenAPI document")?;

    for diagnostic in &conversion.diagnostics {
        print_diagnostic(diagnostic);
    }

    let output_path = env::current_dir()?.join(OUTPUT_FILE);
    println!(
        "{} Writing guzzle service describer to: {}",
        "→".cyan(),
        output_path.display()
    );

    let serialized = serde_json::to_string(&conversion.descriptor)
        .context("Failed to serialize service describer")?;
    fs::write(&output_path, serialized)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("{}", "✓ Conversion complete!".green().bold());
    if cli.verbose {
        println!("  Operations: {}", conversion.descriptor.operations.len());
        println!("  Models: {}", conversion.descriptor.models.len());
    }

    Ok(())
}

/// Read and parse the document, dispatching on the file extension. Only
/// `.yaml` and `.json` are supported.
fn load_document(path: &Path) -> std::result::Result<serde_json::Value, DescriberError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    match extension {
        "json" => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        "yaml" => {
            let content = fs::read_to_string(path)?;
            let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
            Ok(yaml_to_json(value))
        }
        other => Err(DescriberError::UnsupportedExtension(other.to_string())),
    }
}

/// Bridge a YAML tree into the generic JSON tree the converter consumes.
///
/// YAML mapping keys may be non-strings (response codes written as `200:`);
/// they are stringified so the tree matches what a JSON document would have
/// produced. Keys that have no string form are dropped.
fn yaml_to_json(value: serde_yaml::Value) -> serde_json::Value {
    use serde_json::Value as Json;
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::from(i)
            } else if let Some(u) = n.as_u64() {
                Json::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Json::Number)
                    .unwrap_or(Json::Null)
            }
        }
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(items) => Json::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut out = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Bool(b) => b.to_string(),
                    Yaml::Number(n) => n.to_string(),
                    _ => continue,
                };
                out.insert(key, yaml_to_json(value));
            }
            Json::Object(out)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic.level {
        Level::Info => println!("{} {}", "→".cyan(), diagnostic.message),
        Level::Comment => println!("{} {}", "⚠".yellow(), diagnostic.message),
        Level::Error => eprintln!("{} {}", "✗".red(), diagnostic.message),
    }
}
