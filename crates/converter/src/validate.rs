//! Structural preconditions on the parsed document tree

use crate::context::ConvertContext;
use guzzle_describer_common::{DescriberError, Diagnostic, Result};
use serde_json::Value;

/// Quick structural check of the OpenAPI document, in order: parsable
/// mapping, version at least 3, non-empty `paths`, non-empty
/// `components.schemas`. All four are fatal. A missing or empty
/// `components.parameters` section only records a comment diagnostic.
pub fn validate_document(document: &Value, ctx: &mut ConvertContext) -> Result<()> {
    let root = match document.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(DescriberError::MissingOrUnparsableDocument),
    };

    let version_ok = root
        .get("openapi")
        .and_then(major_version)
        .is_some_and(|major| major >= 3);
    if !version_ok {
        return Err(DescriberError::IncompatibleVersion);
    }

    let has_paths = root
        .get("paths")
        .and_then(Value::as_object)
        .is_some_and(|paths| !paths.is_empty());
    if !has_paths {
        return Err(DescriberError::MissingPaths);
    }

    let components = root.get("components");

    let has_schemas = components
        .and_then(|c| c.get("schemas"))
        .and_then(Value::as_object)
        .is_some_and(|schemas| !schemas.is_empty());
    if !has_schemas {
        return Err(DescriberError::MissingSchemas);
    }

    let has_parameters = components
        .and_then(|c| c.get("parameters"))
        .and_then(Value::as_object)
        .is_some_and(|parameters| !parameters.is_empty());
    if !has_parameters {
        ctx.record(Diagnostic::comment(
            "OpenAPI document has no components/parameters part, converting schemas only",
        ));
    }

    Ok(())
}

/// Major component of the `openapi` version field, which may be a string
/// ("3.0.1") or a bare number (3.1).
fn major_version(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.split('.').next()?.trim().parse().ok(),
        Value::Number(n) => n.as_f64().map(|v| v.trunc() as u64),
        _ => None,
    }
}
