//! Common types and utilities for the Guzzle service describer
//!
//! This crate contains the shared descriptor data model, the error taxonomy,
//! and the diagnostics types used across the converter and CLI components.

mod descriptor;
mod diagnostics;

pub use descriptor::{ErrorResponse, Operation, Parameter, ServiceDescriptor};
pub use diagnostics::{Diagnostic, Level};

use thiserror::Error;

/// Errors that abort a conversion run
#[derive(Error, Debug)]
pub enum DescriberError {
    #[error("Invalid OpenAPI document: content cannot be parsed")]
    MissingOrUnparsableDocument,

    #[error("Invalid OpenAPI document: incompatible version detected")]
    IncompatibleVersion,

    #[error("Invalid OpenAPI document: missing paths part")]
    MissingPaths,

    #[error("Invalid OpenAPI document: missing components/schemas part")]
    MissingSchemas,

    #[error("Unsupported file extension '{0}': expected yaml or json")]
    UnsupportedExtension(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for describer operations
pub type Result<T> = std::result::Result<T, DescriberError>;
