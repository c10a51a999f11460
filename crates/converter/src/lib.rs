//! OpenAPI 3.x to Guzzle service descriptor conversion
//!
//! This crate transforms a parsed OpenAPI document (a generic JSON tree)
//! into the flattened service descriptor consumed by Guzzle-style HTTP
//! clients: top-level attributes, one operation per path and method, and one
//! model per component schema or parameter.
//!
//! ## Pipeline
//!
//! Validation, reference resolution, recursive schema normalization,
//! operation-identifier synthesis with collision avoidance, and
//! parameter/response classification run as one synchronous pass over the
//! immutable input tree. The only mutable state is the per-run
//! [`ConvertContext`] registry, which owns the shared operation/model
//! namespace.
//!
//! ## Usage
//! ```rust,ignore
//! use guzzle_describer_converter::DescriptorBuilder;
//!
//! let document: serde_json::Value = serde_json::from_str(&content)?;
//! let conversion = DescriptorBuilder::new(document).build()?;
//! ```

mod context;
mod models;
mod normalize;
mod operation_id;
mod operations;
mod refs;
mod toplevel;
mod validate;

pub use context::DEFAULT_RESPONSE_MODEL;
pub use normalize::normalize_schema;
pub use refs::resolve_ref;

use context::ConvertContext;
use guzzle_describer_common::{Diagnostic, Result, ServiceDescriptor};
use serde_json::Value;

/// Assembles a [`ServiceDescriptor`] from a parsed OpenAPI document.
pub struct DescriptorBuilder {
    document: Value,
    base_url_override: Option<String>,
}

/// A finished conversion: the descriptor plus every diagnostic the pipeline
/// recorded along the way.
#[derive(Debug)]
pub struct Conversion {
    pub descriptor: ServiceDescriptor,
    pub diagnostics: Vec<Diagnostic>,
}

impl DescriptorBuilder {
    pub fn new(document: Value) -> Self {
        Self {
            document,
            base_url_override: None,
        }
    }

    /// Replace the document-derived base URL unconditionally.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url_override = Some(base_url.to_string());
        self
    }

    /// Run the pipeline: validate, then extract top-level attributes,
    /// operations, and models into the final descriptor.
    pub fn build(self) -> Result<Conversion> {
        let mut ctx = ConvertContext::new();

        validate::validate_document(&self.document, &mut ctx)?;

        let attributes =
            toplevel::extract_top_level(&self.document, self.base_url_override.as_deref());
        operations::extract_operations(&self.document, &attributes.base_path, &mut ctx);
        models::extract_models(&self.document, &mut ctx);

        let descriptor = ServiceDescriptor {
            name: attributes.name,
            api_version: attributes.api_version,
            base_url: attributes.base_url,
            base_path: attributes.base_path,
            description: attributes.description,
            operations: ctx.operations,
            models: ctx.models,
        };

        Ok(Conversion {
            descriptor,
            diagnostics: ctx.diagnostics,
        })
    }
}
