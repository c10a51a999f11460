//! Per-run registry threaded through the pipeline stages

use guzzle_describer_common::{Diagnostic, Operation};
use indexmap::IndexMap;
use serde_json::{json, Value};

/// Sentinel model assigned to operations whose 200 response carries no
/// component reference.
pub const DEFAULT_RESPONSE_MODEL: &str = "getResponse";

/// Mutable state accumulated over one conversion run.
///
/// Operations and models share a single identifier namespace: a name reserved
/// as a model placeholder blocks reuse as an operation id and vice versa.
/// This cross-namespace uniqueness is an invariant of the descriptor format.
#[derive(Debug)]
pub struct ConvertContext {
    pub(crate) operations: IndexMap<String, Operation>,
    pub(crate) models: IndexMap<String, Value>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl ConvertContext {
    pub fn new() -> Self {
        let mut models = IndexMap::new();
        // Pass-through model used when a 200 response has no $ref content.
        models.insert(
            DEFAULT_RESPONSE_MODEL.to_string(),
            json!({ "additionalProperties": { "location": "json" } }),
        );

        Self {
            operations: IndexMap::new(),
            models,
            diagnostics: Vec::new(),
        }
    }

    /// True when `name` is already claimed by an operation or a model.
    pub fn name_taken(&self, name: &str) -> bool {
        self.operations.contains_key(name) || self.models.contains_key(name)
    }

    /// Reserve `name` with an empty placeholder model so later collision
    /// checks see it.
    pub fn reserve_model_name(&mut self, name: &str) {
        self.models.insert(name.to_string(), json!({}));
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl Default for ConvertContext {
    fn default() -> Self {
        Self::new()
    }
}
