//! Same-document component pointer rewriting

const SCHEMA_PREFIX: &str = "#/components/schemas/";
const PARAMETER_PREFIX: &str = "#/components/parameters/";

/// Suffix appended to parameter component names so they cannot shadow schema
/// models of the same name.
pub const PARAMETER_MODEL_SUFFIX: &str = "Parameter";

/// Rewrite a component pointer to its flat model name.
///
/// Only same-document schema and parameter pointers are rewritten; any other
/// pointer form (external files, other component kinds) passes through
/// untouched.
pub fn resolve_ref(reference: &str) -> String {
    if let Some(name) = reference.strip_prefix(SCHEMA_PREFIX) {
        name.to_string()
    } else if let Some(name) = reference.strip_prefix(PARAMETER_PREFIX) {
        format!("{name}{PARAMETER_MODEL_SUFFIX}")
    } else {
        reference.to_string()
    }
}
