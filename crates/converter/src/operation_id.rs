//! Operation identifier synthesis for path items lacking `operationId`

use crate::context::ConvertContext;
use guzzle_describer_common::Diagnostic;

/// Build an identifier from the method and path, avoiding every name already
/// present in the shared operation/model registry.
///
/// Path segments that are empty, purely numeric, or templated are dropped;
/// the rest are title-cased (dashes and underscores are word breaks) and
/// concatenated behind the lowercased method. On collision a numeric suffix
/// starting at 1 is appended and incremented until the name is free.
///
/// The chosen id is immediately reserved as a placeholder model so later
/// generated ids and extracted models see the collision.
pub fn generate_operation_id(http_method: &str, path: &str, ctx: &mut ConvertContext) -> String {
    let mut base = http_method.to_lowercase();
    for segment in path.split('/') {
        if segment.is_empty() || segment.contains('{') || is_numeric(segment) {
            continue;
        }
        base.push_str(&title_case(segment));
    }

    let mut operation_id = base.clone();
    let mut suffix: u64 = 0;
    while ctx.name_taken(&operation_id) {
        suffix += 1;
        operation_id = format!("{base}{suffix}");
    }

    ctx.reserve_model_name(&operation_id);
    ctx.record(Diagnostic::info(format!(
        "Missing operationId for: {http_method} {path} now using operationId {operation_id}"
    )));

    operation_id
}

/// Numeric in the path-segment sense: parses as a finite number. Word-like
/// float spellings (`inf`, `NaN`) are real segments, not numbers.
fn is_numeric(segment: &str) -> bool {
    segment.parse::<f64>().is_ok_and(f64::is_finite)
        && segment.chars().any(|c| c.is_ascii_digit())
}

/// Lowercase a segment, treat dashes and underscores as word breaks, then
/// capitalize each word and join without separators.
fn title_case(segment: &str) -> String {
    let cleaned = segment
        .replace(['{', '}'], "")
        .replace(['-', '_'], " ")
        .to_lowercase();

    let mut out = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
