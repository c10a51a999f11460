//! Operation extraction, one per path and method

use crate::context::{ConvertContext, DEFAULT_RESPONSE_MODEL};
use crate::operation_id::generate_operation_id;
use crate::refs::resolve_ref;
use guzzle_describer_common::{Diagnostic, ErrorResponse, Operation, Parameter};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// HTTP method keys recognized inside a path item. Other path-item keys
/// (`summary`, path-level `parameters`) never produce operations.
const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Walk `paths` and register one operation per path and method in document
/// order. Generated ids and parameter warnings are recorded on the context.
pub fn extract_operations(document: &Value, base_path: &str, ctx: &mut ConvertContext) {
    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return;
    };

    for (path, path_item) in paths {
        let Some(path_item) = path_item.as_object() else {
            continue;
        };

        for (method, operation_node) in path_item {
            let method_key = method.to_lowercase();
            if !HTTP_METHODS.contains(&method_key.as_str()) {
                continue;
            }
            let Some(operation_node) = operation_node.as_object() else {
                continue;
            };

            let operation_id = match operation_node.get("operationId").and_then(Value::as_str) {
                Some(id) => id.to_string(),
                None => generate_operation_id(method, path, ctx),
            };

            let parameters = extract_parameters(operation_node, &operation_id, method, path, ctx);
            let (response_model, error_responses) = extract_responses(operation_node);
            let summary = operation_node
                .get("summary")
                .and_then(Value::as_str)
                .map(String::from);

            let operation = Operation {
                name: operation_id.clone(),
                http_method: method.to_uppercase(),
                uri: join_uri(base_path, path),
                response_model,
                notes: summary.clone(),
                summary,
                documentation_url: None,
                deprecated: false,
                parameters,
                error_responses,
            };

            ctx.operations.insert(operation_id, operation);
        }
    }
}

/// Declared parameters plus the synthesized request-body entry.
fn extract_parameters(
    operation_node: &Map<String, Value>,
    operation_id: &str,
    method: &str,
    path: &str,
    ctx: &mut ConvertContext,
) -> IndexMap<String, Parameter> {
    let mut parameters = IndexMap::new();

    if let Some(declared) = operation_node.get("parameters").and_then(Value::as_array) {
        for parameter in declared {
            if let Some(reference) = parameter.get("$ref").and_then(Value::as_str) {
                // Component-referenced parameters collapse into a single
                // slot keyed by the operation id; the last declaration wins.
                parameters.insert(
                    operation_id.to_string(),
                    Parameter::Reference {
                        reference: resolve_ref(reference),
                        location: None,
                    },
                );
                continue;
            }

            let Some(parameter_type) = parameter.pointer("/schema/type").and_then(Value::as_str)
            else {
                ctx.record(Diagnostic::error(format!(
                    "Missing schema type {method} {path}"
                )));
                continue;
            };

            let name = parameter
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let location = if parameter.get("in").and_then(Value::as_str) == Some("path") {
                "uri"
            } else {
                "query"
            };

            parameters.insert(
                name,
                Parameter::Typed {
                    parameter_type: parameter_type.to_string(),
                    location: location.to_string(),
                    description: parameter
                        .get("description")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    required: parameter
                        .get("required")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                },
            );
        }
    }

    if let Some(content) = operation_node
        .get("requestBody")
        .and_then(|body| body.get("content"))
        .and_then(Value::as_object)
    {
        for (media_type, media) in content {
            let location = match media_type.as_str() {
                "application/json" => "json",
                "application/xml" => "xml",
                _ => "body",
            };
            if let Some(reference) = media.pointer("/schema/$ref").and_then(Value::as_str) {
                parameters.insert(
                    "$ref".to_string(),
                    Parameter::Reference {
                        reference: resolve_ref(reference),
                        location: Some(location.to_string()),
                    },
                );
                break;
            }
        }
    }

    parameters
}

/// Collect every status of 400 or above into the error set and take the
/// first `$ref` found in the 200 content as the response model.
fn extract_responses(operation_node: &Map<String, Value>) -> (String, Vec<ErrorResponse>) {
    let mut error_responses = Vec::new();
    let mut response_model = None;

    if let Some(responses) = operation_node.get("responses").and_then(Value::as_object) {
        for (code, response) in responses {
            if let Ok(code) = code.parse::<i64>() {
                if code >= 400 {
                    error_responses.push(ErrorResponse {
                        code,
                        description: response
                            .get("description")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    });
                }
            }
        }

        if let Some(content) = responses
            .get("200")
            .and_then(|r| r.get("content"))
            .and_then(Value::as_object)
        {
            for media in content.values() {
                if let Some(reference) = media.pointer("/schema/$ref").and_then(Value::as_str) {
                    response_model = Some(resolve_ref(reference));
                    break;
                }
            }
        }
    }

    (
        response_model.unwrap_or_else(|| DEFAULT_RESPONSE_MODEL.to_string()),
        error_responses,
    )
}

/// Prefix the path template with the base path, collapsing the joint to a
/// single slash.
fn join_uri(base_path: &str, path: &str) -> String {
    if base_path.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_path.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_uri_normalizes_the_separator() {
        assert_eq!(join_uri("", "/pets/{id}"), "/pets/{id}");
        assert_eq!(join_uri("/v1", "/pets"), "/v1/pets");
        assert_eq!(join_uri("/v1/", "/pets"), "/v1/pets");
        assert_eq!(join_uri("/v1", "pets"), "/v1/pets");
    }

    #[test]
    fn test_parameter_without_schema_type_is_skipped_with_a_warning() {
        let mut ctx = ConvertContext::new();
        let document = json!({
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "listPets",
                        "parameters": [ { "name": "limit", "in": "query" } ]
                    }
                }
            }
        });

        extract_operations(&document, "", &mut ctx);

        let operation = &ctx.operations["listPets"];
        assert!(operation.parameters.is_empty());
        assert_eq!(ctx.diagnostics.len(), 1);
        assert!(ctx.diagnostics[0].message.contains("Missing schema type"));
    }

    #[test]
    fn test_non_method_path_item_keys_are_ignored() {
        let mut ctx = ConvertContext::new();
        let document = json!({
            "paths": {
                "/pets": {
                    "summary": "Everything about pets",
                    "get": { "operationId": "listPets" }
                }
            }
        });

        extract_operations(&document, "", &mut ctx);

        assert_eq!(ctx.operations.len(), 1);
        assert_eq!(ctx.operations["listPets"].http_method, "GET");
    }

    #[test]
    fn test_referenced_parameters_share_one_slot() {
        let mut ctx = ConvertContext::new();
        let document = json!({
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "listPets",
                        "parameters": [
                            { "$ref": "#/components/parameters/PageSize" },
                            { "$ref": "#/components/parameters/PageToken" }
                        ]
                    }
                }
            }
        });

        extract_operations(&document, "", &mut ctx);

        let operation = &ctx.operations["listPets"];
        assert_eq!(operation.parameters.len(), 1);
        assert_eq!(
            operation.parameters["listPets"],
            Parameter::Reference {
                reference: "PageTokenParameter".to_string(),
                location: None,
            }
        );
    }
}
