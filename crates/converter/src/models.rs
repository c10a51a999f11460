//! Model extraction from component schemas and parameters

use crate::context::ConvertContext;
use crate::normalize::normalize_schema;
use crate::refs::PARAMETER_MODEL_SUFFIX;
use serde_json::{json, Value};

/// Component kinds converted to models, in extraction order. Parameter
/// components get a name suffix so they live alongside schema models.
const COMPONENT_KINDS: [(&str, &str); 2] = [("schemas", ""), ("parameters", PARAMETER_MODEL_SUFFIX)];

/// Register one model per component schema and parameter.
pub fn extract_models(document: &Value, ctx: &mut ConvertContext) {
    for (kind, suffix) in COMPONENT_KINDS {
        let Some(section) = document
            .pointer(&format!("/components/{kind}"))
            .and_then(Value::as_object)
        else {
            continue;
        };

        for (ref_name, raw_node) in section {
            let model_name = format!("{ref_name}{suffix}");
            ctx.models.insert(model_name, convert_model(raw_node));
        }
    }
}

/// Normalize a component node and shape it as a model.
///
/// Every mapping-valued field is normalized first. Nodes carrying both
/// `type` and `properties` become the canonical `{type, properties,
/// location}` triple (location defaulting to `json`); anything else (enums,
/// ref-only parameter components) passes through normalized but otherwise
/// unchanged.
fn convert_model(raw_node: &Value) -> Value {
    let node = match raw_node.as_object() {
        Some(map) => {
            let mut out = map.clone();
            for value in out.values_mut() {
                if value.is_object() {
                    *value = normalize_schema(value);
                }
            }
            Value::Object(out)
        }
        None => raw_node.clone(),
    };

    match (node.get("type"), node.get("properties")) {
        (Some(model_type), Some(properties)) => {
            let location = node.get("location").and_then(Value::as_str).unwrap_or("json");
            json!({
                "type": model_type,
                "properties": properties,
                "location": location,
            })
        }
        _ => node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_schema_becomes_a_canonical_model() {
        let mut ctx = ConvertContext::new();
        let document = json!({
            "components": {
                "schemas": {
                    "Pet": {
                        "type": "object",
                        "required": ["name"],
                        "properties": {
                            "name": { "type": "string", "example": "doggie" },
                            "tags": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Tag" }
                            }
                        }
                    }
                }
            }
        });

        extract_models(&document, &mut ctx);

        assert_eq!(
            ctx.models["Pet"],
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "tags": { "type": "array", "items": { "$ref": "Tag" } }
                },
                "location": "json"
            })
        );
    }

    #[test]
    fn test_enum_schema_passes_through_normalized() {
        let mut ctx = ConvertContext::new();
        let document = json!({
            "components": {
                "schemas": {
                    "Status": {
                        "type": "string",
                        "format": "enum",
                        "enum": ["available", "pending", "sold"]
                    }
                }
            }
        });

        extract_models(&document, &mut ctx);

        // No properties, so no {type, properties, location} wrapping; the
        // format key survives because only mapping-valued fields are
        // normalized.
        assert_eq!(
            ctx.models["Status"],
            json!({
                "type": "string",
                "format": "enum",
                "enum": ["available", "pending", "sold"]
            })
        );
    }

    #[test]
    fn test_parameter_components_get_the_suffix() {
        let mut ctx = ConvertContext::new();
        let document = json!({
            "components": {
                "schemas": { "Pet": { "type": "object" } },
                "parameters": {
                    "PageSize": {
                        "name": "pageSize",
                        "in": "query",
                        "schema": { "type": "integer", "format": "int32" }
                    }
                }
            }
        });

        extract_models(&document, &mut ctx);

        assert_eq!(
            ctx.models["PageSizeParameter"],
            json!({
                "name": "pageSize",
                "in": "query",
                "schema": { "type": "integer" }
            })
        );
    }

    #[test]
    fn test_explicit_location_is_kept() {
        let mut ctx = ConvertContext::new();
        let document = json!({
            "components": {
                "schemas": {
                    "Envelope": {
                        "type": "object",
                        "location": "xml",
                        "properties": { "body": { "type": "string" } }
                    }
                }
            }
        });

        extract_models(&document, &mut ctx);

        assert_eq!(ctx.models["Envelope"]["location"], "xml");
    }
}
