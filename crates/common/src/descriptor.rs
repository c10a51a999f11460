//! Guzzle service descriptor data model
//!
//! The flattened output document driving a generic HTTP-client generator.
//! Field declaration order fixes the serialized key order, which downstream
//! consumers rely on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The service descriptor: top-level attributes plus the operation and model
/// maps.
///
/// Exactly one of `base_url`/`base_path` is non-empty, depending on whether
/// the document's server URL is absolute or starts with `/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name (`info.title`)
    pub name: String,

    /// API version (`info.version`)
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Absolute base URL, or empty when the document declares a relative server
    #[serde(rename = "baseUrl")]
    pub base_url: String,

    /// Relative base path, or empty when the document declares an absolute server
    #[serde(rename = "basePath")]
    pub base_path: String,

    /// Service description (`info.description`)
    #[serde(rename = "_description")]
    pub description: String,

    /// Operations keyed by operation id
    pub operations: IndexMap<String, Operation>,

    /// Models keyed by model name; values are normalized schema nodes
    pub models: IndexMap<String, Value>,
}

/// One callable endpoint: method and path template with its parameters,
/// response model, and error set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation id, repeated from the map key
    pub name: String,

    /// Uppercased HTTP method
    #[serde(rename = "httpMethod")]
    pub http_method: String,

    /// Path template, prefixed with the base path when one is set
    pub uri: String,

    /// Name of the model describing the 200 response
    #[serde(rename = "responseModel")]
    pub response_model: String,

    /// Copied from the operation summary
    #[serde(default)]
    pub notes: Option<String>,

    /// Operation summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Not derivable from OpenAPI, always null
    #[serde(rename = "documentationUrl")]
    #[serde(default)]
    pub documentation_url: Option<String>,

    /// Not derivable from OpenAPI, always false
    #[serde(default)]
    pub deprecated: bool,

    /// Parameters keyed by name, or by operation id for referenced ones
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    /// Every response with a status code of 400 or above
    #[serde(rename = "errorResponses")]
    #[serde(default)]
    pub error_responses: Vec<ErrorResponse>,
}

/// A single operation parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    /// Component-referenced parameter, or the synthesized request-body entry
    /// (which also carries a location)
    Reference {
        #[serde(rename = "$ref")]
        reference: String,

        #[serde(default)]
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
    },

    /// Inline parameter with an explicit schema type
    Typed {
        #[serde(rename = "type")]
        parameter_type: String,

        /// One of `uri`, `query`, `json`, `xml`, `body`
        location: String,

        #[serde(default)]
        description: String,

        #[serde(default)]
        required: bool,
    },
}

/// Error response entry: status code plus its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_descriptor() -> ServiceDescriptor {
        let mut operations = IndexMap::new();
        operations.insert(
            "getPets".to_string(),
            Operation {
                name: "getPets".to_string(),
                http_method: "GET".to_string(),
                uri: "/pets".to_string(),
                response_model: "Pet".to_string(),
                notes: None,
                summary: None,
                documentation_url: None,
                deprecated: false,
                parameters: IndexMap::new(),
                error_responses: vec![],
            },
        );
        ServiceDescriptor {
            name: "Petstore".to_string(),
            api_version: "1.0.0".to_string(),
            base_url: "https://api.example.com".to_string(),
            base_path: String::new(),
            description: String::new(),
            operations,
            models: IndexMap::new(),
        }
    }

    #[test]
    fn test_descriptor_key_order() {
        let serialized = serde_json::to_string(&minimal_descriptor()).unwrap();
        let keys = ["\"name\"", "\"apiVersion\"", "\"baseUrl\"", "\"basePath\"", "\"_description\"", "\"operations\"", "\"models\""];
        let positions: Vec<usize> = keys.iter().map(|k| serialized.find(k).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_parameter_shapes() {
        let typed = Parameter::Typed {
            parameter_type: "integer".to_string(),
            location: "uri".to_string(),
            description: String::new(),
            required: true,
        };
        assert_eq!(
            serde_json::to_value(&typed).unwrap(),
            json!({ "type": "integer", "location": "uri", "description": "", "required": true })
        );

        let bare_ref = Parameter::Reference {
            reference: "PageSizeParameter".to_string(),
            location: None,
        };
        assert_eq!(
            serde_json::to_value(&bare_ref).unwrap(),
            json!({ "$ref": "PageSizeParameter" })
        );

        let body_ref = Parameter::Reference {
            reference: "Pet".to_string(),
            location: Some("json".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&body_ref).unwrap(),
            json!({ "$ref": "Pet", "location": "json" })
        );
    }

    #[test]
    fn test_parameter_roundtrip_picks_the_right_variant() {
        let value = json!({ "type": "string", "location": "query", "description": "", "required": false });
        let parameter: Parameter = serde_json::from_value(value).unwrap();
        assert!(matches!(parameter, Parameter::Typed { .. }));

        let value = json!({ "$ref": "Pet", "location": "json" });
        let parameter: Parameter = serde_json::from_value(value).unwrap();
        assert!(matches!(parameter, Parameter::Reference { .. }));
    }
}
