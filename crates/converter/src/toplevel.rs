//! Top-level attribute extraction from `info` and `servers`

use serde_json::Value;

/// Scalar descriptor fields read from the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopLevelAttributes {
    pub name: String,
    pub api_version: String,
    pub description: String,
    pub base_url: String,
    pub base_path: String,
}

/// Read `info` and `servers[0]` into scalar descriptor fields.
///
/// A server URL starting with `/` is a base path, anything else a base URL;
/// exactly one of the two ends up non-empty. An explicit override replaces
/// whatever the document declared.
pub fn extract_top_level(document: &Value, base_url_override: Option<&str>) -> TopLevelAttributes {
    let str_at = |pointer: &str| {
        document
            .pointer(pointer)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let mut attributes = TopLevelAttributes {
        name: str_at("/info/title"),
        api_version: str_at("/info/version"),
        description: str_at("/info/description"),
        base_url: String::new(),
        base_path: String::new(),
    };

    let server_url = str_at("/servers/0/url");
    if server_url.starts_with('/') {
        attributes.base_path = server_url;
    } else {
        attributes.base_url = server_url;
    }

    if let Some(url) = base_url_override {
        attributes.base_url = url.to_string();
        attributes.base_path.clear();
    }

    attributes
}
