//! Decoding of xmltodict-style configuration trees.
//!
//! The converted `default.xml` carries XML attributes under an `@` prefix
//! (`"@name"`), and represents a single child element as a bare object while
//! repeated children become arrays. Both quirks are normalized away here so
//! the extractor can always assume a dense flow sequence.

use super::definition::{FlowDefinition, ProxyDefinition};
use crate::error::ExtractError;
use serde_json::Value;

/// Attribute prefix emitted by xmltodict-style XML to JSON conversion.
const ATTR_PREFIX: char = '@';

impl ProxyDefinition {
    /// Decodes a converted proxy configuration tree into the canonical model.
    ///
    /// Fails fast when `ProxyEndpoint`, `Flows`, `HTTPProxyConnection`, or
    /// `BasePath` is absent: a tree without them is not a usable proxy
    /// configuration, and callers must halt rather than receive a silently
    /// empty definition.
    pub fn from_tree(tree: &Value) -> Result<Self, ExtractError> {
        let endpoint = tree
            .get("ProxyEndpoint")
            .ok_or(ExtractError::MissingProxyEndpoint)?;
        let flows_node = endpoint.get("Flows").ok_or(ExtractError::MissingFlows)?;
        let connection = endpoint
            .get("HTTPProxyConnection")
            .ok_or(ExtractError::MissingProxyConnection)?;
        let base_path = connection
            .get("BasePath")
            .and_then(Value::as_str)
            .ok_or(ExtractError::MissingBasePath)?
            .to_string();

        // A single <Flow> converts to a bare object, repeated ones to an
        // array. Normalize both to a sequence.
        let flows = match flows_node.get("Flow") {
            Some(Value::Array(entries)) => entries.iter().map(decode_flow).collect(),
            Some(single @ Value::Object(_)) => vec![decode_flow(single)],
            _ => Vec::new(),
        };

        Ok(Self { base_path, flows })
    }
}

fn decode_flow(node: &Value) -> FlowDefinition {
    FlowDefinition {
        name: attr_or_child(node, "name"),
        description: child_text(node, "Description"),
        condition: node
            .get("Condition")
            .and_then(Value::as_str)
            .map(str::to_string),
        has_request: node.get("Request").is_some(),
        has_response: node.get("Response").is_some(),
    }
}

/// Reads an `@`-prefixed attribute, falling back to a child element of the
/// same name so that hand-written trees without the attribute namespace still
/// decode.
fn attr_or_child(node: &Value, key: &str) -> String {
    let attr_key = format!("{ATTR_PREFIX}{key}");
    node.get(&attr_key)
        .or_else(|| node.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn child_text(node: &Value, key: &str) -> String {
    node.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
