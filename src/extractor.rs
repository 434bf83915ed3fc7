//! Extraction of route records from a proxy's conditional flows.

use crate::condition::{Verb, parse_condition};
use crate::error::ExtractError;
use crate::proxy::ProxyDefinition;
use serde_json::Value;

/// One routable endpoint recovered from a proxy's conditional flows,
/// normalized and condition-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: String,
    pub description: String,
    pub verb: Verb,
    /// Always `/`-prefixed; derived purely from the flow's condition.
    pub path_suffix: String,
    /// Copied from the proxy's `BasePath`; identical across every record
    /// extracted from one tree.
    pub base_path: String,
}

/// Decodes a configuration tree and extracts its routable endpoints.
///
/// Fails with an [`ExtractError`] when the tree lacks the required top-level
/// structure; see [`ProxyDefinition::from_tree`].
pub fn extract_routes(tree: &Value) -> Result<Vec<RouteRecord>, ExtractError> {
    let proxy = ProxyDefinition::from_tree(tree)?;
    Ok(extract_from_proxy(&proxy))
}

/// Extracts route records from an already-normalized proxy definition.
///
/// Flows are visited in document order. A flow is skipped when its condition
/// is absent or empty, or when the condition carries no `MatchesPath` clause;
/// skipped flows leave no gap in the output. Skipping is silent by contract:
/// an unroutable flow is ordinary input, not an error.
pub fn extract_from_proxy(proxy: &ProxyDefinition) -> Vec<RouteRecord> {
    let mut records = Vec::new();

    for flow in &proxy.flows {
        let Some(condition) = flow.condition.as_deref() else {
            continue;
        };
        if condition.is_empty() {
            continue;
        }

        let parsed = parse_condition(condition);
        let Some(suffix) = parsed.path_suffix else {
            continue;
        };

        records.push(RouteRecord {
            name: flow.name.clone(),
            description: flow.description.clone(),
            verb: parsed.verb,
            path_suffix: format!("/{suffix}"),
            base_path: proxy.base_path.clone(),
        });
    }

    records
}
