//! The Postman v2.1 collection document shape.
//!
//! Downstream collection-importing tools require this shape verbatim,
//! including the fixed schema identifier and the empty `header` and
//! `response` arrays, so every field here serializes exactly as named.

use serde::Serialize;

/// Schema identifier required by collection-importing tools.
pub const COLLECTION_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// A complete collection: a named container of request entries, one per
/// route record, in extraction order.
#[derive(Serialize, Debug, Clone)]
pub struct CollectionDocument {
    pub info: CollectionInfo,
    pub item: Vec<CollectionItem>,
}

#[derive(Serialize, Debug, Clone)]
pub struct CollectionInfo {
    pub name: String,
    pub schema: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct CollectionItem {
    pub name: String,
    pub request: RequestEntry,
    pub response: Vec<serde_json::Value>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RequestEntry {
    pub method: String,
    pub header: Vec<serde_json::Value>,
    pub url: RequestUrl,
}

#[derive(Serialize, Debug, Clone)]
pub struct RequestUrl {
    pub raw: String,
    pub protocol: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}
