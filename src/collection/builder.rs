//! Mapping of route records into a collection document.

use super::document::{
    COLLECTION_SCHEMA, CollectionDocument, CollectionInfo, CollectionItem, RequestEntry,
    RequestUrl,
};
use crate::extractor::RouteRecord;

/// Builds a collection document from extracted route records.
///
/// Entries are emitted 1:1 with the records, in input order, with no
/// deduplication: named variants of the same physical route are common and
/// each keeps its own entry.
pub fn build_collection(
    records: &[RouteRecord],
    target_host: &str,
    collection_name: &str,
) -> CollectionDocument {
    let item = records
        .iter()
        .map(|record| build_item(record, target_host))
        .collect();

    CollectionDocument {
        info: CollectionInfo {
            name: collection_name.to_string(),
            schema: COLLECTION_SCHEMA.to_string(),
        },
        item,
    }
}

fn build_item(record: &RouteRecord, target_host: &str) -> CollectionItem {
    let raw = format!(
        "https://{}{}{}",
        target_host, record.base_path, record.path_suffix
    );

    // The base path becomes the first path segment, followed by the
    // non-empty segments of the suffix.
    let mut path = vec![record.base_path.trim_matches('/').to_string()];
    path.extend(
        record
            .path_suffix
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string),
    );

    CollectionItem {
        name: record.name.clone(),
        request: RequestEntry {
            method: record.verb.to_string(),
            header: Vec::new(),
            url: RequestUrl {
                raw,
                protocol: "https".to_string(),
                host: vec![target_host.to_string()],
                path,
            },
        },
        response: Vec::new(),
    }
}
