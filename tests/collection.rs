//! Tests for collection-document construction and its serialized shape.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_build_emits_one_item_per_record_in_order() {
    let records = sample_records();
    let collection = build_collection(&records, "api.example.com", "Users API");

    // Duplicate path suffixes under different names are preserved 1:1.
    assert_eq!(collection.item.len(), records.len());
    assert_eq!(collection.item[0].name, "GetUsers");
    assert_eq!(collection.item[1].name, "GetUsersLegacy");
    assert_eq!(collection.item[2].name, "Ping");
}

#[test]
fn test_build_concatenates_raw_url() {
    let records = sample_records();
    let collection = build_collection(&records, "api.example.com", "Users API");

    let url = &collection.item[0].request.url;
    assert_eq!(url.raw, "https://api.example.com/v1/users/list");
    assert_eq!(url.protocol, "https");
    assert_eq!(url.host, vec!["api.example.com".to_string()]);
}

#[test]
fn test_build_path_segments_start_with_base_path() {
    let records = sample_records();
    let collection = build_collection(&records, "api.example.com", "Users API");

    assert_eq!(
        collection.item[0].request.url.path,
        vec!["v1".to_string(), "users".to_string(), "list".to_string()]
    );
    assert_eq!(
        collection.item[2].request.url.path,
        vec!["v1".to_string(), "ping".to_string()]
    );
}

#[test]
fn test_build_renders_unknown_verb_sentinel() {
    let records = sample_records();
    let collection = build_collection(&records, "api.example.com", "Users API");

    assert_eq!(collection.item[0].request.method, "GET");
    assert_eq!(collection.item[2].request.method, "Unknown");
}

#[test]
fn test_build_empty_records_yields_empty_collection() {
    let collection = build_collection(&[], "api.example.com", "Empty");
    assert_eq!(collection.info.name, "Empty");
    assert!(collection.item.is_empty());
}

#[test]
fn test_serialized_shape_matches_postman_v21() {
    let records = sample_records();
    let collection = build_collection(&records, "api.example.com", "Users API");

    let value = serde_json::to_value(&collection).expect("Failed to serialize");

    assert_eq!(
        value["info"]["schema"],
        "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
    );
    assert_eq!(value["info"]["name"], "Users API");

    // Empty header/response arrays are required verbatim by importing tools.
    assert_eq!(value["item"][0]["request"]["header"], serde_json::json!([]));
    assert_eq!(value["item"][0]["response"], serde_json::json!([]));
    assert_eq!(
        value["item"][0]["request"]["url"]["host"],
        serde_json::json!(["api.example.com"])
    );
}
