//! Common test utilities for building configuration trees and route records.
use keiro::prelude::*;
use serde_json::json;

/// Creates a converted proxy configuration tree with a mix of routable and
/// unroutable flows.
///
/// Routable: `GetUsers` (GET /users/list) and `CreateUser` (POST /users/create).
/// Unroutable: one flow without a condition, one whose condition has no
/// `MatchesPath` clause.
#[allow(dead_code)]
pub fn sample_tree() -> serde_json::Value {
    json!({
        "ProxyEndpoint": {
            "@name": "default",
            "HTTPProxyConnection": {
                "BasePath": "/v1",
                "VirtualHost": "secure"
            },
            "Flows": {
                "Flow": [
                    {
                        "@name": "GetUsers",
                        "Description": "List all users",
                        "Condition": "(request.verb = \"GET\") and (proxy.pathsuffix MatchesPath \"/users/list\")",
                        "Request": { "Step": { "Name": "verify-api-key" } },
                        "Response": null
                    },
                    {
                        "@name": "PassThrough"
                    },
                    {
                        "@name": "CreateUser",
                        "Condition": "(request.verb = \"POST\") and (proxy.pathsuffix MatchesPath \"/users/create\")",
                        "Request": null,
                        "Response": null
                    },
                    {
                        "@name": "VerbOnly",
                        "Condition": "(request.verb = \"DELETE\")"
                    }
                ]
            },
            "RouteRule": { "@name": "default" }
        }
    })
}

/// Creates a tree whose `Flows` holds a single flow as a bare object, the
/// way an xmltodict-style conversion represents non-repeated elements.
#[allow(dead_code)]
pub fn single_flow_tree() -> serde_json::Value {
    json!({
        "ProxyEndpoint": {
            "@name": "default",
            "HTTPProxyConnection": { "BasePath": "/v1" },
            "Flows": {
                "Flow": {
                    "@name": "Health",
                    "Condition": "(proxy.pathsuffix MatchesPath \"/health\")"
                }
            }
        }
    })
}

/// Creates a list of route records for collection-builder tests, including
/// a duplicated path under two names.
#[allow(dead_code)]
pub fn sample_records() -> Vec<RouteRecord> {
    vec![
        RouteRecord {
            name: "GetUsers".to_string(),
            description: String::new(),
            verb: Verb::Get,
            path_suffix: "/users/list".to_string(),
            base_path: "/v1".to_string(),
        },
        RouteRecord {
            name: "GetUsersLegacy".to_string(),
            description: String::new(),
            verb: Verb::Get,
            path_suffix: "/users/list".to_string(),
            base_path: "/v1".to_string(),
        },
        RouteRecord {
            name: "Ping".to_string(),
            description: "Health probe".to_string(),
            verb: Verb::Unknown,
            path_suffix: "/ping".to_string(),
            base_path: "/v1".to_string(),
        },
    ]
}
