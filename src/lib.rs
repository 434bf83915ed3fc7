//! # Keiro - Proxy Route Extraction and Collection Generation Engine
//!
//! **Keiro** turns the routing configuration of an Apigee API proxy into a
//! Postman collection. It consumes the proxy's `default.xml` after an
//! xmltodict-style XML-to-JSON conversion, recovers every routable endpoint
//! from the proxy's conditional flows, and emits a Postman v2.1 collection
//! document that downstream collection-importing tools accept verbatim.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical internal model of a proxy definition.
//! The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse the converted proxy configuration into a
//!     `serde_json::Value`, or parse your own format into your own structs.
//! 2.  **Convert to Keiro's Model**: `serde_json::Value` trees decode directly
//!     via [`extract_routes`]; custom formats implement the [`IntoProxy`]
//!     trait to provide a translation layer into [`ProxyDefinition`].
//! 3.  **Extract**: The route extractor walks the proxy's flows, classifies
//!     each flow's routing condition, and produces a normalized list of
//!     [`RouteRecord`]s.
//! 4.  **Build**: The collection builder maps the records 1:1 into a
//!     [`CollectionDocument`] ready for serialization.
//!
//! [`extract_routes`]: extractor::extract_routes
//! [`IntoProxy`]: proxy::IntoProxy
//! [`ProxyDefinition`]: proxy::ProxyDefinition
//! [`RouteRecord`]: extractor::RouteRecord
//! [`CollectionDocument`]: collection::CollectionDocument
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = std::fs::read_to_string("xml2jsonConvertedFile/default.json")?;
//!     let tree: serde_json::Value = serde_json::from_str(&raw)?;
//!
//!     // Extract the routable endpoints from the proxy's conditional flows.
//!     let records = extract_routes(&tree)?;
//!     println!("Extracted {} routes", records.len());
//!
//!     // Build the Postman collection and serialize it.
//!     let collection = build_collection(&records, "api.example.com", "My Proxy");
//!     let json = serde_json::to_string_pretty(&collection)?;
//!     std::fs::write("collection.json", json)?;
//!
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod condition;
pub mod error;
pub mod extractor;
pub mod prelude;
pub mod proxy;
