//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! keiro crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let raw = std::fs::read_to_string("xml2jsonConvertedFile/default.json")?;
//! let tree: serde_json::Value = serde_json::from_str(&raw)?;
//!
//! let records = extract_routes(&tree)?;
//! let collection = build_collection(&records, "api.example.com", "My Proxy");
//!
//! println!("{}", serde_json::to_string_pretty(&collection)?);
//! # Ok(())
//! # }
//! ```

// Condition parsing
pub use crate::condition::{ParsedCondition, Verb, parse_condition};

// Route extraction
pub use crate::extractor::{RouteRecord, extract_from_proxy, extract_routes};

// Collection building
pub use crate::collection::{CollectionDocument, build_collection};

// Proxy model
pub use crate::proxy::{FlowDefinition, IntoProxy, ProxyDefinition};

// Error types
pub use crate::error::ExtractError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
