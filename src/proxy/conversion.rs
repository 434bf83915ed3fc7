use super::definition::ProxyDefinition;
use crate::error::ProxyConversionError;

/// A trait for custom data models that can be converted into a Keiro
/// `ProxyDefinition`.
///
/// This is the primary extension point for making Keiro format-agnostic. By
/// implementing this trait on your own configuration structs, you provide a
/// translation layer that allows the route extractor to process proxy
/// representations other than the xmltodict-converted tree.
///
/// # Example
///
/// ```rust,no_run
/// use keiro::error::ProxyConversionError;
/// use keiro::proxy::{FlowDefinition, IntoProxy, ProxyDefinition};
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyRoute { name: String, condition: String }
/// struct MyProxyConfig { base_path: String, routes: Vec<MyRoute> }
///
/// // 2. Implement `IntoProxy` for your top-level struct.
/// impl IntoProxy for MyProxyConfig {
///     fn into_proxy(self) -> Result<ProxyDefinition, ProxyConversionError> {
///         let flows = self
///             .routes
///             .into_iter()
///             .map(|route| FlowDefinition {
///                 name: route.name,
///                 condition: Some(route.condition),
///                 ..FlowDefinition::default()
///             })
///             .collect();
///
///         Ok(ProxyDefinition {
///             base_path: self.base_path,
///             flows,
///         })
///     }
/// }
/// ```
pub trait IntoProxy {
    /// Consumes the object and converts it into a Keiro-compatible proxy
    /// definition.
    fn into_proxy(self) -> Result<ProxyDefinition, ProxyConversionError>;
}

impl IntoProxy for serde_json::Value {
    fn into_proxy(self) -> Result<ProxyDefinition, ProxyConversionError> {
        ProxyDefinition::from_tree(&self)
            .map_err(|e| ProxyConversionError::ValidationError(e.to_string()))
    }
}
