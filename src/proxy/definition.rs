/// The canonical, normalized routing configuration of one API proxy.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct ProxyDefinition {
    /// The proxy's `HTTPProxyConnection.BasePath`, shared by every route
    /// extracted from this definition.
    pub base_path: String,
    /// The proxy's conditional flows, always a dense ordered sequence even
    /// when the source representation held a single bare flow object.
    pub flows: Vec<FlowDefinition>,
}

/// One conditional flow in a proxy's routing configuration.
#[derive(Debug, Clone, Default)]
pub struct FlowDefinition {
    pub name: String,
    pub description: String,
    /// The boolean routing expression. Flows without a condition are never
    /// routable endpoints.
    pub condition: Option<String>,
    /// Whether the flow declared a Request sub-node. Presence only; the
    /// contents are never consumed by extraction.
    pub has_request: bool,
    /// Whether the flow declared a Response sub-node.
    pub has_response: bool,
}
