use thiserror::Error;

/// Errors that can occur when decoding a proxy configuration tree.
///
/// These cover missing top-level structure only: a tree without these nodes is
/// not a usable proxy configuration at all, so extraction halts instead of
/// producing a silently empty result. Malformed condition *clauses*, by
/// contrast, degrade silently and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Configuration tree has no 'ProxyEndpoint' node")]
    MissingProxyEndpoint,

    #[error("'ProxyEndpoint' has no 'Flows' collection")]
    MissingFlows,

    #[error("'ProxyEndpoint' has no 'HTTPProxyConnection' node")]
    MissingProxyConnection,

    #[error("'HTTPProxyConnection' has no 'BasePath' value")]
    MissingBasePath,
}

/// Errors that can occur when converting a custom user format into a Keiro
/// `ProxyDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ProxyConversionError {
    #[error("Invalid proxy data: {0}")]
    ValidationError(String),
}
