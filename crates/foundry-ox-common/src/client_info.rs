/// Identity of the host client on whose behalf requests are made.
///
/// Passed explicitly by the caller; both upstream services receive it as
/// the outbound `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    /// Display name of the connected client.
    pub name: String,
    /// Version string of the connected client.
    pub version: String,
}

impl ClientInfo {
    /// Create a client identity from a name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Format the outbound `User-Agent` value.
    ///
    /// Spaces in the client name are replaced with dashes so the header
    /// stays a single product token.
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("MCP-Client/{}-{}", self.name.replace(' ', "-"), self.version)
    }
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            name: "UnknownClient".to_string(),
            version: "0.0.0".to_string(),
        }
    }
}
