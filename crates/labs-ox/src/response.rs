use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One experimental labs project.
///
/// The service evolves quickly; only the name is relied upon, the rest
/// of the record is passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the project listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Implementation code sample for one labs project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectImplementation {
    /// The sample body, ready to show to the caller.
    pub project: String,
}

/// A static guidance document served by the labs API.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrapper the resource endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceResponse {
    pub resource: Resource,
}
