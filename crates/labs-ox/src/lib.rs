#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Client for the labs/services API: experimental project listings,
//! per-project implementation samples, and static guidance documents.

pub mod error;
mod internal;
pub mod response;

// Re-export main types
pub use error::LabsRequestError;
pub use response::{Project, ProjectImplementation, ProjectsResponse, Resource, ResourceResponse};

use bon::Builder;
use foundry_ox_common::{ClientInfo, request_builder::default_http_client};

use crate::internal::LabsRequestHelper;

const BASE_URL: &str = "https://labs-mcp-api.azurewebsites.net/api/v1";

/// Environment variable that overrides the labs base URL.
pub const LABS_API_URL_ENV: &str = "LABS_API_URL";

/// Resource name of the GitHub-models guidance document.
const GH_GUIDANCE_RESOURCE: &str = "gh_guidance.md";

/// Placeholder in the guidance body substituted with `publisher/model`.
const MODEL_NAME_PLACEHOLDER: &str = "{{inference_model_name}}";

/// Labs API client.
#[derive(Debug, Clone, Builder)]
pub struct Labs {
    #[builder(default = default_http_client())]
    pub(crate) client: reqwest::Client,
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
    /// Identity of the host client, sent as the `User-Agent` header.
    #[builder(default)]
    pub(crate) client_info: ClientInfo,
}

impl Labs {
    /// Create a labs client against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client from the environment.
    ///
    /// Reads `LABS_API_URL`; an unset or empty variable falls back to
    /// the production URL, so this never fails.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(LABS_API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::builder().base_url(url).build(),
            _ => Self::new(),
        }
    }

    /// Base URL for the API
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> LabsRequestHelper {
        LabsRequestHelper::new(
            self.client.clone(),
            &self.base_url,
            &self.client_info.user_agent(),
        )
    }

    /// List the experimental labs projects.
    pub async fn list_projects(&self) -> Result<ProjectsResponse, LabsRequestError> {
        self.request_helper().list_projects().await
    }

    /// Fetch the implementation code sample of one labs project.
    pub async fn project_implementation(
        &self,
        name: &str,
    ) -> Result<ProjectImplementation, LabsRequestError> {
        self.request_helper().project_implementation(name).await
    }

    /// Fetch a static guidance resource by name.
    pub async fn resource(&self, name: &str) -> Result<ResourceResponse, LabsRequestError> {
        self.request_helper().resource(name).await
    }

    /// Build the GitHub-models code sample for one model.
    ///
    /// Fetches the guidance document and substitutes the model
    /// placeholder with `publisher/model`.
    pub async fn github_model_guidance(
        &self,
        publisher_name: &str,
        model_name: &str,
    ) -> Result<String, LabsRequestError> {
        let response = self.resource(GH_GUIDANCE_RESOURCE).await?;
        Ok(response
            .resource
            .content
            .replace(MODEL_NAME_PLACEHOLDER, &format!("{publisher_name}/{model_name}")))
    }
}

impl Default for Labs {
    fn default() -> Self {
        Self::new()
    }
}
