use foundry_ox_common::request_builder::{Endpoint, HttpMethod, RequestBuilder, RequestConfig};

use crate::{
    LabsRequestError,
    response::{ProjectImplementation, ProjectsResponse, ResourceResponse},
};

/// Labs client helper methods using the common RequestBuilder
pub struct LabsRequestHelper {
    request_builder: RequestBuilder,
}

impl LabsRequestHelper {
    pub fn new(client: reqwest::Client, base_url: &str, user_agent: &str) -> Self {
        let config = RequestConfig::new(base_url)
            .with_header("accept", "application/json")
            .with_user_agent(user_agent);

        Self {
            request_builder: RequestBuilder::new(client, config),
        }
    }

    /// List the labs projects.
    pub async fn list_projects(&self) -> Result<ProjectsResponse, LabsRequestError> {
        let endpoint = Endpoint::new("projects", HttpMethod::Get);
        self.request_builder.request(&endpoint).await
    }

    /// Fetch the implementation sample of one project.
    pub async fn project_implementation(
        &self,
        name: &str,
    ) -> Result<ProjectImplementation, LabsRequestError> {
        let endpoint = Endpoint::new(format!("projects/{name}/implementation"), HttpMethod::Get);
        self.request_builder.request(&endpoint).await
    }

    /// Fetch a static guidance resource.
    pub async fn resource(&self, name: &str) -> Result<ResourceResponse, LabsRequestError> {
        let endpoint = Endpoint::new(format!("resources/resource/{name}"), HttpMethod::Get);
        self.request_builder.request(&endpoint).await
    }
}
