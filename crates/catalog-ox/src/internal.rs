use foundry_ox_common::request_builder::{Endpoint, HttpMethod, RequestBuilder, RequestConfig};

use crate::{
    CatalogRequestError,
    request::ModelSearchRequest,
    response::ModelSearchResponse,
};

/// Path of the catalog search endpoint, relative to the base URL.
const SEARCH_PATH: &str = "asset-gallery/v1.0/models";

/// Catalog client helper methods using the common RequestBuilder
pub struct CatalogRequestHelper {
    request_builder: RequestBuilder,
}

impl CatalogRequestHelper {
    pub fn new(client: reqwest::Client, base_url: &str, user_agent: &str) -> Self {
        let config = RequestConfig::new(base_url)
            .with_header("accept", "application/json")
            .with_user_agent(user_agent);

        Self {
            request_builder: RequestBuilder::new(client, config),
        }
    }

    /// Fetch one page of catalog search results.
    pub async fn search_models(
        &self,
        request: &ModelSearchRequest,
    ) -> Result<ModelSearchResponse, CatalogRequestError> {
        let endpoint = Endpoint::new(SEARCH_PATH, HttpMethod::Post);

        self.request_builder
            .request_json(&endpoint, Some(request))
            .await
    }
}
