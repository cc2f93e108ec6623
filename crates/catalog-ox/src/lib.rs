#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Client for the model-catalog search API: filtered, token-paginated
//! listings of catalog models, classified by deployment option.

pub mod deployment;
pub mod error;
mod internal;
pub mod request;
pub mod response;

// Re-export main types
pub use error::CatalogRequestError;
pub use request::{DEFAULT_MAX_PAGES, FilterClause, FilterOperator, ModelListQuery, ModelSearchRequest};
pub use response::{
    DeploymentOptions, InvalidEnvelope, ModelSearchResponse, ModelSummary, ModelsListResult,
    StopReason,
};

use bon::Builder;
use foundry_ox_common::{ClientInfo, request_builder::default_http_client};
use log::{debug, warn};

use crate::internal::CatalogRequestHelper;

const BASE_URL: &str = "https://api.catalog.azureml.ms";

/// Model catalog API client.
#[derive(Debug, Clone, Builder)]
pub struct Catalog {
    #[builder(default = default_http_client())]
    pub(crate) client: reqwest::Client,
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
    /// Identity of the host client, sent as the `User-Agent` header.
    #[builder(default)]
    pub(crate) client_info: ClientInfo,
}

impl Catalog {
    /// Create a catalog client against the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Base URL for the API
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> CatalogRequestHelper {
        CatalogRequestHelper::new(
            self.client.clone(),
            &self.base_url,
            &self.client_info.user_agent(),
        )
    }

    /// Fetch a single page of search results.
    ///
    /// Unlike [`Self::list_models`], failures propagate to the caller.
    pub async fn search(
        &self,
        request: &ModelSearchRequest,
    ) -> Result<ModelSearchResponse, CatalogRequestError> {
        self.request_helper().search_models(request).await
    }

    /// Run a bounded, token-paginated catalog scan.
    ///
    /// Pages are fetched strictly one after another, each record is
    /// enriched with its deployment options, and the loop stops at the
    /// page bound, at end-of-data, or on the first failed page. Failures
    /// mid-scan are not errors: whatever was collected is returned, and
    /// the envelope's [`StopReason`] records how the scan ended. The only
    /// hard failure is envelope construction itself.
    pub async fn list_models(
        &self,
        query: &ModelListQuery,
    ) -> Result<ModelsListResult, InvalidEnvelope> {
        let helper = self.request_helper();
        let mut request = ModelSearchRequest::from(query);

        let mut summaries: Vec<ModelSummary> = Vec::new();
        let mut total_count: i64 = 0;
        let mut page_count: u32 = 0;

        let stop_reason = loop {
            if page_count >= query.max_pages {
                break StopReason::PageCap;
            }
            page_count += 1;

            let page = match helper.search_models(&request).await {
                Ok(page) => page,
                Err(err) => {
                    warn!("catalog search failed on page {page_count}: {err}");
                    break StopReason::UpstreamError;
                }
            };

            let Some(batch) = page.summaries else {
                warn!("catalog response on page {page_count} has no summaries field");
                break StopReason::UpstreamError;
            };

            debug!("catalog page {page_count}: {} summaries", batch.len());
            summaries.extend(
                batch
                    .into_iter()
                    .map(ModelSummary::with_deployment_options),
            );

            // Upstream repeats the total on every page; last write wins,
            // a page without one leaves the previous value.
            if let Some(total) = page.total_count {
                total_count = total;
            }

            match page.continuation_token {
                Some(token) => request.continuation_token = Some(token),
                None => break StopReason::EndOfData,
            }
        };

        debug!(
            "catalog scan stopped after {page_count} page(s) ({stop_reason}), {} summaries of {total_count} total",
            summaries.len()
        );

        ModelsListResult::new(total_count, summaries, stop_reason)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
