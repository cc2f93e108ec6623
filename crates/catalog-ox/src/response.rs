use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::Display;
use thiserror::Error;

use crate::deployment;

/// One page of results from the catalog search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSearchResponse {
    /// The records on this page. `None` means the field was absent from
    /// the response entirely, which is schema drift rather than an empty
    /// page.
    #[serde(default)]
    pub summaries: Option<Vec<ModelSummary>>,
    /// Total match count reported by upstream, repeated on every page.
    #[serde(default)]
    pub total_count: Option<i64>,
    /// Cursor for the next page; absent on the last one.
    #[serde(default)]
    pub continuation_token: Option<String>,
}

/// One catalog record.
///
/// Upstream sends an open-ended document; the fields the classifier and
/// callers rely on are typed, everything else is kept verbatim in
/// `extra`. A summary is enriched with its deployment options exactly
/// once and not mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_offers: Option<Vec<String>>,
    /// Present (and non-null) only for models usable in the free
    /// playground.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playground_limits: Option<Value>,
    /// Derived locally, never sent by upstream.
    #[serde(
        rename = "deployment_options",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deployment_options: Option<DeploymentOptions>,
    /// Every other upstream field, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelSummary {
    /// Enrich this record with its derived deployment options.
    #[must_use]
    pub fn with_deployment_options(mut self) -> Self {
        self.deployment_options = Some(deployment::classify(&self));
        self
    }
}

/// The ways a catalog model can be consumed.
///
/// The flags are orthogonal except that an OpenAI-published model is
/// never classified from its offer list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentOptions {
    #[serde(default)]
    pub openai: bool,
    #[serde(default)]
    pub serverless_endpoint: bool,
    #[serde(default)]
    pub managed_compute: bool,
    #[serde(default)]
    pub free_playground: bool,
}

/// Why a catalog scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Upstream returned no continuation token.
    #[strum(to_string = "end-of-data")]
    EndOfData,
    /// The configured page bound was reached with more data available.
    #[strum(to_string = "page-cap")]
    PageCap,
    /// A page failed (transport, status, decode, or schema drift); the
    /// records collected before it are still returned.
    #[strum(to_string = "upstream-error")]
    UpstreamError,
}

/// Validated envelope for an accumulated catalog scan.
///
/// `fetched_models_count` always equals `summaries.len()`; the
/// constructor derives it rather than trusting the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ModelsListResult {
    pub total_models_count: u64,
    pub fetched_models_count: usize,
    pub summaries: Vec<ModelSummary>,
    pub stop_reason: StopReason,
}

impl ModelsListResult {
    /// Package a finished scan.
    ///
    /// The raw upstream total is validated here: a negative value is a
    /// defect, not a transient, and fails loudly.
    pub fn new(
        total_models_count: i64,
        summaries: Vec<ModelSummary>,
        stop_reason: StopReason,
    ) -> Result<Self, InvalidEnvelope> {
        let total_models_count = u64::try_from(total_models_count)
            .map_err(|_| InvalidEnvelope::NegativeTotal(total_models_count))?;

        Ok(Self {
            total_models_count,
            fetched_models_count: summaries.len(),
            summaries,
            stop_reason,
        })
    }

    /// Whether upstream reported more matches than were fetched.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total_models_count > self.fetched_models_count as u64
    }
}

/// Construction failure of the result envelope.
///
/// Distinct from the soft failures of the paging loop; this one
/// propagates to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidEnvelope {
    #[error("upstream reported a negative total model count: {0}")]
    NegativeTotal(i64),
}
