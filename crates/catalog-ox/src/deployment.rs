//! Deployment-option classification for catalog records.

use crate::response::{DeploymentOptions, ModelSummary};

/// Offer id for serverless pay-as-you-go endpoints.
pub const OFFER_SERVERLESS_PAYGO: &str = "standard-paygo";
/// Offer id for VM-backed managed compute.
pub const OFFER_VM: &str = "VM";
/// Offer id for VM-backed managed compute with a surcharge.
pub const OFFER_VM_WITH_SURCHARGE: &str = "VM-withSurcharge";

/// Publisher whose models are consumed through OpenAI-branded endpoints
/// rather than Azure offers.
const OPENAI_PUBLISHER: &str = "openai";

/// Derive the deployment options of a single catalog record.
///
/// Pure and infallible; missing fields count as empty. An
/// OpenAI-published model is never classified from its offer list, so
/// `openai` excludes `serverless_endpoint`/`managed_compute`, while
/// `free_playground` is orthogonal to all of them.
#[must_use]
pub fn classify(summary: &ModelSummary) -> DeploymentOptions {
    let mut options = DeploymentOptions::default();

    // A JSON null counts as absent here.
    if summary
        .playground_limits
        .as_ref()
        .is_some_and(|limits| !limits.is_null())
    {
        options.free_playground = true;
    }

    let publisher = summary.publisher.as_deref().unwrap_or_default();
    if publisher.eq_ignore_ascii_case(OPENAI_PUBLISHER) {
        options.openai = true;
    } else {
        let offers = summary.azure_offers.as_deref().unwrap_or_default();
        if offers.iter().any(|offer| offer == OFFER_SERVERLESS_PAYGO) {
            options.serverless_endpoint = true;
        }
        if offers
            .iter()
            .any(|offer| offer == OFFER_VM || offer == OFFER_VM_WITH_SURCHARGE)
        {
            options.managed_compute = true;
        }
    }

    options
}
