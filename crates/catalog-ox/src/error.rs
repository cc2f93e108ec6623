// Re-export shared error types from foundry-ox-common
pub use foundry_ox_common::error::{RequestError, parse_error_response};

/// Errors from single catalog requests; soft paging failures in
/// [`crate::Catalog::list_models`] are downgraded to a stop instead.
pub type CatalogRequestError = RequestError;
