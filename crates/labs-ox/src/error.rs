// Re-export shared error types from foundry-ox-common
pub use foundry_ox_common::error::{RequestError, parse_error_response};

/// Errors from the labs API; formatting to user-facing text happens at
/// the tool layer, never here.
pub type LabsRequestError = RequestError;
