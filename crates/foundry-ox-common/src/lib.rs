#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Shared HTTP client abstractions for the foundry-ox service clients
//!
//! This crate provides the request plumbing used by both upstream clients
//! (the model catalog and the labs API) so endpoint definitions, error
//! parsing, and header handling stay consistent between them.

pub mod client_info;
pub mod error;
pub mod request_builder;

pub use client_info::ClientInfo;
pub use error::RequestError;
pub use request_builder::{Endpoint, HttpMethod, RequestBuilder, RequestConfig};
