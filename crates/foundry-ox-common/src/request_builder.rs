use std::{collections::HashMap, time::Duration};

use log::debug;
use reqwest::{Method, RequestBuilder as ReqwestRequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::error::{self, RequestError};

/// Default per-request timeout applied by [`default_http_client`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the reqwest client used when the caller does not supply one.
///
/// Catalog scans can take a while page by page, but no single request
/// should hang forever, so a per-request timeout is always set.
#[must_use]
pub fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}

/// HTTP method for API endpoints
#[derive(Debug, Clone)]
pub enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }
}

/// Represents an API endpoint with its configuration
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    pub extra_headers: Option<HashMap<String, String>>,
    pub query_params: Option<Vec<(String, String)>>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            extra_headers: None,
            query_params: None,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = self.extra_headers.unwrap_or_default();
        headers.insert(key.into(), value.into());
        self.extra_headers = Some(headers);
        self
    }

    pub fn with_query_params(mut self, params: Vec<(String, String)>) -> Self {
        self.query_params = Some(params);
        self
    }
}

/// Configuration for request building
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub base_url: String,
    pub default_headers: HashMap<String, String>,
    pub user_agent: Option<String>,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: HashMap::new(),
            user_agent: None,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Generic request builder that handles common HTTP patterns
pub struct RequestBuilder {
    client: reqwest::Client,
    config: RequestConfig,
}

impl RequestBuilder {
    pub fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    /// Build a reqwest RequestBuilder for the given endpoint
    pub fn build_request(&self, endpoint: &Endpoint) -> ReqwestRequestBuilder {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path.trim_start_matches('/')
        );
        let method: Method = endpoint.method.clone().into();

        let mut req = self.client.request(method, &url);

        // Add query parameters if provided
        if let Some(ref params) = endpoint.query_params {
            req = req.query(&params);
        }

        // Add default headers
        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        // Add endpoint-specific headers
        if let Some(ref headers) = endpoint.extra_headers {
            for (key, value) in headers {
                req = req.header(key, value);
            }
        }

        // Add user agent
        if let Some(ref user_agent) = self.config.user_agent {
            req = req.header("user-agent", user_agent);
        }

        // JSON bodies only; content-type is fixed for POST requests
        if matches!(endpoint.method, HttpMethod::Post) {
            req = req.header("content-type", "application/json");
        }

        req
    }

    /// Execute a request with JSON body and return deserialized response
    pub async fn request_json<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, RequestError> {
        let mut req = self.build_request(endpoint);

        if let Some(body) = body {
            // Normalize body to serde_json::Value to avoid any accidental double-encoding
            let val = serde_json::to_value(body)?;
            debug!("POST {} body: {val}", endpoint.path);
            req = req.json(&val);
        }

        let res = req.send().await?;
        self.handle_response(res).await
    }

    /// Execute a request without body and return deserialized response
    pub async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, RequestError> {
        let req = self.build_request(endpoint);
        let res = req.send().await?;
        self.handle_response(res).await
    }

    /// Handle response and parse errors
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
    ) -> Result<T, RequestError> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if status.is_success() {
            match serde_json::from_slice::<T>(&bytes) {
                Ok(val) => Ok(val),
                Err(e) => {
                    let body_str = String::from_utf8_lossy(&bytes);
                    Err(RequestError::UnexpectedResponse(format!(
                        "HTTP {} but failed to decode JSON: {e}; body: {body_str}",
                        status.as_u16(),
                    )))
                }
            }
        } else {
            Err(error::parse_error_response(status, &bytes))
        }
    }
}
