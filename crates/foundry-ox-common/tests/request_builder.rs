use bytes::Bytes;
use foundry_ox_common::{
    ClientInfo, RequestError,
    error::parse_error_response,
    request_builder::{Endpoint, HttpMethod, RequestBuilder, RequestConfig, default_http_client},
};

#[test]
fn test_endpoint_creation() {
    let endpoint = Endpoint::new("asset-gallery/v1.0/models", HttpMethod::Post);
    assert_eq!(endpoint.path, "asset-gallery/v1.0/models");
    assert!(matches!(endpoint.method, HttpMethod::Post));
    assert!(endpoint.extra_headers.is_none());
    assert!(endpoint.query_params.is_none());
}

#[test]
fn test_endpoint_with_query_params() {
    let endpoint = Endpoint::new("projects", HttpMethod::Get)
        .with_query_params(vec![("limit".to_string(), "10".to_string())]);

    assert_eq!(endpoint.query_params.as_ref().unwrap().len(), 1);
    assert_eq!(
        endpoint.query_params.as_ref().unwrap()[0],
        ("limit".to_string(), "10".to_string())
    );
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new("https://api.example.com")
        .with_header("accept", "application/json")
        .with_user_agent("test-client/1.0");

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.default_headers.len(), 1);
    assert_eq!(config.user_agent, Some("test-client/1.0".to_string()));
}

#[test]
fn test_http_method_conversion() {
    use reqwest::Method;

    assert_eq!(Method::from(HttpMethod::Get), Method::GET);
    assert_eq!(Method::from(HttpMethod::Post), Method::POST);
}

#[tokio::test]
async fn test_request_builder_url_formation() {
    let config = RequestConfig::new("https://api.example.com/v1/");
    let request_builder = RequestBuilder::new(default_http_client(), config);
    let endpoint = Endpoint::new("/projects", HttpMethod::Get);

    // Builds the request without sending it; the joined URL must not
    // contain a double slash.
    let req = request_builder.build_request(&endpoint).build().unwrap();
    assert_eq!(req.url().as_str(), "https://api.example.com/v1/projects");
}

#[test]
fn test_parse_error_response_extracts_nested_message() {
    let body = Bytes::from_static(br#"{"error": {"message": "no such asset"}}"#);
    let err = parse_error_response(reqwest::StatusCode::NOT_FOUND, &body);

    match err {
        RequestError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such asset");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_parse_error_response_extracts_flat_message() {
    let body = Bytes::from_static(br#"{"message": "throttled"}"#);
    let err = parse_error_response(reqwest::StatusCode::TOO_MANY_REQUESTS, &body);

    assert_eq!(err.status(), Some(429));
    assert!(err.to_string().contains("throttled"));
}

#[test]
fn test_parse_error_response_falls_back_to_raw_body() {
    let body = Bytes::from_static(b"upstream exploded");
    let err = parse_error_response(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);

    match err {
        RequestError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_client_info_user_agent() {
    let info = ClientInfo::new("Visual Studio Code", "1.96.0");
    assert_eq!(info.user_agent(), "MCP-Client/Visual-Studio-Code-1.96.0");
}

#[test]
fn test_client_info_defaults_to_unknown() {
    let info = ClientInfo::default();
    assert_eq!(info.user_agent(), "MCP-Client/UnknownClient-0.0.0");
}
