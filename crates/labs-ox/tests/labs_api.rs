use foundry_ox_common::ClientInfo;
use labs_ox::{LABS_API_URL_ENV, Labs};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn labs_for(server: &MockServer) -> Labs {
    Labs::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn list_projects_parses_open_ended_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [
                {"name": "omniparser", "status": "preview"},
                {"name": "magma"},
            ]
        })))
        .mount(&server)
        .await;

    let response = labs_for(&server).list_projects().await.unwrap();

    assert_eq!(response.projects.len(), 2);
    assert_eq!(response.projects[0].name.as_deref(), Some("omniparser"));
    assert_eq!(response.projects[0].extra["status"], "preview");
}

#[tokio::test]
async fn project_implementation_hits_the_project_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/omniparser/implementation"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"project": "pip install omniparser"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sample = labs_for(&server)
        .project_implementation("omniparser")
        .await
        .unwrap();

    assert_eq!(sample.project, "pip install omniparser");
}

#[tokio::test]
async fn github_guidance_substitutes_the_model_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resources/resource/gh_guidance.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resource": {
                "content": "Use the model `{{inference_model_name}}` in your client.",
                "format": "markdown"
            }
        })))
        .mount(&server)
        .await;

    let guidance = labs_for(&server)
        .github_model_guidance("mistral-ai", "mistral-large")
        .await
        .unwrap();

    assert_eq!(
        guidance,
        "Use the model `mistral-ai/mistral-large` in your client."
    );
}

#[tokio::test]
async fn requests_carry_the_client_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("user-agent", "MCP-Client/UnknownClient-0.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projects": []})))
        .expect(1)
        .mount(&server)
        .await;

    let labs = Labs::builder()
        .base_url(server.uri())
        .client_info(ClientInfo::default())
        .build();

    labs.list_projects().await.unwrap();
}

#[tokio::test]
async fn non_success_status_becomes_a_structured_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/missing/implementation"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "no such project"})),
        )
        .mount(&server)
        .await;

    let err = labs_for(&server)
        .project_implementation("missing")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("no such project"));
}

#[test]
fn default_base_url_points_at_production() {
    assert_eq!(
        Labs::new().base_url(),
        "https://labs-mcp-api.azurewebsites.net/api/v1"
    );
}

#[test]
#[ignore = "Environment variable tests are unreliable in concurrent test execution"]
fn from_env_prefers_the_override() {
    unsafe {
        std::env::set_var(LABS_API_URL_ENV, "http://localhost:9999/api/v1");
    }

    assert_eq!(Labs::from_env().base_url(), "http://localhost:9999/api/v1");

    unsafe {
        std::env::remove_var(LABS_API_URL_ENV);
    }

    assert_eq!(
        Labs::from_env().base_url(),
        "https://labs-mcp-api.azurewebsites.net/api/v1"
    );
}
