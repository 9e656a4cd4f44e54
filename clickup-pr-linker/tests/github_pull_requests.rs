use std::path::PathBuf;

use clickup_pr_linker::{GitHubPullRequests, PullRequestContext, PullRequestHost};
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "ghp_test_token";
const PULL_PATH: &str = "/repos/acme/webapp/pulls/42";

fn pull_request_fixture() -> serde_json::Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/github/pull_request.json");
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn pulls_for(server: &MockServer) -> GitHubPullRequests {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    GitHubPullRequests::new(TOKEN, &Url::parse(&server.uri()).unwrap()).unwrap()
}

fn context() -> PullRequestContext {
    PullRequestContext {
        owner: "acme".to_string(),
        repo: "webapp".to_string(),
        number: 42,
        title: "Fix login [X1]".to_string(),
    }
}

#[tokio::test]
async fn fetches_pull_request_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PULL_PATH))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(pull_request_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let body = pulls_for(&server).pull_request_body(&context()).await.unwrap();

    assert_eq!(body.as_deref(), Some("Login no longer loops on expired sessions."));
}

#[tokio::test]
async fn null_body_is_none() {
    let server = MockServer::start().await;
    let mut pull_request = pull_request_fixture();
    pull_request["body"] = serde_json::Value::Null;

    Mock::given(method("GET"))
        .and(path(PULL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(pull_request))
        .mount(&server)
        .await;

    let body = pulls_for(&server).pull_request_body(&context()).await.unwrap();

    assert_eq!(body, None);
}

#[tokio::test]
async fn updates_pull_request_body() {
    let server = MockServer::start().await;
    let new_body = "desc\n\n### 📝 Linked ClickUp Tasks\n- [Fix login](https://app.clickup.com/t/X1)\n";
    let mut updated = pull_request_fixture();
    updated["body"] = serde_json::Value::String(new_body.to_string());

    Mock::given(method("PATCH"))
        .and(path(PULL_PATH))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_partial_json(serde_json::json!({ "body": new_body })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    pulls_for(&server)
        .update_pull_request_body(&context(), new_body)
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_pull_request_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PULL_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/pulls/pulls#get-a-pull-request"
        })))
        .mount(&server)
        .await;

    let result = pulls_for(&server).pull_request_body(&context()).await;

    assert!(result.is_err());
}
