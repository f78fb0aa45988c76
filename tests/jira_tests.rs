//! Jira client tests against a mocked REST endpoint.

use deskhand::error::DeskhandError;
use deskhand::jira::{IssueRequest, JiraClient};
use wiremock::matchers::{body_partial_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_request() -> IssueRequest {
    IssueRequest {
        project_key: "PROJ".into(),
        issue_type: "Bug".into(),
        summary: "Broken build".into(),
        description: "Fails on main".into(),
        assignee_email: "me@example.com".into(),
    }
}

#[tokio::test]
async fn created_issue_yields_key_and_browse_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .and(header_exists("authorization"))
        .and(body_partial_json(serde_json::json!({
            "fields": {
                "project": {"key": "PROJ"},
                "issuetype": {"name": "Bug"},
                "summary": "Broken build",
                "assignee": {"emailAddress": "me@example.com"},
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"key": "PROJ-123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = JiraClient::new(server.uri(), "user@example.com:token");
    let issue = client.create_issue(&sample_request()).await.unwrap();

    assert_eq!(issue.key, "PROJ-123");
    assert!(client.browse_url(&issue.key).ends_with("/browse/PROJ-123"));
}

#[tokio::test]
async fn bad_request_surfaces_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(400).set_body_string("project is required"))
        .mount(&server)
        .await;

    let client = JiraClient::new(server.uri(), "user@example.com:token");
    let err = client.create_issue(&sample_request()).await.unwrap_err();

    match &err {
        DeskhandError::Api { status, message } => {
            assert_eq!(*status, 400);
            assert!(message.contains("project is required"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn success_requires_exactly_201() {
    // Jira returns 200 for some endpoints; issue creation must be 201.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"key": "PROJ-1"})),
        )
        .mount(&server)
        .await;

    let client = JiraClient::new(server.uri(), "user@example.com:token");
    let err = client.create_issue(&sample_request()).await.unwrap_err();
    assert!(matches!(err, DeskhandError::Api { status: 200, .. }));
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credential"))
        .mount(&server)
        .await;

    let client = JiraClient::new(server.uri(), "wrong:credential");
    let err = client.create_issue(&sample_request()).await.unwrap_err();
    assert!(matches!(err, DeskhandError::Authentication(_)));
}
