//! Integration tests for GitHubTracker.
//!
//! Uses wiremock for HTTP mocking. The tracker uses the blocking reqwest
//! client, so every call runs inside `spawn_blocking`.

use auto_milestone::domain::Milestone;
use auto_milestone::tracker::{GitHubTracker, IssueTracker, Repository};
use auto_milestone::{AutoMilestoneError, Result};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a tracker against `mock_server` and run `call` on a blocking thread.
async fn with_tracker<T, F>(mock_server: &MockServer, call: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&GitHubTracker) -> Result<T> + Send + 'static,
{
    let uri = mock_server.uri();
    tokio::task::spawn_blocking(move || {
        let tracker = GitHubTracker::new(&uri, Repository::new("octo", "repo"), "test-token")?;
        call(&tracker)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_milestones_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/milestones"))
        .and(query_param("state", "open"))
        .and(query_param("per_page", "100"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"number": 1, "title": "v1.0", "state": "open", "open_issues": 4},
            {"number": 2, "title": "Backlog", "state": "open", "description": "later"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let milestones = with_tracker(&mock_server, |t| t.list_milestones())
        .await
        .expect("list failed");

    assert_eq!(milestones.len(), 2);
    assert_eq!(milestones[0].number, 1);
    assert_eq!(milestones[0].title, "v1.0");
    assert_eq!(milestones[1].description.as_deref(), Some("later"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_milestones_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/milestones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let milestones = with_tracker(&mock_server, |t| t.list_milestones())
        .await
        .expect("list failed");
    assert!(milestones.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_milestones_401_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/milestones"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let err = with_tracker(&mock_server, |t| t.list_milestones())
        .await
        .unwrap_err();

    match err {
        AutoMilestoneError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Bad credentials");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_milestones_plain_text_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/milestones"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway\n"))
        .mount(&mock_server)
        .await;

    let err = with_tracker(&mock_server, |t| t.list_milestones())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "GitHub API error (502): Bad Gateway");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_milestones_malformed_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/milestones"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = with_tracker(&mock_server, |t| t.list_milestones())
        .await
        .unwrap_err();
    assert!(matches!(err, AutoMilestoneError::Json(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assign_milestone_sends_number_and_reads_echo() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/repos/octo/repo/issues/42"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"milestone": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 42,
            "title": "Fix the thing",
            "milestone": {"number": 3, "title": "v2.1", "state": "open"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let assigned = with_tracker(&mock_server, |t| t.assign_milestone(42, 3))
        .await
        .expect("assign failed");

    let milestone = assigned.expect("expected echoed milestone");
    assert_eq!(milestone.number, 3);
    assert_eq!(milestone.title, "v2.1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assign_milestone_without_echo() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/repos/octo/repo/issues/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 7,
            "milestone": null
        })))
        .mount(&mock_server)
        .await;

    let assigned: Option<Milestone> = with_tracker(&mock_server, |t| t.assign_milestone(7, 1))
        .await
        .expect("assign failed");
    assert_eq!(assigned, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assign_milestone_422_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/repos/octo/repo/issues/42"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed"
        })))
        .mount(&mock_server)
        .await;

    let err = with_tracker(&mock_server, |t| t.assign_milestone(42, 99))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AutoMilestoneError::Api { status: 422, ref message } if message == "Validation Failed"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_url_trailing_slash_is_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/milestones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = format!("{}/", mock_server.uri());
    let milestones = tokio::task::spawn_blocking(move || {
        GitHubTracker::new(&uri, Repository::new("octo", "repo"), "test-token")?
            .list_milestones()
    })
    .await
    .expect("blocking task panicked")
    .expect("list failed");
    assert!(milestones.is_empty());
}
