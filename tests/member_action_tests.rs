//! Integration tests for declared member actions.
//!
//! These tests verify:
//! - the `<path>/<id>/<verb>.json` URL and the declared HTTP method
//! - deep-merge of the action's response into the attribute store
//! - the preconditions checked before any request is sent

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zendesk_api::rest::resources::{declarations, Ticket};
use zendesk_api::rest::{Capability, ErrorCategory, Operation, Registry, ResourceKind};
use zendesk_api::{ApiUrl, HttpMethod, ResourceError, ZendeskClient, ZendeskConfig};

fn config(server: &MockServer) -> ZendeskConfig {
    ZendeskConfig::builder()
        .url(ApiUrl::new(format!("{}/api/v2", server.uri())).unwrap())
        .build()
        .unwrap()
}

async fn setup() -> (MockServer, ZendeskClient) {
    let server = MockServer::start().await;
    let client = ZendeskClient::new(&config(&server)).unwrap();
    (server, client)
}

async fn setup_with_macros() -> (MockServer, ZendeskClient) {
    let server = MockServer::start().await;
    let macro_kind = ResourceKind::builder("Macro")
        .verb(HttpMethod::Get, "apply")
        .verb(HttpMethod::Post, "copy")
        .build()
        .unwrap();
    let report_kind = ResourceKind::builder("Report")
        .capability(Capability::ReadOnly)
        .verb(HttpMethod::Post, "refresh")
        .build()
        .unwrap();
    let registry = Registry::builder()
        .declare_all(declarations().unwrap())
        .declare(macro_kind)
        .declare(report_kind)
        .wire()
        .unwrap();
    let client = ZendeskClient::with_registry(&config(&server), registry).unwrap();
    (server, client)
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map_or(0, |requests| requests.len())
}

#[tokio::test]
async fn test_put_action_merges_response() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/42/mark_as_spam.json"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "deleted",
            "via": {"channel": "api"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut ticket: Ticket = client.build(json!({"id": 42, "status": "open"})).unwrap();
    ticket.call_verb("mark_as_spam").await.unwrap();

    assert_eq!(ticket.status().as_deref(), Some("deleted"));
    assert_eq!(ticket.raw("via"), Some(&json!({"channel": "api"})));
    assert_eq!(ticket.id(), Some(&json!(42)));
}

#[tokio::test]
async fn test_get_and_post_actions_use_declared_methods() {
    let (server, client) = setup_with_macros().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/macros/3/apply.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": {"ticket": {"status": "solved"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/macros/3/copy.json"))
        .and(body_json(json!({"title": "Copy of Close"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"copied": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut macro_record = client.resource("Macro", json!({"id": 3, "title": "Close"})).unwrap();
    macro_record.call_verb("apply").await.unwrap();
    macro_record
        .call_verb_with("copy", json!({"title": "Copy of Close"}))
        .await
        .unwrap();

    assert_eq!(
        macro_record.raw("result"),
        Some(&json!({"ticket": {"status": "solved"}}))
    );
    assert_eq!(macro_record.raw("copied"), Some(&json!(true)));
    assert_eq!(macro_record.raw("title"), Some(&json!("Close")));
}

#[tokio::test]
async fn test_action_on_transient_record_is_rejected_before_transport() {
    let (server, client) = setup().await;

    let mut ticket: Ticket = client.build(json!({"subject": "Spam"})).unwrap();
    let error = ticket.call_verb("mark_as_spam").await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::MissingId {
            operation: Operation::Verb,
            ..
        }
    ));
    assert_eq!(error.category(), ErrorCategory::Precondition);
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_undeclared_action_is_rejected() {
    let (server, client) = setup().await;

    let mut ticket: Ticket = client.build(json!({"id": 1})).unwrap();
    let error = ticket.call_verb("escalate").await.unwrap_err();

    assert!(matches!(
        &error,
        ResourceError::UnknownVerb { resource, verb } if resource == "Ticket" && verb == "escalate"
    ));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_action_requires_full_capability() {
    let (server, client) = setup_with_macros().await;

    let mut report = client.resource("Report", json!({"id": 5})).unwrap();
    let error = report.call_verb("refresh").await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Unsupported {
            operation: Operation::Verb,
            ..
        }
    ));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_failed_action_leaves_store_unchanged() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/7/mark_as_spam.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": "RecordInvalid",
            "description": "Ticket is closed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut ticket: Ticket = client.build(json!({"id": 7, "status": "closed"})).unwrap();
    let before = ticket.attributes().clone();
    let error = ticket.call_verb("mark_as_spam").await.unwrap_err();

    assert_eq!(error.category(), ErrorCategory::Validation);
    assert_eq!(ticket.attributes(), &before);
}

#[tokio::test]
async fn test_destroyed_record_rejects_actions() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/8.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut ticket: Ticket = client.build(json!({"id": 8})).unwrap();
    ticket.destroy().await.unwrap();

    let error = ticket.call_verb("mark_as_spam").await.unwrap_err();
    assert!(matches!(error, ResourceError::Destroyed { .. }));
    assert_eq!(request_count(&server).await, 1);
}
