//! Integration tests for the generic resource proxy.
//!
//! These tests exercise the merge semantics and the CRUD-to-HTTP mapping of
//! `Resource` end-to-end against a mock server: what is sent on the wire,
//! what comes back, and exactly when the local `info` cache changes.

use std::sync::Arc;

use pdns_api::clients::HttpClient;
use pdns_api::{ApiHost, ApiKey, PdnsConfig, Resource, ResourceError, ResourceRef};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a shared transport pointed at the given mock server.
fn create_http(server: &MockServer) -> Arc<HttpClient> {
    let config = PdnsConfig::builder()
        .api_host(ApiHost::new(server.uri()).unwrap())
        .api_key(ApiKey::new("test-api-key").unwrap())
        .build()
        .unwrap();

    Arc::new(HttpClient::new(&config))
}

/// Builds an info mapping from key/value pairs.
fn object(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

// ============================================================================
// get: full replacement of local info
// ============================================================================

#[tokio::test]
async fn test_get_replaces_info_discarding_staged_changes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/servers/localhost/zones/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"name": "a", "kind": "Native", "dnssec": true}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut resource = Resource::new(create_http(&mock_server), "zones", "servers/localhost/zones/a")
        .with_info(object(&[("name", json!("a"))]));

    // Stage a local change first
    let merged = resource.merge_info(object(&[("kind", json!("Native"))])).clone();
    assert_eq!(
        Value::Object(merged),
        json!({"name": "a", "kind": "Native"})
    );

    // get() replaces the mapping wholesale with the server's view
    resource.get().await.unwrap();

    assert_eq!(
        Value::Object(resource.info().clone()),
        json!({"name": "a", "kind": "Native", "dnssec": true})
    );
}

#[tokio::test]
async fn test_get_discards_keys_absent_from_the_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/servers/localhost/zones/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "a"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut resource = Resource::new(create_http(&mock_server), "zones", "servers/localhost/zones/a")
        .with_info(object(&[("local_only", json!("staged"))]));

    resource.get().await.unwrap();

    // Replacement, not merge: the staged key is gone
    assert_eq!(Value::Object(resource.info().clone()), json!({"name": "a"}));
}

#[tokio::test]
async fn test_get_rejects_non_object_bodies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/servers/localhost/zones/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut resource = Resource::new(create_http(&mock_server), "zones", "servers/localhost/zones/a")
        .with_info(object(&[("name", json!("a"))]));

    let result = resource.get().await;

    assert!(matches!(
        result,
        Err(ResourceError::UnexpectedBody { found: "an array", .. })
    ));
    // The local cache is untouched on failure
    assert_eq!(Value::Object(resource.info().clone()), json!({"name": "a"}));
}

// ============================================================================
// create: merge first, POST to the parent collection
// ============================================================================

#[tokio::test]
async fn test_create_posts_current_info_to_parent_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/servers/localhost/zones"))
        .and(body_json(json!({"name": "example.com."})))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            json!({"id": "example.com.", "name": "example.com.", "serial": 2026080501}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut resource = Resource::new(
        create_http(&mock_server),
        "zones",
        "servers/localhost/zones/example.com.",
    )
    .with_parent(ResourceRef::new("servers/localhost"))
    .with_info(object(&[("name", json!("example.com."))]));

    let created = resource.create(None).await.unwrap();

    assert_eq!(created["serial"], 2026080501);
}

#[tokio::test]
async fn test_create_merges_initial_into_the_posted_body() {
    let mock_server = MockServer::start().await;

    // The POST body must be the post-merge info: name preserved, kind added
    Mock::given(method("POST"))
        .and(path("/api/v1/servers/localhost/zones"))
        .and(body_json(json!({"name": "example.com.", "kind": "Native"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "example.com."})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut resource = Resource::new(
        create_http(&mock_server),
        "zones",
        "servers/localhost/zones/example.com.",
    )
    .with_parent(ResourceRef::new("servers/localhost"))
    .with_info(object(&[("name", json!("example.com."))]));

    resource
        .create(Some(object(&[("kind", json!("Native"))])))
        .await
        .unwrap();

    assert_eq!(resource.info()["kind"], "Native");
}

#[tokio::test]
async fn test_create_does_not_sync_info_from_the_response() {
    // Known asymmetry: the server's view (with assigned serial) is returned
    // but never folded into the local cache; a follow-up get() is required
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/servers/localhost/zones"))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            json!({"id": "example.com.", "name": "example.com.", "serial": 2026080501}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut resource = Resource::new(
        create_http(&mock_server),
        "zones",
        "servers/localhost/zones/example.com.",
    )
    .with_parent(ResourceRef::new("servers/localhost"))
    .with_info(object(&[("name", json!("example.com."))]));

    let created = resource.create(None).await.unwrap();

    assert_eq!(created["serial"], 2026080501);
    assert!(resource.info().get("serial").is_none());
    assert_eq!(
        Value::Object(resource.info().clone()),
        json!({"name": "example.com."})
    );
}

#[tokio::test]
async fn test_create_without_parent_fails_fast() {
    let mock_server = MockServer::start().await;
    // No mock mounted: a request reaching the server would 404 loudly

    let mut resource = Resource::new(create_http(&mock_server), "zones", "zones/a");

    let result = resource.create(None).await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingParent { kind: "zones" })
    ));
}

// ============================================================================
// change: caller-supplied changeset, local info untouched
// ============================================================================

#[tokio::test]
async fn test_change_puts_the_changeset_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/servers/localhost/zones/example.com."))
        .and(body_json(json!({"kind": "Master"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resource = Resource::new(
        create_http(&mock_server),
        "zones",
        "servers/localhost/zones/example.com.",
    )
    .with_info(object(&[("name", json!("example.com.")), ("kind", json!("Native"))]));

    resource.change(json!({"kind": "Master"})).await.unwrap();

    // The changeset is not merged into the local cache
    assert_eq!(resource.info()["kind"], "Native");
}

// ============================================================================
// delete: remote removal, stale local cache
// ============================================================================

#[tokio::test]
async fn test_delete_leaves_local_info_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/servers/localhost/zones/example.com."))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resource = Resource::new(
        create_http(&mock_server),
        "zones",
        "servers/localhost/zones/example.com.",
    )
    .with_info(object(&[("name", json!("example.com."))]));

    let before = resource.info().clone();
    let deleted = resource.delete().await.unwrap();

    assert_eq!(deleted, json!({}));
    assert_eq!(resource.info(), &before);
}

// ============================================================================
// Failure propagation
// ============================================================================

#[tokio::test]
async fn test_transport_failures_propagate_unmodified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/servers/localhost/zones/missing.example."))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            json!({"error": "Could not find domain 'missing.example.'"}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut resource = Resource::new(
        create_http(&mock_server),
        "zones",
        "servers/localhost/zones/missing.example.",
    )
    .with_info(object(&[("name", json!("missing.example."))]));

    let result = resource.get().await;

    match result {
        Err(ResourceError::Http(e)) => {
            assert_eq!(e.status_code(), Some(404));
            assert!(e.to_string().contains("Could not find domain"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }

    // No speculative mutation before the call succeeded
    assert_eq!(
        Value::Object(resource.info().clone()),
        json!({"name": "missing.example."})
    );
}
