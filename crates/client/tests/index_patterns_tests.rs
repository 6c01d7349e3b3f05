//! Index-pattern creation flow tests.
//!
//! # Invariants
//! - "No time field" is persisted as `timeFieldName: null`
//! - `defaultIndex` is written only when unset
//! - A pattern matching no index fails with MissingIndices before anything is written
//! - Creating a pattern invalidates its cached copy

mod common;

use common::*;
use kbn_client::{CreateIndexPatternParams, TimeFieldOption};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

const CREATED_ID: &str = "8a2c6f10-f0a1-11e7-9d0b-3d3c1f0e5a77";

async fn mount_field_caps(server: &MockServer, pattern: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/_field_caps", pattern)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("field_caps/logs.json")),
        )
        .mount(server)
        .await;
}

async fn mount_settings(server: &MockServer, fixture: &str) {
    Mock::given(method("GET"))
        .and(path("/api/kibana/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

fn params(time_field: &str) -> CreateIndexPatternParams {
    CreateIndexPatternParams {
        id: None,
        name: "logs-*".to_string(),
        time_field: TimeFieldOption::from_value(time_field),
    }
}

#[tokio::test]
async fn test_create_without_time_field_stores_null() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;
    mount_settings(&mock_server, "settings/with_default_index.json").await;

    Mock::given(method("POST"))
        .and(path("/api/saved_objects/index-pattern"))
        .and(header("kbn-xsrf", "true"))
        .and(body_json(json!({
            "attributes": {"title": "logs-*", "timeFieldName": null}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("saved_objects/created.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let id = client.create_index_pattern(&params("-1")).await.unwrap();
    assert_eq!(id.as_deref(), Some(CREATED_ID));
}

#[tokio::test]
async fn test_create_with_time_field() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;
    mount_settings(&mock_server, "settings/with_default_index.json").await;

    Mock::given(method("POST"))
        .and(path("/api/saved_objects/index-pattern"))
        .and(body_json(json!({
            "attributes": {"title": "logs-*", "timeFieldName": "@timestamp"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("saved_objects/created.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let id = client.create_index_pattern(&params("@timestamp")).await.unwrap();
    assert_eq!(id.as_deref(), Some(CREATED_ID));
}

#[tokio::test]
async fn test_create_sets_default_index_when_unset() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;
    mount_settings(&mock_server, "settings/without_default_index.json").await;

    Mock::given(method("POST"))
        .and(path("/api/saved_objects/index-pattern"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("saved_objects/created.json")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/kibana/settings"))
        .and(header("kbn-xsrf", "true"))
        .and(body_json(json!({"changes": {"defaultIndex": CREATED_ID}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"settings": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.create_index_pattern(&params("@timestamp")).await.unwrap();
}

#[tokio::test]
async fn test_create_keeps_existing_default_index() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;
    mount_settings(&mock_server, "settings/with_default_index.json").await;

    Mock::given(method("POST"))
        .and(path("/api/saved_objects/index-pattern"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("saved_objects/created.json")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/kibana/settings"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.create_index_pattern(&params("@timestamp")).await.unwrap();
}

#[tokio::test]
async fn test_create_with_explicit_id() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;
    mount_settings(&mock_server, "settings/with_default_index.json").await;

    Mock::given(method("POST"))
        .and(path("/api/saved_objects/index-pattern/my-pattern"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "my-pattern",
            "type": "index-pattern",
            "attributes": {"title": "logs-*", "timeFieldName": null}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = CreateIndexPatternParams {
        id: Some("my-pattern".to_string()),
        ..params("-1")
    };
    let id = client.create_index_pattern(&params).await.unwrap();
    assert_eq!(id.as_deref(), Some("my-pattern"));
}

#[tokio::test]
async fn test_missing_indices_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nope-*/_field_caps"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = CreateIndexPatternParams {
        id: None,
        name: "nope-*".to_string(),
        time_field: TimeFieldOption::NoTimeField,
    };
    let err = client.create_index_pattern(&params).await.unwrap_err();
    assert!(err.is_missing_indices());
}

#[tokio::test]
async fn test_no_id_returned_skips_follow_up() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;

    Mock::given(method("POST"))
        .and(path("/api/saved_objects/index-pattern"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    Mock::given(path("/api/kibana/settings"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.create_index_pattern(&params("-1")).await.unwrap(), None);
}

#[tokio::test]
async fn test_conflict_is_not_recoverable() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;

    Mock::given(method("POST"))
        .and(path("/api/saved_objects/index-pattern/taken"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "statusCode": 409,
            "error": "Conflict",
            "message": "Saved object [index-pattern/taken] conflict"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = CreateIndexPatternParams {
        id: Some("taken".to_string()),
        ..params("-1")
    };
    let err = client.create_index_pattern(&params).await.unwrap_err();
    assert!(!err.is_missing_indices());
    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Saved object [index-pattern/taken] conflict");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_index_pattern_is_cached_until_created() {
    let mock_server = MockServer::start().await;
    mount_field_caps(&mock_server, "logs-*").await;
    mount_settings(&mock_server, "settings/with_default_index.json").await;

    Mock::given(method("GET"))
        .and(path(format!("/api/saved_objects/index-pattern/{}", CREATED_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("saved_objects/index_pattern.json")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/saved_objects/index-pattern/{}", CREATED_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("saved_objects/created.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let first = client.get_index_pattern(CREATED_ID).await.unwrap();
    let second = client.get_index_pattern(CREATED_ID).await.unwrap();
    assert_eq!(first, second);

    let params = CreateIndexPatternParams {
        id: Some(CREATED_ID.to_string()),
        ..params("@timestamp")
    };
    client.create_index_pattern(&params).await.unwrap();

    let third = client.get_index_pattern(CREATED_ID).await.unwrap();
    assert_eq!(third.attributes.title, "logs-*");
}

#[tokio::test]
async fn test_get_index_pattern_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/saved_objects/index-pattern/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "error": "Not Found",
            "message": "Saved object [index-pattern/gone] not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_index_pattern("gone").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}
