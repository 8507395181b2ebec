// Wire-level tests for the console client: paths, bodies, envelope
// normalization, and transport error triage.

use std::{sync::Arc, time::Duration};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

use flowconf_api::{ConfigScope, SensorConfig};
use flowconf_client::{ClientError, ConsoleClient, HttpClientConfig, SessionTokens};

fn client_for(server: &MockServer) -> ConsoleClient {
    ConsoleClient::from_server_addr(&server.uri()).unwrap()
}

fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "message": "success",
        "data": data,
    }))
}

#[tokio::test]
async fn login_hits_auth_endpoint_and_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(envelope(json!({"username": "admin", "token": "logged_in"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.login("admin", "secret", false).await.unwrap();
    assert_eq!(result.username, "admin");
    assert_eq!(result.token, "logged_in");
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn login_with_remember_uses_persistent_slot() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(envelope(json!({"username": "admin", "token": "tok"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.login("admin", "secret", true).await.unwrap();
    // the persistent slot wins over anything session-scoped
    client.session().store_session("other".to_string());
    assert_eq!(client.session().token().as_deref(), Some("tok"));
}

#[tokio::test]
async fn requests_carry_bearer_token_when_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(envelope(json!({
            "zookeeper": {"connected": true, "state": "CONNECTED", "servers": ["zk1:2181"]},
            "database": {"connected": true},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(SessionTokens::new());
    session.store_persistent("tok-123".to_string());
    let client = ConsoleClient::new(HttpClientConfig::new(&server.uri()), session).unwrap();

    let status = client.system_status().await.unwrap();
    assert!(status.zookeeper.connected);
    assert_eq!(status.zookeeper.servers, vec!["zk1:2181"]);
}

#[tokio::test]
async fn application_error_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 1, "message": "bad input"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).get_settings().await.unwrap_err();
    match err {
        ClientError::Api { code, message } => {
            assert_eq!(code, 1);
            assert_eq!(message, "bad input");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn application_error_without_message_uses_generic_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1})))
        .mount(&server)
        .await;

    let err = client_for(&server).get_settings().await.unwrap_err();
    assert_eq!(err.to_string(), flowconf_client::error::GENERIC_FAILURE);
}

#[tokio::test]
async fn client_side_timeout_yields_timeout_diagnostic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/status"))
        .respond_with(envelope(json!(null)).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = HttpClientConfig::new(&server.uri()).with_timeouts(5000, 50);
    let client = ConsoleClient::new(config, Arc::new(SessionTokens::new())).unwrap();

    let err = client.system_status().await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout));
    assert_eq!(err.to_string(), flowconf_client::error::TIMEOUT_HINT);
}

#[tokio::test]
async fn refused_connection_yields_unreachable_diagnostic() {
    // Nothing listens on the discard port
    let client = ConsoleClient::from_server_addr("http://127.0.0.1:9").unwrap();
    let err = client.system_status().await.unwrap_err();
    assert!(matches!(err, ClientError::Unreachable));
    assert_eq!(err.to_string(), flowconf_client::error::UNREACHABLE_HINT);
}

#[tokio::test]
async fn other_transport_failures_pass_through_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).get_settings().await.unwrap_err();
    match &err {
        ClientError::Http(_) => {
            assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
        }
        other => panic!("expected passthrough error, got {other:?}"),
    }
}

#[tokio::test]
async fn history_limit_defaults_to_twenty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/config/global/history"))
        .and(query_param("limit", "20"))
        .respond_with(envelope(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let history = client_for(&server)
        .global_config_history(None)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn history_limit_passes_through_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/config/cluster/prod/history"))
        .and(query_param("limit", "5"))
        .respond_with(envelope(json!([{
            "id": 7,
            "scope": "cluster",
            "cluster_name": "prod",
            "version": 3,
            "config_json": serde_json::to_string(&SensorConfig::default()).unwrap(),
            "created_at": "2024-05-01T12:00:00Z",
            "created_by": "ops",
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let history = client_for(&server)
        .cluster_config_history("prod", Some(5))
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].version, 3);
    assert_eq!(history[0].scope, ConfigScope::Cluster);
    assert_eq!(history[0].config().unwrap(), SensorConfig::default());
}

#[tokio::test]
async fn node_paths_interpolate_both_identifiers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/config/cluster/prod/node/node-1"))
        .respond_with(envelope(json!(null)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/clusters/prod/nodes"))
        .respond_with(envelope(json!(["node-1", "node-2"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    // Unsaved scope instances read back as None
    assert!(client.node_config("prod", "node-1").await.unwrap().is_none());
    assert_eq!(
        client.list_nodes("prod").await.unwrap(),
        vec!["node-1", "node-2"]
    );
}

#[tokio::test]
async fn save_sends_caller_supplied_author_verbatim() {
    let server = MockServer::start().await;
    let config = SensorConfig::default();
    let expected_body = json!({
        "config": serde_json::to_value(&config).unwrap(),
        "created_by": "someone-else",
    });
    Mock::given(method("POST"))
        .and(path("/api/v1/config/cluster/prod"))
        .and(body_json(&expected_body))
        .respond_with(envelope(json!({"version": 4, "cluster": "prod"})))
        .expect(1)
        .mount(&server)
        .await;

    // The author is attributed, not derived from the session
    let saved = client_for(&server)
        .save_cluster_config("prod", &config, "someone-else")
        .await
        .unwrap();
    assert_eq!(saved.version, 4);
    assert_eq!(saved.cluster.as_deref(), Some("prod"));
}

#[tokio::test]
async fn rollback_omits_identifiers_for_global_scope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/config/rollback"))
        .and(body_json(json!({
            "scope": "global",
            "version": 2,
            "created_by": "admin",
        })))
        .respond_with(envelope(json!({"new_version": 6})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .rollback_config(ConfigScope::Global, None, None, 2, "admin")
        .await
        .unwrap();
    assert_eq!(result.new_version, 6);
}

#[tokio::test]
async fn rollback_carries_identifiers_for_node_scope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/config/rollback"))
        .and(body_json(json!({
            "scope": "node",
            "cluster_name": "prod",
            "node_id": "node-1",
            "version": 9,
            "created_by": "ops",
        })))
        .respond_with(envelope(json!({"new_version": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .rollback_config(ConfigScope::Node, Some("prod"), Some("node-1"), 9, "ops")
        .await
        .unwrap();
    assert_eq!(result.new_version, 12);
}

#[tokio::test]
async fn global_config_round_trip() {
    let server = MockServer::start().await;
    let config = SensorConfig::default();
    Mock::given(method("GET"))
        .and(path("/api/v1/config/global"))
        .respond_with(envelope(json!({
            "config": serde_json::to_value(&config).unwrap(),
            "version": 3,
            "created_at": "2024-05-01T12:00:00Z",
            "created_by": "admin",
        })))
        .mount(&server)
        .await;

    let doc = client_for(&server).global_config().await.unwrap().unwrap();
    assert_eq!(doc.version, 3);
    assert_eq!(doc.created_by, "admin");
    assert_eq!(doc.config, config);
    assert!(doc.cluster.is_none());
}

#[tokio::test]
async fn supported_fields_and_default_config_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/fields"))
        .respond_with(envelope(json!([
            {"name": "sourceIPv4Address", "label": "Source IP"},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/config/default"))
        .respond_with(envelope(
            serde_json::to_value(SensorConfig::default()).unwrap(),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let fields = client.supported_fields().await.unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "sourceIPv4Address");
    assert_eq!(client.default_config().await.unwrap(), SensorConfig::default());
}
