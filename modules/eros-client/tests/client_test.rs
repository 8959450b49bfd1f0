//! Core request path against a local stub of the Eros API.

use std::time::Duration;

use eros_client::{Endpoint, Eros, ErosConfig, ErosError, Platform, Resource};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Eros {
    Eros::with_config(ErosConfig::new("test-key").with_base_url(&server.uri())).unwrap()
}

#[tokio::test]
async fn json_body_is_returned_unchanged() {
    let server = MockServer::start().await;
    let body = json!({ "username": "nasa", "full_name": "NASA", "nested": { "a": [1, 2] } });

    Mock::given(method("GET"))
        .and(path("/instagram/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let eros = client_for(&server);
    let endpoint: Endpoint = "instagram/user".parse().unwrap();
    let data = eros.request(&endpoint, &[("username", "nasa")]).await.unwrap();

    assert_eq!(data, body);
}

#[tokio::test]
async fn sends_api_key_header_without_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tiktok/user"))
        .and(header("api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "khaby.lame" })))
        .expect(1)
        .mount(&server)
        .await;

    let eros = client_for(&server);
    let endpoint = Endpoint::new(Platform::TikTok, Resource::User);
    eros.request(&endpoint, &[("username", "khaby.lame")]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/tiktok/user");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn params_go_in_query_string_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tiktok/user"))
        .and(query_param("username", "khaby.lame"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "khaby.lame" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ErosConfig::new("test-key")
        .with_base_url(&server.uri())
        .with_params_in_query();
    let eros = Eros::with_config(config).unwrap();
    eros.tiktok().get_user("khaby.lame").await.unwrap();
}

#[tokio::test]
async fn configured_timeout_applies_to_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instagram/feed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "posts": [] }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ErosConfig::new("test-key")
        .with_base_url(&server.uri())
        .with_timeout(Duration::from_millis(50));
    let eros = Eros::with_config(config).unwrap();
    let err = eros.instagram().get_feed("nasa").await.unwrap_err();

    match err {
        ErosError::Network(source) => assert!(source.is_timeout()),
        other => panic!("expected Network error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_data_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/twitter/post"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let eros = client_for(&server);
    let endpoint = Endpoint::new(Platform::Twitter, Resource::Post);
    let err = eros
        .request(&endpoint, &[("url", "https://x.com/abc/status/1")])
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "twitter post **https://x.com/abc/status/1** not found"
    );
}

#[tokio::test]
async fn non_json_body_with_success_status_is_still_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pinterest/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gone</html>"))
        .mount(&server)
        .await;

    let eros = client_for(&server);
    let err = eros.pinterest().get_user("nobody").await.unwrap_err();

    assert_eq!(err.message(), "pinterest user **nobody** not found");
}

#[tokio::test]
async fn json_error_body_is_passed_through_regardless_of_status() {
    let server = MockServer::start().await;
    let body = json!({ "detail": "rate limited" });

    Mock::given(method("GET"))
        .and(path("/threads/user"))
        .respond_with(ResponseTemplate::new(429).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let eros = client_for(&server);
    let endpoint = Endpoint::new(Platform::Threads, Resource::User);
    let data = eros.request(&endpoint, &[("username", "zuck")]).await.unwrap();

    assert_eq!(data, body);
}

#[tokio::test]
async fn server_error_with_text_body_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/feed"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let eros = client_for(&server);
    let err = eros.youtube().get_feed("UC123").await.unwrap_err();

    match err {
        ErosError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_required_field_is_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instagram/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "full_name": "NASA" })))
        .mount(&server)
        .await;

    let eros = client_for(&server);
    let err = eros.instagram().get_user("nasa").await.unwrap_err();

    match err {
        ErosError::Schema { endpoint, source } => {
            assert_eq!(endpoint, "instagram/user");
            assert!(source.to_string().contains("username"));
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    // Nothing listens on port 1.
    let eros = Eros::with_config(ErosConfig::new("k").with_base_url("http://127.0.0.1:1")).unwrap();
    let err = eros.twitter().get_user("jack").await.unwrap_err();

    assert!(matches!(err, ErosError::Network(_)));
}

#[tokio::test]
async fn repeated_calls_are_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instagram/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "nasa" })))
        .expect(2)
        .mount(&server)
        .await;

    let instagram = client_for(&server).instagram();
    instagram.get_user("nasa").await.unwrap();
    instagram.get_user("nasa").await.unwrap();
}

#[test]
fn malformed_endpoint_strings_are_rejected_before_io() {
    let err = "instagram".parse::<Endpoint>().unwrap_err();
    assert!(matches!(err, ErosError::MalformedEndpoint(_)));

    let err = "a/b/c".parse::<Endpoint>().unwrap_err();
    assert_eq!(err.to_string(), "Malformed endpoint: \"a/b/c\"");
}
