//! Integration tests for the shared request/response engine, driven
//! against a local mock server and raw sockets for the transport failures.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;
use url::Url;

use tomtom_apis::client::{ApiClient, ApiOptions};
use tomtom_apis::Error;

const API_KEY: &str = "test-api-key";

fn client_for(server: &mockito::ServerGuard, options: ApiOptions) -> ApiClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    ApiClient::with_base_url(options, Url::parse(&server.url()).unwrap()).unwrap()
}

#[tokio::test]
async fn get_includes_the_credential_without_explicit_params() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/test/endpoint")
        .match_query(Matcher::UrlEncoded("key".into(), API_KEY.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    let response = api.get("/test/endpoint", None, None).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.structure().unwrap()["ok"], json!(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn user_agent_carries_the_crate_version() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/test/endpoint")
        .match_header(
            "user-agent",
            format!("TomTomApiRust/{}", env!("CARGO_PKG_VERSION")).as_str(),
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    api.get("/test/endpoint", None, None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn gzip_option_sends_accept_encoding() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/test/endpoint")
        .match_header("accept-encoding", Matcher::Regex("gzip".into()))
        .match_query(Matcher::Any)
        .with_status(200)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY).with_gzip_compression(true));
    api.get("/test/endpoint", None, None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn tracking_option_attaches_a_uuid_per_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/test/endpoint")
        .match_header(
            "tracking-id",
            Matcher::Regex(
                "^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$".into(),
            ),
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .expect(2)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY).with_tracking_id(true));
    api.get("/test/endpoint", None, None).await.unwrap();
    api.get("/test/endpoint", None, None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn post_forwards_the_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/test/endpoint")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"route": {"points": []}})))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"accepted":true}"#)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    let body = json!({"route": {"points": []}});
    let response = api.post("/test/endpoint", None, None, &body).await.unwrap();

    assert_eq!(response.structure().unwrap()["accepted"], json!(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn put_and_delete_verbs_are_dispatched() {
    let mut server = mockito::Server::new_async().await;
    let put_mock = server
        .mock("PUT", "/test/resource")
        .match_query(Matcher::Any)
        .with_status(200)
        .create_async()
        .await;
    let delete_mock = server
        .mock("DELETE", "/test/resource")
        .match_query(Matcher::Any)
        .with_status(200)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    api.put("/test/resource", None, None, &json!({}))
        .await
        .unwrap();
    api.delete("/test/resource", None, None).await.unwrap();

    put_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn status_4xx_is_a_client_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/client/error")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("Forbidden")
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    let err = api.get("/client/error", None, None).await.unwrap_err();

    match err {
        Error::Client { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Forbidden");
        }
        other => panic!("expected Client error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_5xx_is_a_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/server/error")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    let err = api.get("/server/error", None, None).await.unwrap_err();
    assert!(matches!(err, Error::Server { status: 502, .. }));
}

#[tokio::test]
async fn other_non_success_status_is_a_generic_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/not/modified")
        .match_query(Matcher::Any)
        .with_status(304)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    let err = api.get("/not/modified", None, None).await.unwrap_err();
    assert!(matches!(err, Error::GenericApi { status: 304, .. }));
}

#[tokio::test]
async fn unresponsive_server_is_a_timeout() {
    // Accept the connection but never answer.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _socket = listener.accept().await;
        tokio::time::sleep(Duration::from_secs(60)).await;
    });

    let options = ApiOptions::new(API_KEY).with_timeout(Duration::from_millis(200));
    let api = ApiClient::with_base_url(options, Url::parse(&format!("http://{addr}")).unwrap())
        .unwrap();

    let err = api.get("/slow/endpoint", None, None).await.unwrap_err();
    assert!(matches!(err, Error::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    // Bind to grab a free port, then drop the listener before connecting.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::with_base_url(
        ApiOptions::new(API_KEY),
        Url::parse(&format!("http://{addr}")).unwrap(),
    )
    .unwrap();

    let err = api.get("/refused", None, None).await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)), "got {err:?}");
}

#[tokio::test]
async fn close_is_idempotent_and_calls_after_close_fail_fast() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/test/endpoint")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let api = client_for(&server, ApiOptions::new(API_KEY));
    api.close();
    api.close();

    let err = api.get("/test/endpoint", None, None).await.unwrap_err();
    assert!(matches!(err, Error::Closed));
    // Nothing reached the wire.
    mock.assert_async().await;
}

#[tokio::test]
async fn shared_sessions_observe_close() {
    let server = mockito::Server::new_async().await;
    let api = client_for(&server, ApiOptions::new(API_KEY));
    let shared = api.clone();

    api.close();
    let err = shared.get("/test/endpoint", None, None).await.unwrap_err();
    assert!(matches!(err, Error::Closed));
}
