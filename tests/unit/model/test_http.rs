use bitdefender_msp::application::config::Config;
use bitdefender_msp::error::AppError;
use bitdefender_msp::model::http::HttpClient;
use mockito::{Matcher, Server};
use reqwest::Method;
use serde_json::json;

fn session(url: &str) -> HttpClient {
    HttpClient::new(&Config::with_api_key("test-key").with_base_url(url)).unwrap()
}

#[tokio::test]
async fn sends_fixed_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/ping")
        .match_header("authorization", "ApiKey test-key")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .create_async()
        .await;

    let result = session(&server.url()).get("/v1/ping", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.get("ok"), Some(&json!(true)));
}

#[tokio::test]
async fn base_url_trailing_slash_is_ignored() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/ping")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = session(&format!("{}/", server.url()));
    assert!(!client.base_url().ends_with('/'));
    client.get("v1/ping", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_success_body_returns_empty_map() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/thing")
        .with_status(200)
        .with_body("OK")
        .create_async()
        .await;

    let result = session(&server.url()).delete("/v1/thing").await.unwrap();

    mock.assert_async().await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn no_content_returns_empty_map() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/thing")
        .with_status(204)
        .create_async()
        .await;

    let result = session(&server.url()).delete("/v1/thing").await.unwrap();

    mock.assert_async().await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn error_status_becomes_api_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "not found", "code": 42}"#)
        .expect(1)
        .create_async()
        .await;

    let err = session(&server.url())
        .get("/v1/missing", None)
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        AppError::Api(e) => {
            assert_eq!(e.message, "not found");
            assert_eq!(e.error_code, 42);
            assert_eq!(e.status_code, 404);
            assert_eq!(e.to_string(), "[404] 42: not found");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn error_without_json_body_uses_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/thing")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .expect(1)
        .create_async()
        .await;

    let err = session(&server.url())
        .post("/v1/thing", json!({"a": 1}))
        .await
        .unwrap_err();

    mock.assert_async().await;
    let api = err.as_api_error().expect("api error");
    assert_eq!(api.message, "Unknown error");
    assert_eq!(api.error_code, 0);
    assert_eq!(api.status_code, 502);
}

#[tokio::test]
async fn redirect_status_is_not_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/moved")
        .with_status(304)
        .create_async()
        .await;

    let err = session(&server.url())
        .get("/v1/moved", None)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.status_code(), Some(304));
}

#[tokio::test]
async fn sends_query_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v1/thing")
        .match_query(Matcher::UrlEncoded("x".into(), "1".into()))
        .match_body(Matcher::Json(json!({"suspended": true})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let query = vec![("x".to_string(), "1".to_string())];
    session(&server.url())
        .request(
            Method::PATCH,
            "/v1/thing",
            Some(&query),
            Some(json!({"suspended": true})),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    // Nothing listens on port 1
    let err = session("http://127.0.0.1:1")
        .get("/v1/subscribers", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.status_code(), None);
}

#[test]
fn invalid_api_key_is_rejected() {
    let result = HttpClient::new(&Config::with_api_key("bad\nkey"));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}
