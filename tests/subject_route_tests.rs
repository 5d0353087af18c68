use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;

use jwt_subject::{app::build_router, config::Config};

fn app() -> Router {
    build_router(&Config::default())
}

fn token_for(claims: &Value) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(b"route-test-secret"),
    )
    .expect("sign test token")
}

async fn get(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let resp = app
        .oneshot(builder.body(Body::empty()).expect("failed to build request"))
        .await
        .expect("request failed");

    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("json body");
    (status, headers, json)
}

#[tokio::test]
async fn health_reports_ok_with_request_id() {
    let (status, headers, body) = get(app(), "/api/v1/health", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "jwt-subject");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let (_, headers, _) =
        get(app(), "/api/v1/health", &[("x-request-id", "req-123")]).await;
    assert_eq!(headers["x-request-id"], "req-123");
}

#[tokio::test]
async fn subject_from_query_token() {
    let token = token_for(&json!({"sub": "alice"}));
    let uri = format!("/api/v1/subject?token={token}");

    let (status, headers, body) = get(app(), &uri, &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["x-jwt-sub"], "alice");
    assert_eq!(body, json!({"sub": "alice"}));
}

#[tokio::test]
async fn subject_from_api_key_header() {
    let token = token_for(&json!({"sub": "alice"}));

    let (status, headers, body) =
        get(app(), "/api/v1/subject", &[("x-api-key", &token)]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["x-jwt-sub"], "alice");
    assert_eq!(body["sub"], "alice");
}

#[tokio::test]
async fn query_token_wins_over_api_key() {
    let query = token_for(&json!({"sub": "query-user"}));
    let header = token_for(&json!({"sub": "header-user"}));
    let uri = format!("/api/v1/subject?token={query}");

    let (_, headers, body) = get(app(), &uri, &[("x-api-key", &header)]).await;

    assert_eq!(headers["x-jwt-sub"], "query-user");
    assert_eq!(body["sub"], "query-user");
}

#[tokio::test]
async fn original_uri_query_is_used_behind_proxy() {
    let token = token_for(&json!({"sub": "proxied"}));
    let original = format!("/files/report.pdf?token={token}");

    let (_, headers, body) = get(
        app(),
        "/api/v1/subject",
        &[("x-original-uri", &original)],
    )
    .await;

    assert_eq!(headers["x-jwt-sub"], "proxied");
    assert_eq!(body["sub"], "proxied");
}

#[tokio::test]
async fn missing_or_malformed_token_is_ok_and_empty() {
    let no_sub = format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#),
        URL_SAFE_NO_PAD.encode(b"{}")
    );

    for uri in [
        "/api/v1/subject".to_string(),
        "/api/v1/subject?token=not-a-jwt".to_string(),
        format!("/api/v1/subject?token={no_sub}"),
    ] {
        let (status, headers, body) = get(app(), &uri, &[]).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(headers["x-jwt-sub"], "", "{uri}");
        assert_eq!(body["sub"], "", "{uri}");
    }
}

#[tokio::test]
async fn subject_header_name_is_configurable() {
    let config = Config::from_lookup(|key| {
        (key == "SUBJECT_RESPONSE_HEADER").then(|| "x-user".to_string())
    })
    .expect("config");
    let token = token_for(&json!({"sub": "dave"}));

    let (_, headers, _) = get(
        build_router(&config),
        "/api/v1/subject",
        &[("x-api-key", &token)],
    )
    .await;

    assert_eq!(headers["x-user"], "dave");
    assert!(!headers.contains_key("x-jwt-sub"));
}

#[tokio::test]
async fn sub_that_is_not_a_header_value_is_sent_empty_in_header_only() {
    let token = token_for(&json!({"sub": "line\nbreak"}));

    let (status, headers, body) =
        get(app(), "/api/v1/subject", &[("x-api-key", &token)]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["x-jwt-sub"], "");
    assert_eq!(body["sub"], "line\nbreak");
}
