use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use agora_token_service::app::build_router;
use agora_token_service::services::rtc::signer::{AgoraSigner, RtcSigner, SignerError};
use agora_token_service::services::rtc::token_service::{PRIVILEGE_TTL_SECONDS, RtcTokenService};
use agora_token_service::state::AppState;

// Agora's documented sample credentials; any hex pair works for signing.
const TEST_APP_ID: &str = "970CA35de60c44645bbae8a215061b33";
const TEST_APP_CERTIFICATE: &str = "5CFd2fd1755d40ecb72977518be15d3b";

const MISSING_PARAMS: &str = "Missing required parameters: channelName and uid are required";

fn test_app_with(signer: Arc<dyn RtcSigner>) -> Router {
    let rtc = RtcTokenService::new(
        TEST_APP_ID.to_string(),
        TEST_APP_CERTIFICATE.to_string(),
        signer,
    );
    build_router(AppState::new(Arc::new(rtc)))
}

fn test_app() -> Router {
    test_app_with(Arc::new(AgoraSigner))
}

async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

struct FailingSigner;

impl RtcSigner for FailingSigner {
    fn build_token_with_uid(
        &self,
        _app_id: &str,
        _app_certificate: &str,
        _channel_name: &str,
        _uid: u32,
        _role: u32,
        _privilege_expired_ts: u32,
    ) -> Result<String, SignerError> {
        Err(SignerError::BuildFailed(
            "signing backend unavailable".to_string(),
        ))
    }
}

#[tokio::test]
async fn issues_token_for_string_uid() {
    let before = chrono::Utc::now().timestamp();
    let (status, body) = post_json(
        test_app(),
        json!({"channelName": "room1", "uid": "42"}),
    )
    .await;
    let after = chrono::Utc::now().timestamp();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["channelName"], "room1");
    assert_eq!(body["uid"], "42");
    assert_eq!(body["appId"], TEST_APP_ID);
    assert!(!body["token"].as_str().unwrap().is_empty());

    // Expiry is request time + the fixed window, allowing for test clock
    // skew.
    let expires = body["privilegeExpiredTs"].as_i64().unwrap();
    assert!(expires >= before + i64::from(PRIVILEGE_TTL_SECONDS));
    assert!(expires <= after + i64::from(PRIVILEGE_TTL_SECONDS) + 2);
}

#[tokio::test]
async fn issues_token_for_numeric_uid() {
    let (status, body) = post_json(
        test_app(),
        json!({"channelName": "room1", "uid": 42}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // A numeric uid echoes back as a number, not a string.
    assert_eq!(body["uid"], 42);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_channel_name_is_rejected() {
    let (status, body) = post_json(test_app(), json!({"uid": "42"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], MISSING_PARAMS);
}

#[tokio::test]
async fn missing_uid_is_rejected() {
    let (status, body) = post_json(test_app(), json!({"channelName": "room1"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], MISSING_PARAMS);
}

#[tokio::test]
async fn empty_fields_are_rejected() {
    let (status, body) = post_json(
        test_app(),
        json!({"channelName": "", "uid": "42"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], MISSING_PARAMS);

    let (status, body) = post_json(
        test_app(),
        json!({"channelName": "room1", "uid": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], MISSING_PARAMS);
}

#[tokio::test]
async fn non_numeric_uid_is_rejected() {
    let (status, body) = post_json(
        test_app(),
        json!({"channelName": "room1", "uid": "abc"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("uid"));
}

#[tokio::test]
async fn out_of_range_uid_is_rejected() {
    let (status, _body) = post_json(
        test_app(),
        json!({"channelName": "room1", "uid": 4_294_967_296_u64}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signer_failure_maps_to_server_error() {
    let (status, body) = post_json(
        test_app_with(Arc::new(FailingSigner)),
        json!({"channelName": "room1", "uid": "42"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate token");
    assert!(!body["details"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn health_returns_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/generate-token")
                .header("origin", "https://example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
