//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use folio_api::error::{AppError, INTERNAL_ERROR_MESSAGE};
use folio_core::error::CoreError;
use folio_db::StoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: "0190b2a4-0000-7000-8000-000000000000".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(
        json["error"],
        "Project with id 0190b2a4-0000-7000-8000-000000000000 not found"
    );
}

#[tokio::test]
async fn invalid_identifier_returns_400() {
    let err = AppError::Core(CoreError::InvalidIdentifier(
        "'abc' is not a valid project id".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_IDENTIFIER");
    assert_eq!(json["error"], "'abc' is not a valid project id");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("title must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title must not be empty");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn store_unavailable_returns_503() {
    for err in [
        AppError::Core(CoreError::StoreUnavailable),
        AppError::Store(StoreError::Unavailable),
        AppError::Store(StoreError::Database(sqlx::Error::PoolClosed)),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["code"], "STORE_UNAVAILABLE");
    }
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let err = AppError::InternalError("secret connection string leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn unexpected_database_error_returns_500() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::Protocol(
        "unexpected message".into(),
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
}
