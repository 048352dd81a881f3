use bitdefender_msp::error::{ApiError, AppError};
use reqwest::StatusCode;
use serde_json::json;

fn body(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_api_error_display() {
    let error = ApiError::new("not found", 42, 404);
    assert_eq!(error.to_string(), "[404] 42: not found");
}

#[test]
fn test_app_error_api_display_matches_api_error() {
    let error = AppError::Api(ApiError::new("Invalid product", 1003, 400));
    assert_eq!(error.to_string(), "[400] 1003: Invalid product");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("missing email".to_string());
    assert_eq!(error.to_string(), "invalid input: missing email");
}

#[test]
fn test_api_error_from_body() {
    let error = ApiError::from_body(
        &body(json!({"message": "not found", "code": 42})),
        StatusCode::NOT_FOUND,
    );
    assert_eq!(error, ApiError::new("not found", 42, 404));
}

#[test]
fn test_api_error_from_empty_body_uses_defaults() {
    let error = ApiError::from_body(&body(json!({})), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.message, "Unknown error");
    assert_eq!(error.error_code, 0);
    assert_eq!(error.status_code, 500);
}

#[test]
fn test_api_error_from_body_with_odd_types() {
    let error = ApiError::from_body(
        &body(json!({"message": 12, "code": "E1"})),
        StatusCode::BAD_REQUEST,
    );
    assert_eq!(error.message, "12");
    assert_eq!(error.error_code, 0);
}

#[test]
fn test_api_error_code_as_numeric_string_or_whole_float() {
    let from_string = ApiError::from_body(
        &body(json!({"message": "bad", "code": "42"})),
        StatusCode::BAD_REQUEST,
    );
    assert_eq!(from_string.error_code, 42);

    let from_float = ApiError::from_body(
        &body(json!({"message": "bad", "code": 42.0})),
        StatusCode::BAD_REQUEST,
    );
    assert_eq!(from_float.error_code, 42);

    let fractional = ApiError::from_body(
        &body(json!({"message": "bad", "code": 4.5})),
        StatusCode::BAD_REQUEST,
    );
    assert_eq!(fractional.error_code, 0);
}

#[test]
fn test_app_error_helpers() {
    let api: AppError = ApiError::new("forbidden", 7, 403).into();
    assert!(api.is_api_error());
    assert_eq!(api.status_code(), Some(403));
    assert_eq!(api.as_api_error().map(|e| e.error_code), Some(7));

    let local = AppError::InvalidInput("x".to_string());
    assert!(!local.is_api_error());
    assert_eq!(local.status_code(), None);
    assert!(local.as_api_error().is_none());
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_source() {
    use std::error::Error;

    let api = AppError::Api(ApiError::new("boom", 1, 500));
    assert!(api.source().is_some());

    let local = AppError::InvalidInput("x".to_string());
    assert!(local.source().is_none());
}
