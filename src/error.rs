/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_ERROR_CODE, DEFAULT_ERROR_MESSAGE};
use crate::model::responses::JsonMap;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Error reported by the MSP API for a non-success HTTP response
///
/// Carries the vendor message, the vendor error code and the HTTP status verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Message from the response body (`message` field)
    pub message: String,
    /// API error code from the response body (`code` field)
    pub error_code: i64,
    /// HTTP status code of the response
    pub status_code: u16,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(message: impl Into<String>, error_code: i64, status_code: u16) -> Self {
        Self {
            message: message.into(),
            error_code,
            status_code,
        }
    }

    /// Builds an API error from a parsed response body and its HTTP status
    ///
    /// Missing fields fall back to `"Unknown error"` and `0`. A `code` sent as a
    /// numeric string or a whole float is accepted.
    pub fn from_body(body: &JsonMap, status: StatusCode) -> Self {
        let message = match body.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => DEFAULT_ERROR_MESSAGE.to_string(),
            Some(other) => other.to_string(),
        };
        let error_code = body
            .get("code")
            .and_then(parse_error_code)
            .unwrap_or(DEFAULT_ERROR_CODE);

        Self::new(message, error_code, status.as_u16())
    }
}

fn parse_error_code(code: &Value) -> Option<i64> {
    match code {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.status_code, self.error_code, self.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The API answered with a non-success status
    Api(ApiError),
    /// Arguments were rejected locally, before any request was sent
    InvalidInput(String),
    /// Transport failure (DNS, connection, TLS, body read)
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
}

impl AppError {
    /// Returns true if the error was reported by the API
    pub fn is_api_error(&self) -> bool {
        matches!(self, AppError::Api(_))
    }

    /// Returns the HTTP status code for API errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Returns the underlying API error, if any
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "{e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
