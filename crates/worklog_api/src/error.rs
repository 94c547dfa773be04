//! Error model shared by the Tempo and Jira client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error conditions raised while talking to the remote services, including
/// HTTP errors with the message extracted from the response body,
/// authentication failures, timeouts, network issues and decode problems.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http {status}: {message}")]
    Http { status: StatusCode, message: String },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            ApiError::Http {
                status,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            ApiError::Network(err.to_string())
        } else {
            ApiError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

/// Builds the error for a non-success response, consuming its body.
pub(crate) async fn error_for(status: StatusCode, response: reqwest::Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ApiError::Authentication(format!("access denied ({status}) - {body}"));
    }
    let message = extract_error_message(&body).unwrap_or(body);
    tracing::debug!(%status, %message, "remote call failed");
    ApiError::http(status, message)
}

pub(crate) fn header_value(value: String) -> Result<reqwest::header::HeaderValue> {
    reqwest::header::HeaderValue::from_str(&value).map_err(|err| ApiError::Other(err.to_string()))
}

/// Pulls the most useful message out of an error response body.
///
/// Both services return structured bodies on failure: Tempo uses a top-level
/// `message`, Jira uses `errorMessages` (an array). Unstructured bodies fall
/// through to the raw text.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    let messages: Vec<&str> = value
        .get("errorMessages")?
        .as_array()?
        .iter()
        .filter_map(|m| m.as_str())
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}
