//! Error types for the Libris client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::response::SuccessResponse;

/// Normalized failure payload produced for 400 and 5xx responses.
///
/// `success` is always `false`; it is kept as a field so the shape matches
/// what the backend itself puts on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub code: String,
    pub message: String,
    pub success: bool,
}

impl FailureResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            success: false,
        }
    }
}

/// Main client error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 400, or a request payload that failed client-side validation.
    #[error("{}", .0.message)]
    Validation(FailureResponse),

    /// HTTP 5xx.
    #[error("{}", .0.message)]
    Server(FailureResponse),

    /// HTTP 200 whose body declares `success: false`. Carries the same
    /// envelope the success path would have returned, so callers inspect
    /// one shape on both paths.
    #[error("request rejected: {}", .0.data.get("message").and_then(|m| m.as_str()).unwrap_or("server reported failure"))]
    Rejected(SuccessResponse),

    /// The session could not be recovered: no refresh token was stored,
    /// the refresh call was denied, or a replayed request was rejected
    /// a second time.
    #[error("session expired")]
    SessionExpired,

    /// The request was cancelled through its cancellation token.
    #[error("request cancelled")]
    Cancelled,

    /// A status the typed layer has no contract for. The raw response is
    /// available through [`crate::http::response::ApiResponse::Raw`].
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Network-level failure (connect error, DNS, timeout). Propagated
    /// unmodified from the transport.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a validation error in the same shape as a server 400.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(FailureResponse::new("400", message))
    }
}

/// Run `validator` checks on a request payload, flattening the first
/// violation into an [`ApiError::Validation`].
pub(crate) fn validate(value: &impl validator::Validate) -> ApiResult<()> {
    value.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Request failed.".to_string());
        ApiError::validation(message)
    })
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Title cannot be empty"))]
        title: String,
    }

    #[test]
    fn validation_flattens_first_message() {
        let err = validate(&Payload {
            title: String::new(),
        })
        .unwrap_err();
        match err {
            ApiError::Validation(failure) => {
                assert_eq!(failure.code, "400");
                assert_eq!(failure.message, "Title cannot be empty");
                assert!(!failure.success);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn failure_response_serializes_success_flag() {
        let failure = FailureResponse::new("500", "Internal Server Error");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "500");
    }
}
