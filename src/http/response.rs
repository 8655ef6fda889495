//! Response normalization for the Libris backend envelope.
//!
//! Every Libris endpoint answers 200 with a JSON body carrying a `success`
//! flag; 400 and 5xx carry a `message`. Anything else is passed through
//! untouched for the caller to inspect.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, FailureResponse};

/// Normalized success payload: the full response body plus a fixed message.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub message: String,
    pub data: Value,
}

impl SuccessResponse {
    pub(crate) fn new(data: Value) -> Self {
        Self {
            message: "Success".to_string(),
            data,
        }
    }

    /// Whether the body declares itself successful. The backend is loose
    /// about the flag's type, so this mirrors JS truthiness: absent, null,
    /// `false`, `0` and `""` all count as failure.
    pub fn is_success(&self) -> bool {
        match self.data.get("success") {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            Some(Value::Null) | None => false,
        }
    }

    /// Deserialize the whole body into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_value(self.data.clone()).map_err(ApiError::from)
    }

    /// Deserialize a single field of the body into a typed value.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> ApiResult<T> {
        let value = self.data.get(key).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(ApiError::from)
    }
}

/// Outcome of a request that round-tripped through the server.
#[derive(Debug)]
pub enum ApiResponse {
    /// 200 with a truthy `success` flag.
    Success(SuccessResponse),
    /// Any status outside the normalized set, passed through unmodified.
    Raw(reqwest::Response),
}

impl ApiResponse {
    /// Unwrap the normalized envelope, treating a passthrough status as an
    /// error. This is what the typed API groups use: every documented
    /// Libris endpoint answers 200 envelopes.
    pub fn into_success(self) -> ApiResult<SuccessResponse> {
        match self {
            ApiResponse::Success(envelope) => Ok(envelope),
            ApiResponse::Raw(response) => Err(ApiError::UnexpectedStatus(response.status())),
        }
    }
}

/// Classify a server response into the two outcome shapes.
///
/// 401 never reaches this point; the client handles it before
/// classification.
pub(crate) async fn classify(response: reqwest::Response) -> ApiResult<ApiResponse> {
    let status = response.status();
    match status {
        StatusCode::OK => {
            // A non-JSON body still becomes an envelope; its missing
            // `success` flag then rejects it below.
            let text = response.text().await?;
            let body: Value =
                serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text.clone()));
            let envelope = SuccessResponse::new(body);
            if envelope.is_success() {
                Ok(ApiResponse::Success(envelope))
            } else {
                Err(ApiError::Rejected(envelope))
            }
        }
        StatusCode::BAD_REQUEST => {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Request failed.");
            Err(ApiError::Validation(FailureResponse::new("400", message)))
        }
        _ if status.is_server_error() => {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Internal Server Error");
            Err(ApiError::Server(FailureResponse::new(
                status.as_u16().to_string(),
                message,
            )))
        }
        _ => Ok(ApiResponse::Raw(response)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_flag_truthiness() {
        let truthy = [json!({"success": true}), json!({"success": 1}), json!({"success": "yes"})];
        for body in truthy {
            assert!(SuccessResponse::new(body).is_success());
        }
        let falsy = [
            json!({"success": false}),
            json!({"success": 0}),
            json!({"success": ""}),
            json!({"success": null}),
            json!({"message": "no flag at all"}),
        ];
        for body in falsy {
            assert!(!SuccessResponse::new(body).is_success());
        }
    }

    #[test]
    fn field_extraction() {
        let envelope = SuccessResponse::new(json!({
            "success": true,
            "books": [{"_id": "1"}, {"_id": "2"}],
        }));
        let books: Vec<Value> = envelope.field("books").unwrap();
        assert_eq!(books.len(), 2);

        let missing: Option<String> = envelope.field("absent").unwrap();
        assert!(missing.is_none());
    }
}
