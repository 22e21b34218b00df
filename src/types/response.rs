//! Standard API response envelope.
//!
//! Every reply carries the same shape: `statusCode`, `data`, `success`,
//! `message`, `errors`. Invariant: `success` is true exactly when the
//! status code is in the 2xx range and `errors` is empty.

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::MSG_DEFAULT_FAILURE;

/// Structured error detail carried in the envelope's `errors` list.
///
/// A closed, tagged set of failure kinds rather than arbitrary objects.
/// The server-side variants carry no internal detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorDetail {
    /// Input failed validation; `detail` is safe to show the caller
    Validation { detail: String },
    /// The named resource already exists
    Conflict { resource: String },
    /// The store accepted a write but produced no record
    StoreFailure,
    /// Any other failure; specifics stay in the server logs
    Unexpected,
}

/// Standard API response wrapper (consistent envelope for every reply)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
    pub errors: Vec<ErrorDetail>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a success envelope. `success` is derived from the status
    /// code, so a non-2xx code can never masquerade as a success.
    pub fn success(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data: Some(data),
            success: status.is_success(),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Check the envelope invariant: success iff 2xx and no errors.
    pub fn is_consistent(&self) -> bool {
        let ok = (200..300).contains(&self.status_code) && self.errors.is_empty();
        self.success == ok
    }
}

impl ApiResponse<()> {
    /// Build a failure envelope with no payload.
    pub fn failure(
        status: StatusCode,
        message: impl Into<String>,
        errors: Vec<ErrorDetail>,
    ) -> Self {
        let message = message.into();
        Self {
            status_code: status.as_u16(),
            data: None,
            success: false,
            message: if message.is_empty() {
                MSG_DEFAULT_FAILURE.to_string()
            } else {
                message
            },
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_no_errors() {
        let response = ApiResponse::success(StatusCode::CREATED, "payload", "done");
        assert!(response.success);
        assert_eq!(response.status_code, 201);
        assert_eq!(response.data, Some("payload"));
        assert!(response.errors.is_empty());
        assert!(response.is_consistent());
    }

    #[test]
    fn failure_envelope_is_never_successful() {
        let response = ApiResponse::<()>::failure(
            StatusCode::BAD_REQUEST,
            "All fields are necessary.",
            vec![ErrorDetail::Validation {
                detail: "All fields are necessary.".to_string(),
            }],
        );
        assert!(!response.success);
        assert_eq!(response.status_code, 400);
        assert!(response.data.is_none());
        assert!(response.is_consistent());
    }

    #[test]
    fn failure_message_defaults_when_empty() {
        let response =
            ApiResponse::<()>::failure(StatusCode::INTERNAL_SERVER_ERROR, "", Vec::new());
        assert_eq!(response.message, "Something went wrong");
    }

    #[test]
    fn envelope_serializes_with_camel_case_fields() {
        let response = ApiResponse::success(StatusCode::CREATED, 1, "ok");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 1);
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[test]
    fn error_detail_serializes_with_kind_tag() {
        let detail = ErrorDetail::Conflict {
            resource: "user".to_string(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["kind"], "conflict");
        assert_eq!(json["resource"], "user");
    }
}
