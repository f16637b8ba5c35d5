use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Error surfaced at the HTTP boundary of the API layer.
///
/// Carries the status code to respond with and a human-readable detail
/// message. Constructed where the failure is detected, propagated up
/// unchanged, and turned into a response by the outermost handler.
#[derive(Error, Debug, Clone)]
#[error(
    "APIException: {} ({}) - {}",
    .code.canonical_reason().unwrap_or("Unknown"),
    .code.as_u16(),
    .detail
)]
pub struct ApiError {
    code: StatusCode,
    detail: String,
}

impl ApiError {
    /// Build an error with the default status of 400 Bad Request.
    pub fn new<S: Into<String>>(detail: S) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn with_status<S: Into<String>>(detail: S, code: StatusCode) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.code
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_bad_request() {
        let err = ApiError::new("malformed payload");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "malformed payload");
    }

    #[test]
    fn test_display_format() {
        let err = ApiError::with_status("not found", StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "APIException: Not Found (404) - not found");
    }

    #[test]
    fn test_display_format_default_code() {
        let err = ApiError::new("missing field 'model'");
        assert_eq!(
            err.to_string(),
            "APIException: Bad Request (400) - missing field 'model'"
        );
    }

    #[test]
    fn test_display_format_across_standard_codes() {
        let cases = [
            (StatusCode::UNAUTHORIZED, "Unauthorized", 401),
            (StatusCode::FORBIDDEN, "Forbidden", 403),
            (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity", 422),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", 500),
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", 503),
        ];

        for (code, phrase, number) in cases {
            let err = ApiError::with_status("boom", code);
            assert_eq!(
                err.to_string(),
                format!("APIException: {} ({}) - boom", phrase, number)
            );
        }
    }

    #[test]
    fn test_response_carries_status() {
        let err = ApiError::with_status("nothing here", StatusCode::NOT_FOUND);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
