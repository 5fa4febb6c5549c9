//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::shopping_cart::ShoppingCartError;

/// API error response envelope
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Whether the client should retry the request
    pub allow_retry: bool,
    /// Error details
    error: ErrorBody,
}

/// Error body containing code and message
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that wraps the API error response
///
/// Errors without an envelope are sent with an empty body.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: Option<ApiErrorResponse>,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(
        status: StatusCode,
        code: &'static str,
        msg: impl Into<String>,
        retry: bool,
    ) -> Self {
        Self {
            status,
            inner: Some(ApiErrorResponse {
                allow_retry: retry,
                error: ErrorBody {
                    code,
                    message: msg.into(),
                },
            }),
        }
    }

    /// `404 NOT_FOUND` with an empty body
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            inner: None,
        }
    }

    /// `400 BAD_REQUEST` carrying the message reported by the document store
    #[must_use]
    pub fn request_failure(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "request_failed", message, false)
    }

    /// `400 BAD_REQUEST` for a request that failed validation
    #[must_use]
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message, false)
    }

    /// HTTP status of the error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Some(inner) = self.inner else {
            tracing::warn!("Client error: {}", self.status);
            return self.status.into_response();
        };

        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                inner.error.code,
                inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                inner.error.code,
                inner.error.message
            ),
            _ => {}
        }

        (self.status, Json(inner)).into_response()
    }
}

impl From<ShoppingCartError> for AppError {
    fn from(err: ShoppingCartError) -> Self {
        match err {
            ShoppingCartError::NotFound => Self::not_found(),
            ShoppingCartError::RequestFailure(message) => Self::request_failure(message),
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}
