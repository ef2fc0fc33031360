//! API error handling shared by all HTTP modules.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::DomainError;
use crate::domain::payment::PaymentFlowError;

/// JSON error body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts payment-flow errors to HTTP responses.
pub struct ApiError(PaymentFlowError);

impl From<PaymentFlowError> for ApiError {
    fn from(err: PaymentFlowError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(PaymentFlowError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PaymentFlowError::InvalidPackage(_) => StatusCode::BAD_REQUEST,
            PaymentFlowError::AlreadyEnrolled { .. } => StatusCode::CONFLICT,
            PaymentFlowError::OrderCreationFailed { .. } => StatusCode::BAD_GATEWAY,
            PaymentFlowError::SignatureMismatch => StatusCode::BAD_REQUEST,
            PaymentFlowError::PaymentNotFound(_) => StatusCode::NOT_FOUND,
            PaymentFlowError::DuplicateEnrollment { .. } => StatusCode::CONFLICT,
            PaymentFlowError::EnrollmentNotFound { .. } => StatusCode::NOT_FOUND,
            PaymentFlowError::UserNotFound(_) => StatusCode::NOT_FOUND,
            PaymentFlowError::InvalidState { .. } => StatusCode::CONFLICT,
            PaymentFlowError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            PaymentFlowError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}
