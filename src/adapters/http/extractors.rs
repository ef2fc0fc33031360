//! Request extractors for caller identity.
//!
//! In production these would be populated from JWT/session validation by
//! auth middleware; here they read headers set by the auth gateway fronting
//! this service.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::foundation::UserId;

use super::error::ErrorResponse;

/// Authenticated user context extracted from request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<UserId>().ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

/// Administrative caller context.
///
/// Requires both a valid user identity and the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: UserId,
}

/// Rejection type for AdminUser extraction.
pub enum AdminRequired {
    Unauthenticated,
    Forbidden,
}

impl IntoResponse for AdminRequired {
    fn into_response(self) -> axum::response::Response {
        match self {
            AdminRequired::Unauthenticated => AuthenticationRequired.into_response(),
            AdminRequired::Forbidden => {
                let error = ErrorResponse::new("FORBIDDEN", "Admin role required");
                (StatusCode::FORBIDDEN, Json(error)).into_response()
            }
        }
    }
}

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AdminRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<UserId>().ok())
                .ok_or(AdminRequired::Unauthenticated)?;

            let is_admin = parts
                .headers
                .get("X-User-Role")
                .and_then(|v| v.to_str().ok())
                .map(|role| role == "admin")
                .unwrap_or(false);

            if !is_admin {
                return Err(AdminRequired::Forbidden);
            }

            Ok(AdminUser { user_id })
        })
    }
}
