//! HTTP handlers for admin override endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::admin::{
    ManualEnrollCommand, ManualEnrollHandler, MarkPaidCommand, MarkPaidHandler,
    RevokeEnrollmentCommand, RevokeEnrollmentHandler,
};
use crate::application::handlers::orders::EnrollmentCreditor;
use crate::domain::catalog::PackageCatalog;
use crate::domain::foundation::{PaymentId, UserId};
use crate::domain::payment::PaymentFlowError;
use crate::ports::{
    EnrollmentLedger, EnrollmentNotifier, PaymentRecordRepository, UserDirectory,
};

use super::super::error::ApiError;
use super::super::extractors::AdminUser;
use super::dto::{
    ManualEnrollRequest, ManualEnrollResponse, MarkPaidResponse, RevokeEnrollmentRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for admin override endpoints.
#[derive(Clone)]
pub struct AdminAppState {
    pub catalog: Arc<PackageCatalog>,
    pub repository: Arc<dyn PaymentRecordRepository>,
    pub ledger: Arc<dyn EnrollmentLedger>,
    pub users: Arc<dyn UserDirectory>,
    pub notifier: Arc<dyn EnrollmentNotifier>,
    pub currency: String,
}

impl AdminAppState {
    /// Create handlers on demand from the shared state.
    pub fn mark_paid_handler(&self) -> MarkPaidHandler {
        let creditor = Arc::new(EnrollmentCreditor::new(
            self.repository.clone(),
            self.ledger.clone(),
            self.users.clone(),
            self.notifier.clone(),
        ));
        MarkPaidHandler::new(self.repository.clone(), creditor)
    }

    pub fn manual_enroll_handler(&self) -> ManualEnrollHandler {
        ManualEnrollHandler::new(
            self.catalog.clone(),
            self.repository.clone(),
            self.ledger.clone(),
            self.users.clone(),
            self.notifier.clone(),
            self.currency.clone(),
        )
    }

    pub fn revoke_enrollment_handler(&self) -> RevokeEnrollmentHandler {
        RevokeEnrollmentHandler::new(self.ledger.clone(), self.users.clone())
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>()
        .map_err(|_| PaymentFlowError::validation("userId", "must be a UUID").into())
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// PATCH /api/admin/payments/:id/mark-paid - Force a payment record to paid
pub async fn mark_paid(
    State(state): State<AdminAppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_record_id = id
        .parse::<PaymentId>()
        .map_err(|_| PaymentFlowError::validation("id", "must be a UUID"))?;

    let handler = state.mark_paid_handler();
    let result = handler.handle(MarkPaidCommand { payment_record_id }).await?;

    tracing::info!(
        admin_id = %admin.user_id,
        payment_id = %id,
        "admin mark-paid override applied"
    );

    Ok(Json(MarkPaidResponse::from(result)))
}

/// POST /api/admin/enroll - Enroll a user without a gateway payment
pub async fn manual_enroll(
    State(state): State<AdminAppState>,
    admin: AdminUser,
    Json(request): Json<ManualEnrollRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.manual_enroll_handler();
    let cmd = ManualEnrollCommand {
        user_id: parse_user_id(&request.user_id)?,
        package_id: request.package_id,
        package_name: request.package_name,
        amount: request.amount,
    };

    let result = handler.handle(cmd).await?;

    tracing::info!(
        admin_id = %admin.user_id,
        user_id = %request.user_id,
        package_id = request.package_id,
        "admin manual enrollment applied"
    );

    Ok((StatusCode::CREATED, Json(ManualEnrollResponse::from(result))))
}

/// DELETE /api/admin/enroll - Revoke a user's enrollment
pub async fn revoke_enrollment(
    State(state): State<AdminAppState>,
    admin: AdminUser,
    Json(request): Json<RevokeEnrollmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.revoke_enrollment_handler();
    let cmd = RevokeEnrollmentCommand {
        user_id: parse_user_id(&request.user_id)?,
        package_id: request.package_id,
    };

    handler.handle(cmd).await?;

    tracing::info!(
        admin_id = %admin.user_id,
        user_id = %request.user_id,
        package_id = request.package_id,
        "admin enrollment revocation applied"
    );

    Ok(StatusCode::NO_CONTENT)
}
