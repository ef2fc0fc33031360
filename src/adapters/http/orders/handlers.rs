//! HTTP handlers for order endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::orders::{
    CheckoutMode, CreateOrderCommand, CreateOrderHandler, DevConfirmCommand, DevConfirmHandler,
    EnrollmentCreditor, ListMyPaymentsHandler, ListMyPaymentsQuery, VerifyPaymentCommand,
    VerifyPaymentHandler,
};
use crate::domain::catalog::PackageCatalog;
use crate::domain::foundation::PaymentId;
use crate::domain::payment::{CallbackVerifier, PaymentFlowError};
use crate::ports::{
    EnrollmentLedger, EnrollmentNotifier, PaymentRecordRepository, UserDirectory,
};

use super::super::error::ApiError;
use super::super::extractors::AuthenticatedUser;
use super::dto::{
    CreateOrderRequest, CreateOrderResponse, DevConfirmRequest, MyPaymentsResponse,
    PaymentRecordResponse, VerifyPaymentRequest, VerifyPaymentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all order-flow dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct OrdersAppState {
    pub catalog: Arc<PackageCatalog>,
    pub repository: Arc<dyn PaymentRecordRepository>,
    pub ledger: Arc<dyn EnrollmentLedger>,
    pub users: Arc<dyn UserDirectory>,
    pub notifier: Arc<dyn EnrollmentNotifier>,
    pub verifier: Arc<CallbackVerifier>,
    pub checkout: CheckoutMode,
    pub currency: String,
}

impl OrdersAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(
            self.catalog.clone(),
            self.repository.clone(),
            self.ledger.clone(),
            self.users.clone(),
            self.checkout.clone(),
            self.currency.clone(),
        )
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(
            self.repository.clone(),
            self.verifier.clone(),
            self.creditor(),
        )
    }

    pub fn dev_confirm_handler(&self) -> DevConfirmHandler {
        DevConfirmHandler::new(self.repository.clone(), self.creditor())
    }

    pub fn list_my_payments_handler(&self) -> ListMyPaymentsHandler {
        ListMyPaymentsHandler::new(self.repository.clone())
    }

    pub fn creditor(&self) -> Arc<EnrollmentCreditor> {
        Arc::new(EnrollmentCreditor::new(
            self.repository.clone(),
            self.ledger.clone(),
            self.users.clone(),
            self.notifier.clone(),
        ))
    }
}

fn parse_payment_id(raw: &str) -> Result<PaymentId, ApiError> {
    raw.parse::<PaymentId>()
        .map_err(|_| PaymentFlowError::validation("paymentId", "must be a UUID").into())
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/orders - Create a payment order for a package
pub async fn create_order(
    State(state): State<OrdersAppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_order_handler();
    let cmd = CreateOrderCommand {
        user_id: user.user_id,
        package_id: request.package_id,
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(CreateOrderResponse::from(result))))
}

/// POST /api/orders/verify - Verify a gateway callback and credit enrollment
pub async fn verify_payment(
    State(state): State<OrdersAppState>,
    _user: AuthenticatedUser,
    Json(request): Json<VerifyPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.verify_payment_handler();
    let cmd = VerifyPaymentCommand {
        payment_record_id: parse_payment_id(&request.payment_id)?,
        gateway_order_id: request.gateway_order_id,
        gateway_payment_id: request.gateway_payment_id,
        gateway_signature: request.gateway_signature,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(VerifyPaymentResponse::from(result)))
}

/// POST /api/orders/dev-confirm - Confirm a mock order (not routed in production)
pub async fn dev_confirm(
    State(state): State<OrdersAppState>,
    user: AuthenticatedUser,
    Json(request): Json<DevConfirmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.dev_confirm_handler();
    let cmd = DevConfirmCommand {
        payment_record_id: parse_payment_id(&request.payment_id)?,
        user_id: user.user_id,
    };

    handler.handle(cmd).await?;

    Ok(Json(VerifyPaymentResponse {
        success: true,
        message: "Mock payment confirmed and enrollment added".to_string(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/orders/my-payments - The caller's payment history (newest first)
pub async fn my_payments(
    State(state): State<OrdersAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_my_payments_handler();
    let query = ListMyPaymentsQuery {
        user_id: user.user_id,
    };

    let result = handler.handle(query).await?;

    let response = MyPaymentsResponse {
        payments: result
            .payments
            .into_iter()
            .map(PaymentRecordResponse::from)
            .collect(),
    };

    Ok(Json(response))
}
