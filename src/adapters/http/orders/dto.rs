//! HTTP DTOs (Data Transfer Objects) for order endpoints.
//!
//! These types define the JSON request/response structure for the order API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::orders::{CreateOrderResult, VerifyPaymentResult};
use crate::domain::enrollment::UserContact;
use crate::domain::payment::PaymentRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a payment order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Catalog id of the package to purchase.
    pub package_id: u32,
}

/// Gateway checkout callback forwarded by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    /// Payment record created during order initiation.
    pub payment_id: String,
    pub gateway_order_id: String,
    pub gateway_payment_id: String,
    pub gateway_signature: String,
}

/// Request to confirm a mock order (non-production).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevConfirmRequest {
    pub payment_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Checkout prefill details for the gateway UI.
#[derive(Debug, Clone, Serialize)]
pub struct PrefillResponse {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<UserContact> for PrefillResponse {
    fn from(contact: UserContact) -> Self {
        let phone = if contact.phone.is_empty() {
            None
        } else {
            Some(contact.phone)
        };
        Self {
            name: contact.name,
            email: contact.email,
            phone,
        }
    }
}

/// Response for order creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    /// True when this order uses the mock checkout path.
    pub mock: bool,
    /// Gateway order id (absent for mock orders).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Payment record id, echoed back in verify/dev-confirm.
    pub payment_id: String,
    pub package_name: String,
    /// Amount in paise.
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Public gateway key for the checkout UI (gateway orders only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefill: Option<PrefillResponse>,
}

impl From<CreateOrderResult> for CreateOrderResponse {
    fn from(result: CreateOrderResult) -> Self {
        match result {
            CreateOrderResult::GatewayOrder {
                payment_record_id,
                gateway_order_id,
                package_name,
                amount,
                currency,
                key_id,
                prefill,
            } => Self {
                mock: false,
                order_id: Some(gateway_order_id),
                payment_id: payment_record_id.to_string(),
                package_name,
                amount,
                currency: Some(currency),
                gateway_key_id: Some(key_id),
                prefill: Some(PrefillResponse::from(prefill)),
            },
            CreateOrderResult::MockOrder {
                payment_record_id,
                package_name,
                amount,
                currency,
            } => Self {
                mock: true,
                order_id: None,
                payment_id: payment_record_id.to_string(),
                package_name,
                amount,
                currency: Some(currency),
                gateway_key_id: None,
                prefill: None,
            },
        }
    }
}

/// Response for verification and mock confirmation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
}

impl From<VerifyPaymentResult> for VerifyPaymentResponse {
    fn from(result: VerifyPaymentResult) -> Self {
        match result {
            VerifyPaymentResult::Credited { .. } => Self {
                success: true,
                message: "Payment verified and enrollment added".to_string(),
            },
            VerifyPaymentResult::AlreadyEnrolled { .. } => Self {
                success: true,
                message: "Payment verified; enrollment already present".to_string(),
            },
        }
    }
}

/// One payment record in the caller's history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecordResponse {
    pub id: String,
    pub package_id: u32,
    pub package_name: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub is_dev: bool,
    /// Creation time (ISO 8601).
    pub created_at: String,
}

impl From<PaymentRecord> for PaymentRecordResponse {
    fn from(record: PaymentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            package_id: record.package_id,
            package_name: record.package_name,
            amount: record.amount,
            currency: record.currency,
            status: record.status.as_str().to_string(),
            order_id: record.gateway_order_id,
            is_dev: record.is_dev,
            created_at: record.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the payment history query.
#[derive(Debug, Clone, Serialize)]
pub struct MyPaymentsResponse {
    pub payments: Vec<PaymentRecordResponse>,
}
