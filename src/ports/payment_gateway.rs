//! Payment gateway port.
//!
//! Contract for the external payment processor's order API. The gateway is
//! already trusted; this port only creates orders — callback authenticity is
//! the domain verifier's job.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// Opaque metadata attached to a gateway order for later reconciliation in
/// the gateway's own dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNotes {
    pub user_id: UserId,
    pub package_id: u32,
}

/// Request to create a gateway order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// ISO currency code.
    pub currency: String,

    /// Merchant receipt reference, e.g. `sb_4_1717171717171`.
    pub receipt: String,

    /// Reconciliation metadata.
    pub notes: OrderNotes,
}

/// Order created by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOrder {
    /// Gateway-issued order id, later echoed in the signed callback.
    pub id: String,
}

/// Errors from gateway calls.
///
/// The service never retries these automatically; the caller re-initiates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Could not reach the gateway.
    Network(String),

    /// The gateway answered with an error.
    Api { status: u16, message: String },
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "gateway unreachable: {}", msg),
            GatewayError::Api { status, message } => {
                write!(f, "gateway error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// External payment gateway client.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a payment order the client completes in the gateway's UI.
    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, GatewayError>;

    /// Public key identifier the client needs to render the payment UI.
    fn key_id(&self) -> &str;
}
