//! Payment record aggregate.
//!
//! One `PaymentRecord` per purchase attempt. Package name and amount are
//! denormalized from the catalog at creation so historical records stay
//! accurate when catalog prices change later; crediting always reads these
//! stored fields, never the live catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, Timestamp, UserId};

use super::PaymentStatus;

/// A persisted attempt to purchase a package.
///
/// # Invariants
///
/// - `status` never moves backward out of `Paid`
/// - `mark_paid` and `attach_gateway` are idempotent so verification retries
///   converge to the same record state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier for this record.
    pub id: PaymentId,

    /// User who initiated the purchase.
    pub user_id: UserId,

    /// Catalog id of the package being purchased.
    pub package_id: u32,

    /// Package name at order time.
    pub package_name: String,

    /// Amount in paise at order time.
    pub amount: i64,

    /// ISO currency code.
    pub currency: String,

    /// Lifecycle status.
    pub status: PaymentStatus,

    /// Order id issued by the gateway (absent for mock/manual records).
    pub gateway_order_id: Option<String>,

    /// Payment id reported by the gateway callback.
    pub gateway_payment_id: Option<String>,

    /// Signature supplied with the gateway callback.
    pub gateway_signature: Option<String>,

    /// True for records created without the gateway (mock or manual paths).
    pub is_dev: bool,

    /// When the record was created.
    pub created_at: Timestamp,

    /// When the record was last updated.
    pub updated_at: Timestamp,
}

impl PaymentRecord {
    /// Creates a pending record bound to a gateway order.
    pub fn new_gateway_order(
        user_id: UserId,
        package_id: u32,
        package_name: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
        gateway_order_id: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PaymentId::new(),
            user_id,
            package_id,
            package_name: package_name.into(),
            amount,
            currency: currency.into(),
            status: PaymentStatus::Pending,
            gateway_order_id: Some(gateway_order_id.into()),
            gateway_payment_id: None,
            gateway_signature: None,
            is_dev: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a pending mock record (non-production only, no gateway order).
    pub fn new_mock_order(
        user_id: UserId,
        package_id: u32,
        package_name: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PaymentId::new(),
            user_id,
            package_id,
            package_name: package_name.into(),
            amount,
            currency: currency.into(),
            status: PaymentStatus::Pending,
            gateway_order_id: None,
            gateway_payment_id: None,
            gateway_signature: None,
            is_dev: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates an already-paid manual record for admin bookkeeping symmetry.
    pub fn new_manual(
        user_id: UserId,
        package_id: u32,
        package_name: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PaymentId::new(),
            user_id,
            package_id,
            package_name: package_name.into(),
            amount,
            currency: currency.into(),
            status: PaymentStatus::Paid,
            gateway_order_id: None,
            gateway_payment_id: None,
            gateway_signature: None,
            is_dev: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the record paid.
    ///
    /// Idempotent on already-paid records. `Refunded` is refused: undoing a
    /// refund is an explicit admin decision, not a side effect of a retried
    /// verification.
    pub fn mark_paid(&mut self) -> Result<(), DomainError> {
        match self.status {
            PaymentStatus::Paid => Ok(()),
            PaymentStatus::Pending | PaymentStatus::Failed => {
                self.status = PaymentStatus::Paid;
                self.updated_at = Timestamp::now();
                Ok(())
            }
            PaymentStatus::Refunded => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Refunded payment cannot be marked paid",
            )),
        }
    }

    /// Marks the record failed after a signature mismatch, recording the
    /// gateway payment id for audit.
    ///
    /// A `Paid` record is left untouched: the lifecycle defines no backward
    /// transition out of `Paid`.
    pub fn mark_failed(&mut self, gateway_payment_id: impl Into<String>) {
        if self.status == PaymentStatus::Paid {
            return;
        }
        self.status = PaymentStatus::Failed;
        self.gateway_payment_id = Some(gateway_payment_id.into());
        self.updated_at = Timestamp::now();
    }

    /// Persists the gateway order/payment/signature triple onto the record.
    ///
    /// Safe to re-apply with the same values on a verification retry.
    pub fn attach_gateway(
        &mut self,
        order_id: impl Into<String>,
        payment_id: impl Into<String>,
        signature: impl Into<String>,
    ) {
        self.gateway_order_id = Some(order_id.into());
        self.gateway_payment_id = Some(payment_id.into());
        self.gateway_signature = Some(signature.into());
        self.updated_at = Timestamp::now();
    }
}
