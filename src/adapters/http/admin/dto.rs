//! HTTP DTOs for admin override endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::admin::{ManualEnrollResult, MarkPaidResult};
use crate::ports::EnrollmentOutcome;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to enroll a user without a gateway payment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEnrollRequest {
    pub user_id: String,
    pub package_id: u32,
    /// Overrides the catalog name when set.
    #[serde(default)]
    pub package_name: Option<String>,
    /// Overrides the catalog price, in paise.
    #[serde(default)]
    pub amount: Option<i64>,
}

/// Request to revoke a user's enrollment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeEnrollmentRequest {
    pub user_id: String,
    pub package_id: u32,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for the mark-paid override.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPaidResponse {
    pub payment_id: String,
    /// True when a new ledger entry was appended.
    pub enrollment_added: bool,
}

impl From<MarkPaidResult> for MarkPaidResponse {
    fn from(result: MarkPaidResult) -> Self {
        Self {
            payment_id: result.payment_record_id.to_string(),
            enrollment_added: result.outcome == EnrollmentOutcome::Credited,
        }
    }
}

/// Response for manual enrollment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEnrollResponse {
    /// Synthesized paid record.
    pub payment_id: String,
}

impl From<ManualEnrollResult> for ManualEnrollResponse {
    fn from(result: ManualEnrollResult) -> Self {
        Self {
            payment_id: result.payment_record_id.to_string(),
        }
    }
}
