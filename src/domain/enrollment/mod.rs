//! Enrollment ledger entries.
//!
//! An `EnrollmentEntry` records one package a user has paid for. Entries are
//! embedded in the user's profile document and append-only: the crediting
//! operation adds at most one entry per (user, package id) pair, and only the
//! admin revoke operation removes one.

use serde::{Deserialize, Serialize};

use super::foundation::Timestamp;

/// One purchased package in a user's enrollment ledger.
///
/// Name and amount are copied from the payment record at crediting time, so
/// the ledger stays historically accurate even if catalog prices change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentEntry {
    /// Catalog id of the purchased package.
    pub package_id: u32,

    /// Package name at purchase time.
    pub package_name: String,

    /// Amount paid, in paise.
    pub amount: i64,

    /// When the enrollment was credited.
    pub enrolled_at: Timestamp,
}

impl EnrollmentEntry {
    pub fn new(package_id: u32, package_name: impl Into<String>, amount: i64) -> Self {
        Self {
            package_id,
            package_name: package_name.into(),
            amount,
            enrolled_at: Timestamp::now(),
        }
    }
}

/// User contact details, used for gateway prefill and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}
