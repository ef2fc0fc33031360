//! In-memory port implementations shared by handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::enrollment::{EnrollmentEntry, UserContact};
use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, UserId};
use crate::domain::payment::PaymentRecord;
use crate::ports::{
    EnrollmentLedger, EnrollmentNotice, EnrollmentNotifier, EnrollmentOutcome, GatewayError,
    GatewayOrder, NotifyError, OrderRequest, PaymentGateway, PaymentRecordRepository,
    UserDirectory,
};

// ════════════════════════════════════════════════════════════════════════════
// Payment record repository
// ════════════════════════════════════════════════════════════════════════════

pub(crate) struct InMemoryPayments {
    records: Mutex<Vec<PaymentRecord>>,
}

impl InMemoryPayments {
    pub(crate) fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_record(record: PaymentRecord) -> Self {
        Self {
            records: Mutex::new(vec![record]),
        }
    }

    pub(crate) fn records(&self) -> Vec<PaymentRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentRecordRepository for InMemoryPayments {
    async fn create(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, DomainError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    async fn update(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        if let Some(r) = records.iter_mut().find(|r| r.id == record.id) {
            *r = record.clone();
        }
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<PaymentRecord>, DomainError> {
        let records = self.records.lock().unwrap();
        let mut mine: Vec<PaymentRecord> = records
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mine.truncate(limit as usize);
        Ok(mine)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Enrollment ledger
// ════════════════════════════════════════════════════════════════════════════

pub(crate) struct InMemoryLedger {
    ledgers: Mutex<HashMap<UserId, Vec<EnrollmentEntry>>>,
}

impl InMemoryLedger {
    pub(crate) fn with_user(user_id: UserId) -> Self {
        let mut ledgers = HashMap::new();
        ledgers.insert(user_id, Vec::new());
        Self {
            ledgers: Mutex::new(ledgers),
        }
    }

    pub(crate) fn entries_for(&self, user_id: &UserId) -> Vec<EnrollmentEntry> {
        self.ledgers
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl EnrollmentLedger for InMemoryLedger {
    async fn entries(&self, user_id: &UserId) -> Result<Vec<EnrollmentEntry>, DomainError> {
        let ledgers = self.ledgers.lock().unwrap();
        ledgers
            .get(user_id)
            .cloned()
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))
    }

    async fn enroll_if_absent(
        &self,
        user_id: &UserId,
        entry: EnrollmentEntry,
    ) -> Result<EnrollmentOutcome, DomainError> {
        let mut ledgers = self.ledgers.lock().unwrap();
        let ledger = ledgers
            .get_mut(user_id)
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;
        if ledger.iter().any(|e| e.package_id == entry.package_id) {
            return Ok(EnrollmentOutcome::AlreadyEnrolled);
        }
        ledger.push(entry);
        Ok(EnrollmentOutcome::Credited)
    }

    async fn revoke(&self, user_id: &UserId, package_id: u32) -> Result<bool, DomainError> {
        let mut ledgers = self.ledgers.lock().unwrap();
        let ledger = ledgers
            .get_mut(user_id)
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;
        let before = ledger.len();
        ledger.retain(|e| e.package_id != package_id);
        Ok(ledger.len() < before)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// User directory
// ════════════════════════════════════════════════════════════════════════════

pub(crate) struct StaticDirectory {
    contacts: HashMap<UserId, UserContact>,
}

impl StaticDirectory {
    pub(crate) fn empty() -> Self {
        Self {
            contacts: HashMap::new(),
        }
    }

    pub(crate) fn with_contact(user_id: UserId, contact: UserContact) -> Self {
        let mut contacts = HashMap::new();
        contacts.insert(user_id, contact);
        Self { contacts }
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn contact(&self, user_id: &UserId) -> Result<Option<UserContact>, DomainError> {
        Ok(self.contacts.get(user_id).cloned())
    }
}

pub(crate) fn test_contact() -> UserContact {
    UserContact {
        name: "Asha Verma".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Payment gateway
// ════════════════════════════════════════════════════════════════════════════

pub(crate) struct MockGateway {
    order_id: String,
    fail: bool,
    requests: Mutex<Vec<OrderRequest>>,
}

impl MockGateway {
    pub(crate) fn returning(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            order_id: String::new(),
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, GatewayError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(GatewayError::Api {
                status: 502,
                message: "order rejected".to_string(),
            });
        }
        Ok(GatewayOrder {
            id: self.order_id.clone(),
        })
    }

    fn key_id(&self) -> &str {
        "rzp_test_abc123"
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Notifier
// ════════════════════════════════════════════════════════════════════════════

pub(crate) struct RecordingNotifier {
    notices: Mutex<Vec<EnrollmentNotice>>,
    fail: bool,
}

impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn notices(&self) -> Vec<EnrollmentNotice> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnrollmentNotifier for RecordingNotifier {
    async fn send(&self, notice: EnrollmentNotice) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError("smtp unreachable".to_string()));
        }
        self.notices.lock().unwrap().push(notice);
        Ok(())
    }
}
