//! CreateOrderHandler - Command handler for initiating a package purchase.

use std::sync::Arc;

use crate::domain::catalog::PackageCatalog;
use crate::domain::enrollment::UserContact;
use crate::domain::foundation::{PaymentId, Timestamp, UserId};
use crate::domain::payment::{PaymentFlowError, PaymentRecord};
use crate::ports::{
    EnrollmentLedger, OrderNotes, OrderRequest, PaymentGateway, PaymentRecordRepository,
    UserDirectory,
};

/// How order initiation reaches the payment processor.
///
/// Resolved once at startup from configuration; the handler never inspects
/// ambient environment state.
#[derive(Clone)]
pub enum CheckoutMode {
    /// Real gateway orders.
    Gateway(Arc<dyn PaymentGateway>),
    /// Pending records with no gateway order, settled via the mock
    /// confirmation endpoint. Non-production only.
    Mock,
}

/// Command to create a payment order for a package.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Purchasing user.
    pub user_id: UserId,
    /// Catalog id of the package.
    pub package_id: u32,
}

/// Result of order creation.
#[derive(Debug, Clone)]
pub enum CreateOrderResult {
    /// A gateway order was created; the client completes checkout there.
    GatewayOrder {
        payment_record_id: PaymentId,
        gateway_order_id: String,
        package_name: String,
        amount: i64,
        currency: String,
        key_id: String,
        prefill: UserContact,
    },
    /// A mock pending record was created; the client settles it through the
    /// mock confirmation endpoint.
    MockOrder {
        payment_record_id: PaymentId,
        package_name: String,
        amount: i64,
        currency: String,
    },
}

/// Handler for creating payment orders.
pub struct CreateOrderHandler {
    catalog: Arc<PackageCatalog>,
    repository: Arc<dyn PaymentRecordRepository>,
    ledger: Arc<dyn EnrollmentLedger>,
    users: Arc<dyn UserDirectory>,
    checkout: CheckoutMode,
    currency: String,
}

impl CreateOrderHandler {
    pub fn new(
        catalog: Arc<PackageCatalog>,
        repository: Arc<dyn PaymentRecordRepository>,
        ledger: Arc<dyn EnrollmentLedger>,
        users: Arc<dyn UserDirectory>,
        checkout: CheckoutMode,
        currency: String,
    ) -> Self {
        Self {
            catalog,
            repository,
            ledger,
            users,
            checkout,
            currency,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateOrderCommand,
    ) -> Result<CreateOrderResult, PaymentFlowError> {
        // 1. Resolve the package; price and name are captured onto the
        //    record now so later catalog edits cannot change this purchase.
        let package = self
            .catalog
            .find(cmd.package_id)
            .ok_or(PaymentFlowError::InvalidPackage(cmd.package_id))?
            .clone();

        let contact = self
            .users
            .contact(&cmd.user_id)
            .await?
            .ok_or(PaymentFlowError::UserNotFound(cmd.user_id))?;

        // 2. Refuse a second purchase of an owned package.
        if self.ledger.is_enrolled(&cmd.user_id, package.id).await? {
            return Err(PaymentFlowError::already_enrolled(cmd.user_id, package.id));
        }

        // 3. Create the pending record on the configured checkout path.
        match &self.checkout {
            CheckoutMode::Mock => {
                let record = PaymentRecord::new_mock_order(
                    cmd.user_id,
                    package.id,
                    package.name.clone(),
                    package.price,
                    self.currency.clone(),
                );
                self.repository.create(&record).await?;

                Ok(CreateOrderResult::MockOrder {
                    payment_record_id: record.id,
                    package_name: record.package_name,
                    amount: record.amount,
                    currency: record.currency,
                })
            }
            CheckoutMode::Gateway(gateway) => {
                let receipt =
                    format!("sb_{}_{}", package.id, Timestamp::now().unix_millis());
                let order = gateway
                    .create_order(OrderRequest {
                        amount: package.price,
                        currency: self.currency.clone(),
                        receipt,
                        notes: OrderNotes {
                            user_id: cmd.user_id,
                            package_id: package.id,
                        },
                    })
                    .await
                    .map_err(|e| PaymentFlowError::order_creation_failed(e.to_string()))?;

                let record = PaymentRecord::new_gateway_order(
                    cmd.user_id,
                    package.id,
                    package.name.clone(),
                    package.price,
                    self.currency.clone(),
                    order.id.clone(),
                );
                self.repository.create(&record).await?;

                Ok(CreateOrderResult::GatewayOrder {
                    payment_record_id: record.id,
                    gateway_order_id: order.id,
                    package_name: record.package_name,
                    amount: record.amount,
                    currency: record.currency,
                    key_id: gateway.key_id().to_string(),
                    prefill: contact,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        test_contact, InMemoryLedger, InMemoryPayments, MockGateway, StaticDirectory,
    };
    use crate::domain::payment::PaymentStatus;

    fn gateway_handler(
        user_id: UserId,
        gateway: Arc<MockGateway>,
    ) -> (CreateOrderHandler, Arc<InMemoryPayments>, Arc<InMemoryLedger>) {
        let repo = Arc::new(InMemoryPayments::new());
        let ledger = Arc::new(InMemoryLedger::with_user(user_id));
        let handler = CreateOrderHandler::new(
            Arc::new(PackageCatalog::standard()),
            repo.clone(),
            ledger.clone(),
            Arc::new(StaticDirectory::with_contact(user_id, test_contact())),
            CheckoutMode::Gateway(gateway),
            "INR".to_string(),
        );
        (handler, repo, ledger)
    }

    fn mock_handler(user_id: UserId) -> (CreateOrderHandler, Arc<InMemoryPayments>) {
        let repo = Arc::new(InMemoryPayments::new());
        let handler = CreateOrderHandler::new(
            Arc::new(PackageCatalog::standard()),
            repo.clone(),
            Arc::new(InMemoryLedger::with_user(user_id)),
            Arc::new(StaticDirectory::with_contact(user_id, test_contact())),
            CheckoutMode::Mock,
            "INR".to_string(),
        );
        (handler, repo)
    }

    #[tokio::test]
    async fn gateway_order_creates_pending_record() {
        let user_id = UserId::new();
        let gateway = Arc::new(MockGateway::returning("order_abc"));
        let (handler, repo, _) = gateway_handler(user_id, gateway);

        let result = handler
            .handle(CreateOrderCommand {
                user_id,
                package_id: 4,
            })
            .await
            .unwrap();

        let CreateOrderResult::GatewayOrder {
            gateway_order_id,
            amount,
            currency,
            key_id,
            prefill,
            ..
        } = result
        else {
            panic!("expected gateway order");
        };
        assert_eq!(gateway_order_id, "order_abc");
        assert_eq!(amount, 549_900);
        assert_eq!(currency, "INR");
        assert_eq!(key_id, "rzp_test_abc123");
        assert_eq!(prefill.email, "asha@example.com");
        assert_eq!(prefill.phone, "9876543210");

        let records = repo.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, PaymentStatus::Pending);
        assert_eq!(records[0].package_name, "GOLD PACKAGE");
        assert_eq!(records[0].gateway_order_id.as_deref(), Some("order_abc"));
        assert!(!records[0].is_dev);
    }

    #[tokio::test]
    async fn gateway_receipt_carries_package_id() {
        let user_id = UserId::new();
        let gateway = Arc::new(MockGateway::returning("order_abc"));
        let (handler, _, _) = gateway_handler(user_id, gateway.clone());

        handler
            .handle(CreateOrderCommand {
                user_id,
                package_id: 4,
            })
            .await
            .unwrap();

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].receipt.starts_with("sb_4_"));
        assert_eq!(requests[0].notes.package_id, 4);
        assert_eq!(requests[0].notes.user_id, user_id);
    }

    #[tokio::test]
    async fn mock_order_creates_dev_record_without_gateway() {
        let user_id = UserId::new();
        let (handler, repo) = mock_handler(user_id);

        let result = handler
            .handle(CreateOrderCommand {
                user_id,
                package_id: 1,
            })
            .await
            .unwrap();

        let CreateOrderResult::MockOrder { amount, .. } = result else {
            panic!("expected mock order");
        };
        assert_eq!(amount, 50_000);

        let records = repo.records();
        assert_eq!(records[0].status, PaymentStatus::Pending);
        assert!(records[0].is_dev);
        assert!(records[0].gateway_order_id.is_none());
    }

    #[tokio::test]
    async fn rejects_unknown_package() {
        let user_id = UserId::new();
        let (handler, repo) = mock_handler(user_id);

        let err = handler
            .handle(CreateOrderCommand {
                user_id,
                package_id: 99,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentFlowError::InvalidPackage(99)));
        assert!(repo.records().is_empty());
    }

    #[tokio::test]
    async fn rejects_already_enrolled_user() {
        let user_id = UserId::new();
        let gateway = Arc::new(MockGateway::returning("order_abc"));
        let (handler, repo, ledger) = gateway_handler(user_id, gateway);
        ledger
            .enroll_if_absent(
                &user_id,
                crate::domain::enrollment::EnrollmentEntry::new(4, "GOLD PACKAGE", 549_900),
            )
            .await
            .unwrap();

        let err = handler
            .handle(CreateOrderCommand {
                user_id,
                package_id: 4,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentFlowError::AlreadyEnrolled { .. }));
        assert!(repo.records().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_user() {
        let user_id = UserId::new();
        let repo = Arc::new(InMemoryPayments::new());
        let handler = CreateOrderHandler::new(
            Arc::new(PackageCatalog::standard()),
            repo,
            Arc::new(InMemoryLedger::with_user(user_id)),
            Arc::new(StaticDirectory::empty()),
            CheckoutMode::Mock,
            "INR".to_string(),
        );

        let err = handler
            .handle(CreateOrderCommand {
                user_id,
                package_id: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentFlowError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn gateway_failure_surfaces_and_creates_no_record() {
        let user_id = UserId::new();
        let gateway = Arc::new(MockGateway::failing());
        let (handler, repo, _) = gateway_handler(user_id, gateway);

        let err = handler
            .handle(CreateOrderCommand {
                user_id,
                package_id: 4,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentFlowError::OrderCreationFailed { .. }));
        assert!(repo.records().is_empty());
    }
}
