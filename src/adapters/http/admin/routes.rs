//! Axum router configuration for admin override endpoints.

use axum::{
    routing::{patch, post},
    Router,
};

use super::handlers::{manual_enroll, mark_paid, revoke_enrollment, AdminAppState};

/// Create the admin API router.
///
/// # Routes (require admin role)
///
/// - `PATCH /payments/:id/mark-paid` - Force a payment record to paid
/// - `POST /enroll` - Enroll a user without a gateway payment
/// - `DELETE /enroll` - Revoke a user's enrollment
pub fn admin_routes() -> Router<AdminAppState> {
    Router::new()
        .route("/payments/:id/mark-paid", patch(mark_paid))
        .route("/enroll", post(manual_enroll).delete(revoke_enrollment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::handlers::test_support::{
        InMemoryLedger, InMemoryPayments, RecordingNotifier, StaticDirectory,
    };
    use crate::domain::catalog::PackageCatalog;
    use crate::domain::foundation::UserId;

    fn test_state() -> AdminAppState {
        AdminAppState {
            catalog: Arc::new(PackageCatalog::standard()),
            repository: Arc::new(InMemoryPayments::new()),
            ledger: Arc::new(InMemoryLedger::with_user(UserId::new())),
            users: Arc::new(StaticDirectory::empty()),
            notifier: Arc::new(RecordingNotifier::new()),
            currency: "INR".to_string(),
        }
    }

    #[test]
    fn admin_routes_creates_router() {
        let router = admin_routes();
        let _: Router<()> = router.with_state(test_state());
    }
}
