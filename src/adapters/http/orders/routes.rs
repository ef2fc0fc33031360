//! Axum router configuration for order endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_order, dev_confirm, my_payments, verify_payment, OrdersAppState};

/// Create the order API router.
///
/// # Routes
///
/// - `POST /` - Create a payment order
/// - `POST /verify` - Verify a gateway callback
/// - `POST /dev-confirm` - Confirm a mock order (outside production only)
/// - `GET /my-payments` - The caller's payment history
///
/// The dev-confirm route is not mounted in production; the mock checkout
/// path simply does not exist there.
pub fn orders_routes(dev_confirm_enabled: bool) -> Router<OrdersAppState> {
    let router = Router::new()
        .route("/", post(create_order))
        .route("/verify", post(verify_payment))
        .route("/my-payments", get(my_payments));

    if dev_confirm_enabled {
        router.route("/dev-confirm", post(dev_confirm))
    } else {
        router
    }
}
