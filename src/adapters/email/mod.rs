//! Email adapters - enrollment notification delivery.
//!
//! - `ResendNotifier` - Sends confirmation emails through the Resend API
//! - `LogNotifier` - Logs notices instead of sending (no API key configured)

mod log_notifier;
mod resend_notifier;

pub use log_notifier::LogNotifier;
pub use resend_notifier::ResendNotifier;
