//! User directory port.
//!
//! Narrow read-only view of the user/auth collaborator: just enough to
//! prefill the gateway checkout UI and address enrollment notifications.

use async_trait::async_trait;

use crate::domain::enrollment::UserContact;
use crate::domain::foundation::{DomainError, UserId};

/// Contact lookup for platform users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// The user's contact details, or None if the user does not exist.
    async fn contact(&self, user_id: &UserId) -> Result<Option<UserContact>, DomainError>;
}
