//! Notification sink port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, NotificationId, UserId};
use crate::domain::notification::Notification;

/// Per-user inbox of system messages.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Append a notification to the recipient's inbox.
    async fn push(&self, notification: &Notification) -> Result<(), DomainError>;

    /// Most recent notifications for a user, newest first, capped at `limit`.
    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<Notification>, DomainError>;

    /// Mark a notification read, scoped to its recipient.
    ///
    /// Returns `false` when no matching notification exists for that user.
    async fn mark_read(
        &self,
        id: &NotificationId,
        recipient: &UserId,
    ) -> Result<bool, DomainError>;
}
