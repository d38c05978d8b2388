//! Notification inbox queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, NotificationId, UserId};
use crate::domain::notification::Notification;
use crate::ports::NotificationStore;

/// Inbox listings are capped at the most recent entries.
pub const INBOX_LIMIT: usize = 20;

/// Read and acknowledge a user's notifications.
pub struct NotificationInboxHandler {
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationInboxHandler {
    pub fn new(notifications: Arc<dyn NotificationStore>) -> Self {
        Self { notifications }
    }

    /// The user's most recent notifications, newest first.
    pub async fn recent(&self, user_id: &UserId) -> Result<Vec<Notification>, DomainError> {
        self.notifications.recent_for_user(user_id, INBOX_LIMIT).await
    }

    /// Mark one notification read. Recipient-scoped: returns `false` when
    /// the notification does not exist or belongs to someone else.
    pub async fn mark_read(
        &self,
        actor: &UserId,
        id: &NotificationId,
    ) -> Result<bool, DomainError> {
        self.notifications.mark_read(id, actor).await
    }
}
