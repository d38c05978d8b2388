//! Best-effort side effects attached to primary mutations.
//!
//! Activity records, notifications and emails are post-commit hooks: they
//! run after the primary state change is durably applied, each failure is
//! caught and logged, and none of them ever surfaces to the caller as a
//! mutation failure. At-most-once, not at-least-once.
//!
//! The one exception is comments: there the activity row IS the primary
//! mutation, so comment handlers append through the port directly and
//! propagate errors.

use std::sync::Arc;

use crate::domain::activity::Activity;
use crate::domain::foundation::UserId;
use crate::domain::notification::Notification;
use crate::ports::{ActivityLog, IdentityDirectory, Mailer, NotificationStore};

/// Fan-out for the side channels of a committed mutation.
#[derive(Clone)]
pub struct SideEffects {
    activity_log: Arc<dyn ActivityLog>,
    notifications: Arc<dyn NotificationStore>,
    mailer: Arc<dyn Mailer>,
    identity: Arc<dyn IdentityDirectory>,
}

impl SideEffects {
    pub fn new(
        activity_log: Arc<dyn ActivityLog>,
        notifications: Arc<dyn NotificationStore>,
        mailer: Arc<dyn Mailer>,
        identity: Arc<dyn IdentityDirectory>,
    ) -> Self {
        Self {
            activity_log,
            notifications,
            mailer,
            identity,
        }
    }

    /// Append an activity record; failures are logged and swallowed.
    pub async fn log_activity(&self, activity: Activity) {
        if let Err(err) = self.activity_log.append(&activity).await {
            tracing::warn!(action = ?activity.action, error = %err, "activity log failed");
        }
    }

    /// Push an in-app notification; failures are logged and swallowed.
    pub async fn notify(&self, notification: Notification) {
        if let Err(err) = self.notifications.push(&notification).await {
            tracing::warn!(
                recipient = %notification.recipient,
                kind = ?notification.kind,
                error = %err,
                "notification failed"
            );
        }
    }

    /// Send an email; failures are logged and swallowed.
    pub async fn email(&self, to: &str, subject: &str, html: &str) {
        if let Err(err) = self.mailer.send(to, subject, html).await {
            tracing::warn!(to = %to, subject = %subject, error = %err, "email send failed");
        }
    }

    /// Resolve a user and email them. A missing user is logged, not an error.
    pub async fn email_user(&self, user_id: &UserId, subject: &str, html: &str) {
        match self.identity.find_by_id(user_id).await {
            Ok(Some(user)) => self.email(&user.email, subject, html).await,
            Ok(None) => {
                tracing::warn!(user = %user_id, "email skipped: recipient not found");
            }
            Err(err) => {
                tracing::warn!(user = %user_id, error = %err, "email skipped: identity lookup failed");
            }
        }
    }

    /// Resolve a user by id, for side-effect message rendering only.
    pub async fn resolve_user(&self, user_id: &UserId) -> Option<crate::domain::foundation::User> {
        self.identity.find_by_id(user_id).await.ok().flatten()
    }
}
