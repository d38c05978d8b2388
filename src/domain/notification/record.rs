//! Notification record types.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{NotificationId, ProjectId, TaskId, Timestamp, UserId};

/// Kinds of in-app notification. Wire form is verbatim for existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    LoginAlert,
    TaskAssigned,
    TaskCompleted,
    AddedToProject,
    RemovedFromProject,
    ProjectJoined,
}

/// One entry in a user's notification inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    /// User the notification is addressed to.
    pub recipient: UserId,
    pub kind: NotificationType,
    pub message: String,
    pub project: Option<ProjectId>,
    pub task: Option<TaskId>,
    pub read: bool,
    pub created_at: Timestamp,
}

impl Notification {
    pub fn new(
        recipient: UserId,
        kind: NotificationType,
        message: impl Into<String>,
        project: Option<ProjectId>,
        task: Option<TaskId>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            recipient,
            kind,
            message: message.into(),
            project,
            task,
            read: false,
            created_at: Timestamp::now(),
        }
    }

    /// Mark the notification read.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&NotificationType::AddedToProject).unwrap(),
            "\"ADDED_TO_PROJECT\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationType::ProjectJoined).unwrap(),
            "\"PROJECT_JOINED\""
        );
    }

    #[test]
    fn new_notification_is_unread() {
        let mut n = Notification::new(
            UserId::new(),
            NotificationType::TaskAssigned,
            "You were assigned",
            None,
            None,
        );
        assert!(!n.read);
        n.mark_read();
        assert!(n.read);
    }
}
