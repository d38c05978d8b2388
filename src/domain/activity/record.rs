//! Activity record types.
//!
//! Activities are append-mostly: written once per domain event, queried by
//! project or entity. Comments are a specialization with action `COMMENT`
//! and may form threads via `parent_comment`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{ActivityId, ProjectId, Timestamp, UserId};

/// Domain event kinds recorded in the ledger.
///
/// Wire form is the SCREAMING_SNAKE name, verbatim for existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    CreateTask,
    UpdateTask,
    DeleteTask,
    RestoreTask,
    CompleteTask,
    CreateProject,
    DeleteProject,
    RestoreProject,
    AddMember,
    RemoveMember,
    JoinProject,
    Comment,
}

/// Kind of entity an activity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityEntity {
    Task,
    Project,
}

/// One entry in the activity ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    /// User who performed the action.
    pub actor: UserId,
    pub action: ActivityAction,
    pub entity_type: ActivityEntity,
    /// Identifier of the affected entity. Polymorphic: a task, project or
    /// (for member events) user id.
    pub entity_id: Uuid,
    /// Project the entry belongs to, when there is one.
    pub project: Option<ProjectId>,
    pub message: String,
    /// Parent activity for threaded comments.
    pub parent_comment: Option<ActivityId>,
    pub edited: bool,
    pub created_at: Timestamp,
}

impl Activity {
    /// Record a domain event.
    pub fn record(
        actor: UserId,
        action: ActivityAction,
        entity_type: ActivityEntity,
        entity_id: Uuid,
        project: Option<ProjectId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            actor,
            action,
            entity_type,
            entity_id,
            project,
            message: message.into(),
            parent_comment: None,
            edited: false,
            created_at: Timestamp::now(),
        }
    }

    /// Record a comment, optionally threaded under a parent comment.
    pub fn comment(
        actor: UserId,
        entity_type: ActivityEntity,
        entity_id: Uuid,
        project: Option<ProjectId>,
        message: impl Into<String>,
        parent_comment: Option<ActivityId>,
    ) -> Self {
        Self {
            parent_comment,
            ..Self::record(
                actor,
                ActivityAction::Comment,
                entity_type,
                entity_id,
                project,
                message,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ActivityAction::CreateProject).unwrap(),
            "\"CREATE_PROJECT\""
        );
        assert_eq!(
            serde_json::to_string(&ActivityAction::JoinProject).unwrap(),
            "\"JOIN_PROJECT\""
        );
    }

    #[test]
    fn entity_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ActivityEntity::Task).unwrap(),
            "\"TASK\""
        );
    }

    #[test]
    fn comment_sets_action_and_parent() {
        let parent = ActivityId::new();
        let comment = Activity::comment(
            UserId::new(),
            ActivityEntity::Project,
            *ProjectId::new().as_uuid(),
            None,
            "Looks good",
            Some(parent),
        );
        assert_eq!(comment.action, ActivityAction::Comment);
        assert_eq!(comment.parent_comment, Some(parent));
        assert!(!comment.edited);
    }
}
