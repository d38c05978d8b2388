//! Project comment command handler.
//!
//! Unlike the other activity records, the comment row is the primary
//! mutation here, so append errors propagate to the caller.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityEntity};
use crate::domain::foundation::{ActivityId, ProjectId, UserId};
use crate::domain::project::ProjectError;
use crate::ports::{ActivityLog, ProjectRepository};

/// Command to comment on a project, optionally replying to another comment.
#[derive(Debug, Clone)]
pub struct CommentOnProjectCommand {
    pub actor: UserId,
    pub project_id: ProjectId,
    pub message: String,
    pub parent_comment: Option<ActivityId>,
}

/// Handler for project comments.
pub struct CommentOnProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    activity_log: Arc<dyn ActivityLog>,
}

impl CommentOnProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            projects,
            activity_log,
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the message is empty
    /// - `NotFound` if the project is absent
    /// - `Forbidden` if the actor is not a member
    pub async fn handle(&self, command: CommentOnProjectCommand) -> Result<Activity, ProjectError> {
        let message = command.message.trim();
        if message.is_empty() {
            return Err(ProjectError::validation("Comment message cannot be empty"));
        }

        let project = self
            .projects
            .find_by_id(&command.project_id)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(ProjectError::NotFound(command.project_id))?;

        if !project.is_member(&command.actor) {
            return Err(ProjectError::forbidden("Access denied"));
        }

        let comment = Activity::comment(
            command.actor,
            ActivityEntity::Project,
            *project.id().as_uuid(),
            Some(*project.id()),
            message,
            command.parent_comment,
        );
        self.activity_log.append(&comment).await?;
        Ok(comment)
    }
}
