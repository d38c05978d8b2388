//! Remove member command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::notification::{Notification, NotificationType};
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Command to remove a member from a project.
#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    pub actor: UserId,
    pub project_id: ProjectId,
    pub user_id: UserId,
}

/// Handler for removing project members.
pub struct RemoveMemberHandler {
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl RemoveMemberHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, effects: SideEffects) -> Self {
        Self { projects, effects }
    }

    /// # Errors
    ///
    /// - `NotFound` if the project is absent
    /// - `Forbidden` if the actor is not the project owner
    /// - `ValidationFailed` if the target is the owner
    /// - `MemberNotFound` if the target is not a member
    pub async fn handle(&self, command: RemoveMemberCommand) -> Result<Project, ProjectError> {
        let mut project = self
            .projects
            .find_by_id(&command.project_id)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(ProjectError::NotFound(command.project_id))?;

        if !project.is_owner(&command.actor) {
            return Err(ProjectError::forbidden(
                "Only the project owner can remove members",
            ));
        }
        let removed = project
            .remove_member(&command.user_id)
            .map_err(|e| ProjectError::ValidationFailed(e.to_string()))?;
        if !removed {
            return Err(ProjectError::MemberNotFound);
        }

        self.projects.update(&project).await?;

        let label = match self.effects.resolve_user(&command.user_id).await {
            Some(user) => user.email,
            None => command.user_id.to_string(),
        };
        tracing::info!(project = %project.id(), member = %command.user_id, "member removed");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::RemoveMember,
                ActivityEntity::Project,
                *command.user_id.as_uuid(),
                Some(*project.id()),
                format!("{} was removed from the project", label),
            ))
            .await;
        self.effects
            .notify(Notification::new(
                command.user_id,
                NotificationType::RemovedFromProject,
                format!("You were removed from project \"{}\"", project.title()),
                Some(*project.id()),
                None,
            ))
            .await;

        Ok(project)
    }
}
