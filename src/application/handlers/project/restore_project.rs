//! Restore project command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Command to restore a project from the recycle bin.
#[derive(Debug, Clone)]
pub struct RestoreProjectCommand {
    pub actor: UserId,
    pub project_id: ProjectId,
}

/// Handler for restoring soft-deleted projects.
pub struct RestoreProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl RestoreProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, effects: SideEffects) -> Self {
        Self { projects, effects }
    }

    /// Restore preserves every pre-delete field, member list included.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no deleted project owned by the actor matches
    pub async fn handle(&self, command: RestoreProjectCommand) -> Result<Project, ProjectError> {
        let project = self
            .projects
            .restore_owned(&command.project_id, &command.actor)
            .await?
            .ok_or(ProjectError::NotFound(command.project_id))?;

        tracing::info!(project = %project.id(), "project restored");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::RestoreProject,
                ActivityEntity::Project,
                *project.id().as_uuid(),
                Some(*project.id()),
                format!("Project \"{}\" was restored", project.title()),
            ))
            .await;

        Ok(project)
    }
}
