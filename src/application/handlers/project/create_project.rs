//! Create project command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::project::{Project, ProjectColor, ProjectError};
use crate::ports::ProjectRepository;

/// Command to create a new project owned by the actor.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub actor: UserId,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to blue when not supplied.
    pub color: Option<ProjectColor>,
}

/// Handler for creating projects.
pub struct CreateProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl CreateProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, effects: SideEffects) -> Self {
        Self { projects, effects }
    }

    /// Create the project with the actor as owner and sole member.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty
    pub async fn handle(&self, command: CreateProjectCommand) -> Result<Project, ProjectError> {
        let project = Project::new(
            ProjectId::new(),
            command.actor,
            command.title,
            command.description,
            command.color.unwrap_or_default(),
        )
        .map_err(|e| ProjectError::ValidationFailed(e.to_string()))?;

        self.projects.insert(&project).await?;

        tracing::info!(project = %project.id(), owner = %command.actor, "project created");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::CreateProject,
                ActivityEntity::Project,
                *project.id().as_uuid(),
                Some(*project.id()),
                format!("Project \"{}\" was created", project.title()),
            ))
            .await;

        Ok(project)
    }
}
