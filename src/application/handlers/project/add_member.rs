//! Add member command handler.
//!
//! Direct member add for users who already have an account; users without
//! one go through the invitation flow instead.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::notification::{Notification, NotificationType};
use crate::domain::project::{Project, ProjectError};
use crate::ports::{IdentityDirectory, ProjectRepository};

/// Command to add an existing user to a project by email.
#[derive(Debug, Clone)]
pub struct AddMemberCommand {
    pub actor: UserId,
    pub project_id: ProjectId,
    pub email: String,
}

/// Handler for adding project members.
pub struct AddMemberHandler {
    projects: Arc<dyn ProjectRepository>,
    identity: Arc<dyn IdentityDirectory>,
    effects: SideEffects,
}

impl AddMemberHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        identity: Arc<dyn IdentityDirectory>,
        effects: SideEffects,
    ) -> Self {
        Self {
            projects,
            identity,
            effects,
        }
    }

    /// # Errors
    ///
    /// - `UserNotFound` if no account exists for the email
    /// - `NotFound` if the project is absent
    /// - `Forbidden` if the actor is not the project owner
    /// - `Conflict` if the user is already a member
    pub async fn handle(&self, command: AddMemberCommand) -> Result<Project, ProjectError> {
        let user = self
            .identity
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| ProjectError::UserNotFound(command.email.clone()))?;

        let mut project = self
            .projects
            .find_by_id(&command.project_id)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(ProjectError::NotFound(command.project_id))?;

        if !project.is_owner(&command.actor) {
            return Err(ProjectError::forbidden(
                "Only the project owner can add members",
            ));
        }
        if !project.add_member(user.id) {
            return Err(ProjectError::conflict("User is already a member"));
        }

        self.projects.update(&project).await?;

        tracing::info!(project = %project.id(), member = %user.id, "member added");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::AddMember,
                ActivityEntity::Project,
                *user.id.as_uuid(),
                Some(*project.id()),
                format!("{} was added to the project", user.email),
            ))
            .await;
        self.effects
            .notify(Notification::new(
                user.id,
                NotificationType::AddedToProject,
                format!("You were added to project \"{}\"", project.title()),
                Some(*project.id()),
                None,
            ))
            .await;
        self.effects
            .email(
                &user.email,
                "Added to project",
                &format!(
                    "<p>You were added to project \"{}\".</p>",
                    project.title()
                ),
            )
            .await;

        Ok(project)
    }
}
