//! Accept invitation command handler.
//!
//! The claim token is the credential; the email check on top of it binds
//! the invitation to the account that presents the token. Membership is
//! idempotent, the invitation itself is single-use.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{Timestamp, User};
use crate::domain::invitation::{InvitationError, InvitationStatus};
use crate::domain::notification::{Notification, NotificationType};
use crate::domain::project::Project;
use crate::ports::{InvitationRepository, ProjectRepository};

/// Command to accept an invitation with its claim token. The actor is the
/// full authenticated user record, needed for the email match.
#[derive(Debug, Clone)]
pub struct AcceptInvitationCommand {
    pub actor: User,
    pub token: String,
}

/// Result of accepting: the joined project, and whether the member list
/// actually changed (false when the invitee was already a member).
#[derive(Debug, Clone)]
pub struct AcceptInvitationOutcome {
    pub project: Project,
    pub newly_joined: bool,
}

/// Handler for accepting invitations.
pub struct AcceptInvitationHandler {
    invitations: Arc<dyn InvitationRepository>,
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl AcceptInvitationHandler {
    pub fn new(
        invitations: Arc<dyn InvitationRepository>,
        projects: Arc<dyn ProjectRepository>,
        effects: SideEffects,
    ) -> Self {
        Self {
            invitations,
            projects,
            effects,
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the token is missing
    /// - `NotFound` if no invitation matches the token
    /// - `NotPending` if the invitation was already accepted or expired
    /// - `Expired` if the validity window has passed (the invitation is
    ///   transitioned to expired as a side effect)
    /// - `Forbidden` if the actor's email does not match the invitee
    /// - `ProjectNotFound` if the project has since disappeared
    pub async fn handle(
        &self,
        command: AcceptInvitationCommand,
    ) -> Result<AcceptInvitationOutcome, InvitationError> {
        let token = command.token.trim();
        if token.is_empty() {
            return Err(InvitationError::validation("Invitation token is required"));
        }

        let mut invitation = self
            .invitations
            .find_by_token(token)
            .await?
            .ok_or(InvitationError::NotFound)?;

        if invitation.status() != InvitationStatus::Pending {
            return Err(InvitationError::NotPending);
        }
        if invitation.is_expired_at(&Timestamp::now()) {
            // Lazy expiry: the sweep may not have caught up yet.
            if invitation.expire().is_ok() {
                self.invitations.update(&invitation).await?;
            }
            return Err(InvitationError::Expired);
        }
        if !invitation.is_for_email(&command.actor.email) {
            return Err(InvitationError::forbidden(
                "This invitation was sent to a different account",
            ));
        }

        let mut project = self
            .projects
            .find_by_id(invitation.project())
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(InvitationError::ProjectNotFound)?;

        let newly_joined = project.add_member(command.actor.id);
        if newly_joined {
            self.projects.update(&project).await?;
        }

        invitation
            .accept()
            .map_err(|_| InvitationError::NotPending)?;
        self.invitations.update(&invitation).await?;

        tracing::info!(
            project = %project.id(),
            member = %command.actor.id,
            newly_joined,
            "invitation accepted"
        );
        if newly_joined {
            self.effects
                .log_activity(Activity::record(
                    command.actor.id,
                    ActivityAction::JoinProject,
                    ActivityEntity::Project,
                    *project.id().as_uuid(),
                    Some(*project.id()),
                    format!("{} joined the project", command.actor.email),
                ))
                .await;
            self.effects
                .notify(Notification::new(
                    *project.owner(),
                    NotificationType::ProjectJoined,
                    format!(
                        "{} joined your project \"{}\"",
                        command.actor.username,
                        project.title()
                    ),
                    Some(*project.id()),
                    None,
                ))
                .await;
        }

        Ok(AcceptInvitationOutcome {
            project,
            newly_joined,
        })
    }
}
