//! Invite member command handler.
//!
//! Two outcomes depending on whether the invitee already has an account:
//! existing users are added as members directly, unknown emails get a
//! pending invitation with a claim link sent by email.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{InvitationId, ProjectId, Timestamp, UserId};
use crate::domain::invitation::{Invitation, InvitationError};
use crate::domain::notification::{Notification, NotificationType};
use crate::domain::project::Project;
use crate::ports::{IdentityDirectory, InvitationRepository, ProjectRepository};

/// Command to invite someone to a project by email.
#[derive(Debug, Clone)]
pub struct InviteMemberCommand {
    pub actor: UserId,
    pub project_id: ProjectId,
    pub email: String,
}

/// Result of an invite: the invitee was either added on the spot or sent
/// a pending invitation.
#[derive(Debug, Clone)]
pub enum InviteOutcome {
    MemberAdded(Project),
    InvitationSent(Invitation),
}

/// Handler for inviting members.
pub struct InviteMemberHandler {
    projects: Arc<dyn ProjectRepository>,
    invitations: Arc<dyn InvitationRepository>,
    identity: Arc<dyn IdentityDirectory>,
    effects: SideEffects,
    /// Base URL the claim token is appended to in invite emails.
    invite_base_url: String,
}

impl InviteMemberHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        invitations: Arc<dyn InvitationRepository>,
        identity: Arc<dyn IdentityDirectory>,
        effects: SideEffects,
        invite_base_url: impl Into<String>,
    ) -> Self {
        Self {
            projects,
            invitations,
            identity,
            effects,
            invite_base_url: invite_base_url.into(),
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the email is empty
    /// - `ProjectNotFound` if the project is absent or deleted
    /// - `Forbidden` if the actor is not the project owner
    /// - `AlreadyMember` if the invitee already belongs to the project
    /// - `AlreadyInvited` if a claimable invitation already exists
    pub async fn handle(&self, command: InviteMemberCommand) -> Result<InviteOutcome, InvitationError> {
        let email = command.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(InvitationError::validation("Email is required"));
        }

        let mut project = self
            .projects
            .find_by_id(&command.project_id)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(InvitationError::ProjectNotFound)?;

        if !project.is_owner(&command.actor) {
            return Err(InvitationError::forbidden(
                "Only the project owner can invite members",
            ));
        }

        // Existing account: skip the token dance and add them directly.
        if let Some(user) = self.identity.find_by_email(&email).await? {
            if !project.add_member(user.id) {
                return Err(InvitationError::AlreadyMember);
            }
            self.projects.update(&project).await?;

            tracing::info!(project = %project.id(), member = %user.id, "invitee added directly");
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
                    &format!("<p>You were added to project \"{}\".</p>", project.title()),
                )
                .await;

            return Ok(InviteOutcome::MemberAdded(project));
        }

        let now = Timestamp::now();
        if let Some(mut existing) = self.invitations.find_pending(&email, project.id()).await? {
            if existing.is_claimable_at(&now) {
                return Err(InvitationError::AlreadyInvited);
            }
            // Stale pending invite: expire it lazily and fall through to a
            // fresh one.
            if existing.expire().is_ok() {
                self.invitations.update(&existing).await?;
            }
        }

        let invitation = Invitation::new(InvitationId::new(), &email, *project.id())
            .map_err(|e| InvitationError::ValidationFailed(e.to_string()))?;
        self.invitations.insert(&invitation).await?;

        tracing::info!(project = %project.id(), invitation = %invitation.id(), "invitation sent");
        let link = format!("{}?token={}", self.invite_base_url, invitation.token());
        self.effects
            .email(
                &email,
                "Project invitation",
                &format!(
                    "<p>You have been invited to join \"{}\".</p>\
                     <p><a href=\"{}\">Accept invitation</a></p>\
                     <p>This invitation expires in 24 hours.</p>",
                    project.title(),
                    link
                ),
            )
            .await;

        Ok(InviteOutcome::InvitationSent(invitation))
    }
}
