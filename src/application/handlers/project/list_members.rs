//! Member listing query.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{ProjectId, User, UserId};
use crate::domain::project::{MemberRole, ProjectError};
use crate::ports::{IdentityDirectory, ProjectRepository};

/// A resolved member with their role in the project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectMember {
    pub user: User,
    pub role: MemberRole,
}

/// Lists project members with resolved user records, owner first.
pub struct ListMembersQueryHandler {
    projects: Arc<dyn ProjectRepository>,
    identity: Arc<dyn IdentityDirectory>,
}

impl ListMembersQueryHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, identity: Arc<dyn IdentityDirectory>) -> Self {
        Self { projects, identity }
    }

    /// # Errors
    ///
    /// - `NotFound` if the project is absent
    /// - `Forbidden` if the actor is not a member
    pub async fn handle(
        &self,
        actor: &UserId,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectMember>, ProjectError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(ProjectError::NotFound(*project_id))?;

        if !project.is_member(actor) {
            return Err(ProjectError::forbidden("Access denied"));
        }

        // The owner is members[0] by construction, so the natural order
        // already puts them first. Dangling ids (deleted accounts) are
        // skipped rather than failing the whole listing.
        let mut members = Vec::with_capacity(project.members().len());
        for member_id in project.members() {
            if let Some(user) = self.identity.find_by_id(member_id).await? {
                let role = if project.is_owner(member_id) {
                    MemberRole::Owner
                } else {
                    MemberRole::Member
                };
                members.push(ProjectMember { user, role });
            }
        }
        Ok(members)
    }
}
