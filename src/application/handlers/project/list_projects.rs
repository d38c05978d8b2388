//! Project listing queries.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Queries over a user's projects: the active list and the recycle bin.
pub struct ListProjectsQueryHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl ListProjectsQueryHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// Non-deleted projects the user is a member of (owned or joined).
    pub async fn active(&self, user_id: &UserId) -> Result<Vec<Project>, ProjectError> {
        Ok(self.projects.find_active_for_member(user_id).await?)
    }

    /// Soft-deleted projects owned by the user.
    pub async fn recycle_bin(&self, owner: &UserId) -> Result<Vec<Project>, ProjectError> {
        Ok(self.projects.find_deleted_for_owner(owner).await?)
    }
}
