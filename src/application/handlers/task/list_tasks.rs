//! Task listing queries.

use std::sync::Arc;

use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::task::{Task, TaskError, TaskFilter};
use crate::ports::{ProjectRepository, TaskRepository};

/// Queries over tasks: personal listings, project boards, recycle bin.
pub struct ListTasksQueryHandler {
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl ListTasksQueryHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { tasks, projects }
    }

    /// Non-deleted tasks the user created or is assigned to.
    pub async fn my_tasks(
        &self,
        user_id: &UserId,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.find_for_user(user_id, filter).await?)
    }

    /// Non-deleted tasks of a project, member-scoped.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project is absent or deleted
    /// - `Forbidden` if the actor is not a member
    pub async fn for_project(
        &self,
        actor: &UserId,
        project_id: &ProjectId,
    ) -> Result<Vec<Task>, TaskError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await
            .map_err(TaskError::from)?
            .filter(|p| !p.is_deleted())
            .ok_or(TaskError::ProjectNotFound)?;
        if !project.is_member(actor) {
            return Err(TaskError::forbidden("Access denied"));
        }
        Ok(self.tasks.find_for_project(project_id).await?)
    }

    /// Soft-deleted tasks created by the user.
    pub async fn recycle_bin(&self, creator: &UserId) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.find_deleted_for_creator(creator).await?)
    }
}
