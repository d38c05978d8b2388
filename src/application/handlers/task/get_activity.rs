//! Task activity feed query.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityEntity};
use crate::domain::foundation::{TaskId, UserId};
use crate::domain::task::TaskError;
use crate::ports::{ActivityLog, TaskRepository};

/// Creator-scoped view of a task's activity entries, newest first.
pub struct TaskActivityQueryHandler {
    tasks: Arc<dyn TaskRepository>,
    activity_log: Arc<dyn ActivityLog>,
}

impl TaskActivityQueryHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            tasks,
            activity_log,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the task is absent, deleted, or not created by the
    ///   actor
    pub async fn handle(
        &self,
        actor: &UserId,
        task_id: &TaskId,
    ) -> Result<Vec<Activity>, TaskError> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .filter(|t| !t.is_deleted() && t.created_by() == actor)
            .ok_or(TaskError::NotFound(*task_id))?;

        Ok(self
            .activity_log
            .find_for_entity(ActivityEntity::Task, *task.id().as_uuid())
            .await?)
    }
}
