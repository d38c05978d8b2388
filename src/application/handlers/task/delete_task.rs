//! Soft-delete task command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{TaskId, Timestamp, UserId};
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Command to move a task to the recycle bin.
#[derive(Debug, Clone)]
pub struct SoftDeleteTaskCommand {
    pub actor: UserId,
    pub task_id: TaskId,
}

/// Handler for soft-deleting tasks, creator-scoped and atomic.
pub struct SoftDeleteTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    effects: SideEffects,
}

impl SoftDeleteTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, effects: SideEffects) -> Self {
        Self { tasks, effects }
    }

    /// # Errors
    ///
    /// - `NotFound` if no task created by the actor matches
    pub async fn handle(&self, command: SoftDeleteTaskCommand) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .soft_delete_owned(&command.task_id, &command.actor, Timestamp::now())
            .await?
            .ok_or(TaskError::NotFound(command.task_id))?;

        tracing::info!(task = %task.id(), "task soft-deleted");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::DeleteTask,
                ActivityEntity::Task,
                *task.id().as_uuid(),
                task.project().copied(),
                format!("Task \"{}\" was deleted", task.title()),
            ))
            .await;

        Ok(task)
    }
}
