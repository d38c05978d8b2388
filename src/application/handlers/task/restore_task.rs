//! Restore task command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{TaskId, UserId};
use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Command to restore a task from the recycle bin.
#[derive(Debug, Clone)]
pub struct RestoreTaskCommand {
    pub actor: UserId,
    pub task_id: TaskId,
}

/// Handler for restoring soft-deleted tasks.
pub struct RestoreTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    effects: SideEffects,
}

impl RestoreTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, effects: SideEffects) -> Self {
        Self { tasks, effects }
    }

    /// Restore preserves status, assignee and every other pre-delete field.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no deleted task created by the actor matches
    pub async fn handle(&self, command: RestoreTaskCommand) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .restore_owned(&command.task_id, &command.actor)
            .await?
            .ok_or(TaskError::NotFound(command.task_id))?;

        tracing::info!(task = %task.id(), "task restored");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::RestoreTask,
                ActivityEntity::Task,
                *task.id().as_uuid(),
                task.project().copied(),
                format!("Task \"{}\" was restored", task.title()),
            ))
            .await;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::domain::task::{TaskPriority, TaskStatus};

    fn handler(ctx: &TestContext) -> RestoreTaskHandler {
        RestoreTaskHandler::new(ctx.tasks.clone(), ctx.effects())
    }

    async fn deleted_task(ctx: &TestContext, creator: UserId) -> Task {
        let mut task = Task::new(
            TaskId::new(),
            creator,
            "Write report".to_string(),
            None,
            TaskPriority::Medium,
            Timestamp::now(),
            Timestamp::now().plus_days(7),
            None,
        )
        .unwrap();
        task.transition_status(TaskStatus::Inprogress).unwrap();
        task.mark_deleted(Timestamp::now());
        ctx.tasks.insert(&task).await.unwrap();
        task
    }

    #[tokio::test]
    async fn restore_preserves_status() {
        let ctx = TestContext::new();
        let creator = UserId::new();
        let task = deleted_task(&ctx, creator).await;

        let restored = handler(&ctx)
            .handle(RestoreTaskCommand {
                actor: creator,
                task_id: *task.id(),
            })
            .await
            .unwrap();

        assert!(!restored.is_deleted());
        assert!(restored.deleted_at().is_none());
        assert_eq!(restored.status(), TaskStatus::Inprogress);
    }

    #[tokio::test]
    async fn restore_of_active_task_fails() {
        let ctx = TestContext::new();
        let creator = UserId::new();
        let task = Task::new(
            TaskId::new(),
            creator,
            "Active".to_string(),
            None,
            TaskPriority::Low,
            Timestamp::now(),
            Timestamp::now().plus_days(1),
            None,
        )
        .unwrap();
        ctx.tasks.insert(&task).await.unwrap();

        let err = handler(&ctx)
            .handle(RestoreTaskCommand {
                actor: creator,
                task_id: *task.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
    }

    #[tokio::test]
    async fn non_creator_cannot_restore() {
        let ctx = TestContext::new();
        let task = deleted_task(&ctx, UserId::new()).await;

        let err = handler(&ctx)
            .handle(RestoreTaskCommand {
                actor: UserId::new(),
                task_id: *task.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
    }
}
