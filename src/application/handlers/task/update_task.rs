//! Update task command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{TaskId, UserId};
use crate::domain::task::{Task, TaskError, TaskPatch};
use crate::ports::TaskRepository;

/// Command to apply a free-form edit to a task. Status is not editable
/// through this path; the workflow transition handler owns it.
#[derive(Debug, Clone)]
pub struct UpdateTaskCommand {
    pub actor: UserId,
    pub task_id: TaskId,
    pub patch: TaskPatch,
}

/// Handler for free-form task edits, scoped to the task creator.
pub struct UpdateTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    effects: SideEffects,
}

impl UpdateTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, effects: SideEffects) -> Self {
        Self { tasks, effects }
    }

    /// # Errors
    ///
    /// - `NotFound` if the task is absent, deleted, or not created by the
    ///   actor (creator scope hides other users' tasks entirely)
    /// - `ValidationFailed` if the patch sets an empty title
    pub async fn handle(&self, command: UpdateTaskCommand) -> Result<Task, TaskError> {
        let mut task = self
            .tasks
            .find_by_id(&command.task_id)
            .await?
            .filter(|t| !t.is_deleted() && t.created_by() == &command.actor)
            .ok_or(TaskError::NotFound(command.task_id))?;

        task.apply_patch(command.patch)
            .map_err(|e| TaskError::ValidationFailed(e.to_string()))?;
        self.tasks.update(&task).await?;

        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::UpdateTask,
                ActivityEntity::Task,
                *task.id().as_uuid(),
                task.project().copied(),
                format!("Task \"{}\" was updated", task.title()),
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

    fn handler(ctx: &TestContext) -> UpdateTaskHandler {
        UpdateTaskHandler::new(ctx.tasks.clone(), ctx.effects())
    }

    async fn seeded_task(ctx: &TestContext, creator: UserId) -> Task {
        let task = Task::new(
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
        ctx.tasks.insert(&task).await.unwrap();
        task
    }

    #[tokio::test]
    async fn creator_can_edit_fields() {
        let ctx = TestContext::new();
        let creator = UserId::new();
        let task = seeded_task(&ctx, creator).await;

        let updated = handler(&ctx)
            .handle(UpdateTaskCommand {
                actor: creator,
                task_id: *task.id(),
                patch: TaskPatch {
                    title: Some("Write final report".to_string()),
                    priority: Some(TaskPriority::High),
                    ..TaskPatch::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.title(), "Write final report");
        assert_eq!(updated.priority(), TaskPriority::High);
        // Status untouched by free-form edits.
        assert_eq!(updated.status(), TaskStatus::Todo);
    }

    #[tokio::test]
    async fn non_creator_sees_not_found() {
        let ctx = TestContext::new();
        let task = seeded_task(&ctx, UserId::new()).await;

        let err = handler(&ctx)
            .handle(UpdateTaskCommand {
                actor: UserId::new(),
                task_id: *task.id(),
                patch: TaskPatch::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
    }

    #[tokio::test]
    async fn deleted_task_cannot_be_edited() {
        let ctx = TestContext::new();
        let creator = UserId::new();
        let mut task = seeded_task(&ctx, creator).await;
        task.mark_deleted(Timestamp::now());
        ctx.tasks.update(&task).await.unwrap();

        let err = handler(&ctx)
            .handle(UpdateTaskCommand {
                actor: creator,
                task_id: *task.id(),
                patch: TaskPatch::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
    }

    #[tokio::test]
    async fn empty_title_patch_is_rejected() {
        let ctx = TestContext::new();
        let creator = UserId::new();
        let task = seeded_task(&ctx, creator).await;

        let err = handler(&ctx)
            .handle(UpdateTaskCommand {
                actor: creator,
                task_id: *task.id(),
                patch: TaskPatch {
                    title: Some("  ".to_string()),
                    ..TaskPatch::default()
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
