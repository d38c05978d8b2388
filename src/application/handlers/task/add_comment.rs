//! Task comment command handler.
//!
//! Task comments are creator-scoped (ownership, not project membership),
//! matching the edit scope of the task itself.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityEntity};
use crate::domain::foundation::{ActivityId, TaskId, UserId};
use crate::domain::task::TaskError;
use crate::ports::{ActivityLog, TaskRepository};

/// Command to comment on a task, optionally replying to another comment.
#[derive(Debug, Clone)]
pub struct CommentOnTaskCommand {
    pub actor: UserId,
    pub task_id: TaskId,
    pub message: String,
    pub parent_comment: Option<ActivityId>,
}

/// Handler for task comments.
pub struct CommentOnTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    activity_log: Arc<dyn ActivityLog>,
}

impl CommentOnTaskHandler {
    pub fn new(tasks: Arc<dyn TaskRepository>, activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            tasks,
            activity_log,
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the message is empty
    /// - `NotFound` if the task is absent, deleted, or not created by the
    ///   actor
    pub async fn handle(&self, command: CommentOnTaskCommand) -> Result<Activity, TaskError> {
        let message = command.message.trim();
        if message.is_empty() {
            return Err(TaskError::validation("Comment message cannot be empty"));
        }

        let task = self
            .tasks
            .find_by_id(&command.task_id)
            .await?
            .filter(|t| !t.is_deleted() && t.created_by() == &command.actor)
            .ok_or(TaskError::NotFound(command.task_id))?;

        let comment = Activity::comment(
            command.actor,
            ActivityEntity::Task,
            *task.id().as_uuid(),
            task.project().copied(),
            message,
            command.parent_comment,
        );
        self.activity_log.append(&comment).await?;
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::activity::ActivityAction;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::domain::task::{Task, TaskPriority};

    fn handler(ctx: &TestContext) -> CommentOnTaskHandler {
        CommentOnTaskHandler::new(ctx.tasks.clone(), ctx.activity.clone())
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
    async fn creator_can_comment() {
        let ctx = TestContext::new();
        let creator = UserId::new();
        let task = seeded_task(&ctx, creator).await;

        let comment = handler(&ctx)
            .handle(CommentOnTaskCommand {
                actor: creator,
                task_id: *task.id(),
                message: "Half done".to_string(),
                parent_comment: None,
            })
            .await
            .unwrap();

        assert_eq!(comment.action, ActivityAction::Comment);
        assert_eq!(comment.entity_id, *task.id().as_uuid());
        assert_eq!(ctx.activity.all().await.len(), 1);
    }

    #[tokio::test]
    async fn non_creator_sees_not_found() {
        let ctx = TestContext::new();
        let task = seeded_task(&ctx, UserId::new()).await;

        let err = handler(&ctx)
            .handle(CommentOnTaskCommand {
                actor: UserId::new(),
                task_id: *task.id(),
                message: "hi".to_string(),
                parent_comment: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let ctx = TestContext::new();
        let creator = UserId::new();
        let task = seeded_task(&ctx, creator).await;

        let err = handler(&ctx)
            .handle(CommentOnTaskCommand {
                actor: creator,
                task_id: *task.id(),
                message: " ".to_string(),
                parent_comment: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
