//! Assign task command handler.
//!
//! Assignment is an owner privilege: only the project owner hands tasks
//! out, and only to current members.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{TaskId, UserId};
use crate::domain::notification::{Notification, NotificationType};
use crate::domain::task::{Task, TaskError};
use crate::ports::{ProjectRepository, TaskRepository};

/// Command to assign a project task to a member.
#[derive(Debug, Clone)]
pub struct AssignTaskCommand {
    pub actor: UserId,
    pub task_id: TaskId,
    pub user_id: UserId,
}

/// Handler for task assignment.
pub struct AssignTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl AssignTaskHandler {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        projects: Arc<dyn ProjectRepository>,
        effects: SideEffects,
    ) -> Self {
        Self {
            tasks,
            projects,
            effects,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the task is absent
    /// - `ValidationFailed` if the task is deleted, has no project, or the
    ///   target user is not a member
    /// - `ProjectNotFound` if the task's project no longer exists
    /// - `Forbidden` if the actor is not the project owner
    /// - `Conflict` if the task is already assigned to that user
    pub async fn handle(&self, command: AssignTaskCommand) -> Result<Task, TaskError> {
        let mut task = self
            .tasks
            .find_by_id(&command.task_id)
            .await?
            .ok_or(TaskError::NotFound(command.task_id))?;

        if task.is_deleted() {
            return Err(TaskError::validation("Cannot assign a deleted task"));
        }
        let project_id = *task
            .project()
            .ok_or_else(|| TaskError::validation("Task is not part of a project"))?;

        let project = self
            .projects
            .find_by_id(&project_id)
            .await
            .map_err(TaskError::from)?
            .filter(|p| !p.is_deleted())
            .ok_or(TaskError::ProjectNotFound)?;

        if !project.is_owner(&command.actor) {
            return Err(TaskError::forbidden("Only the project owner can assign tasks"));
        }
        if !project.is_member(&command.user_id) {
            return Err(TaskError::validation("User is not a project member"));
        }
        if !task.assign_to(command.user_id) {
            return Err(TaskError::conflict("Task is already assigned to this user"));
        }

        self.tasks.update(&task).await?;

        tracing::info!(task = %task.id(), assignee = %command.user_id, "task assigned");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::UpdateTask,
                ActivityEntity::Task,
                *task.id().as_uuid(),
                Some(project_id),
                format!("Task \"{}\" was assigned", task.title()),
            ))
            .await;
        self.effects
            .notify(Notification::new(
                command.user_id,
                NotificationType::TaskAssigned,
                format!("You were assigned task \"{}\"", task.title()),
                Some(project_id),
                Some(*task.id()),
            ))
            .await;
        self.effects
            .email_user(
                &command.user_id,
                "You have been assigned a task",
                &format!(
                    "<p>You have been assigned task \"{}\" in project \"{}\".</p>",
                    task.title(),
                    project.title()
                ),
            )
            .await;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::foundation::{ErrorCode, ProjectId, Timestamp};
    use crate::domain::project::{Project, ProjectColor};
    use crate::domain::task::TaskPriority;
    use crate::ports::NotificationStore;

    struct Fixture {
        ctx: TestContext,
        owner: UserId,
        member: UserId,
        task: Task,
    }

    async fn fixture() -> Fixture {
        let ctx = TestContext::new();
        let owner = ctx.user("alice", "alice@example.com").await;
        let member = ctx.user("bob", "bob@example.com").await;

        let mut project = Project::new(
            ProjectId::new(),
            owner.id,
            "Launch plan".to_string(),
            None,
            ProjectColor::Blue,
        )
        .unwrap();
        project.add_member(member.id);
        ctx.projects.insert(&project).await.unwrap();

        let task = Task::new(
            TaskId::new(),
            owner.id,
            "Write report".to_string(),
            None,
            TaskPriority::Medium,
            Timestamp::now(),
            Timestamp::now().plus_days(7),
            Some(*project.id()),
        )
        .unwrap();
        ctx.tasks.insert(&task).await.unwrap();

        Fixture {
            owner: owner.id,
            member: member.id,
            task,
            ctx,
        }
    }

    fn handler(ctx: &TestContext) -> AssignTaskHandler {
        AssignTaskHandler::new(ctx.tasks.clone(), ctx.projects.clone(), ctx.effects())
    }

    #[tokio::test]
    async fn owner_assigns_member_with_side_effects() {
        let f = fixture().await;

        let task = handler(&f.ctx)
            .handle(AssignTaskCommand {
                actor: f.owner,
                task_id: *f.task.id(),
                user_id: f.member,
            })
            .await
            .unwrap();

        assert_eq!(task.assignee(), Some(&f.member));

        let inbox = f.ctx.notifications.recent_for_user(&f.member, 20).await.unwrap();
        assert_eq!(inbox[0].kind, NotificationType::TaskAssigned);

        let sent = f.ctx.mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "bob@example.com");
        assert_eq!(sent[0].subject, "You have been assigned a task");
    }

    #[tokio::test]
    async fn non_owner_cannot_assign() {
        let f = fixture().await;
        let err = handler(&f.ctx)
            .handle(AssignTaskCommand {
                actor: f.member,
                task_id: *f.task.id(),
                user_id: f.member,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn target_must_be_a_member() {
        let f = fixture().await;
        let err = handler(&f.ctx)
            .handle(AssignTaskCommand {
                actor: f.owner,
                task_id: *f.task.id(),
                user_id: UserId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn reassigning_same_user_is_a_conflict() {
        let f = fixture().await;
        let handler = handler(&f.ctx);
        let command = AssignTaskCommand {
            actor: f.owner,
            task_id: *f.task.id(),
            user_id: f.member,
        };
        handler.handle(command.clone()).await.unwrap();

        let err = handler.handle(command).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn personal_task_cannot_be_assigned() {
        let f = fixture().await;
        let personal = Task::new(
            TaskId::new(),
            f.owner,
            "Personal".to_string(),
            None,
            TaskPriority::Low,
            Timestamp::now(),
            Timestamp::now().plus_days(1),
            None,
        )
        .unwrap();
        f.ctx.tasks.insert(&personal).await.unwrap();

        let err = handler(&f.ctx)
            .handle(AssignTaskCommand {
                actor: f.owner,
                task_id: *personal.id(),
                user_id: f.member,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn deleted_task_cannot_be_assigned() {
        let f = fixture().await;
        let mut task = f.task.clone();
        task.mark_deleted(Timestamp::now());
        f.ctx.tasks.update(&task).await.unwrap();

        let err = handler(&f.ctx)
            .handle(AssignTaskCommand {
                actor: f.owner,
                task_id: *task.id(),
                user_id: f.member,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
