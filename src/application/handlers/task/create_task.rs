//! Create task command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{ProjectId, TaskId, Timestamp, UserId};
use crate::domain::task::{Task, TaskError, TaskPriority};
use crate::ports::{ProjectRepository, TaskRepository};

/// Command to create a task, either personal or inside a project.
#[derive(Debug, Clone)]
pub struct CreateTaskCommand {
    pub actor: UserId,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to medium when not supplied.
    pub priority: Option<TaskPriority>,
    pub start_date: Timestamp,
    pub due_date: Timestamp,
    pub project_id: Option<ProjectId>,
}

/// Handler for creating tasks.
pub struct CreateTaskHandler {
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl CreateTaskHandler {
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

    /// Personal tasks start assigned to the creator; project tasks start
    /// unassigned until the project owner assigns them.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty
    /// - `ProjectNotFound` if the referenced project is absent or deleted
    /// - `Forbidden` if the actor is not a member of the project
    pub async fn handle(&self, command: CreateTaskCommand) -> Result<Task, TaskError> {
        if let Some(project_id) = &command.project_id {
            let project = self
                .projects
                .find_by_id(project_id)
                .await
                .map_err(TaskError::from)?
                .filter(|p| !p.is_deleted())
                .ok_or(TaskError::ProjectNotFound)?;
            if !project.is_member(&command.actor) {
                return Err(TaskError::forbidden("Not a project member"));
            }
        }

        let task = Task::new(
            TaskId::new(),
            command.actor,
            command.title,
            command.description,
            command.priority.unwrap_or_default(),
            command.start_date,
            command.due_date,
            command.project_id,
        )
        .map_err(|e| TaskError::ValidationFailed(e.to_string()))?;

        self.tasks.insert(&task).await?;

        tracing::info!(task = %task.id(), creator = %command.actor, "task created");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::CreateTask,
                ActivityEntity::Task,
                *task.id().as_uuid(),
                task.project().copied(),
                format!("Task \"{}\" was created", task.title()),
            ))
            .await;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::project::{Project, ProjectColor};
    use crate::domain::task::TaskStatus;

    fn handler(ctx: &TestContext) -> CreateTaskHandler {
        CreateTaskHandler::new(ctx.tasks.clone(), ctx.projects.clone(), ctx.effects())
    }

    fn command(actor: UserId, project_id: Option<ProjectId>) -> CreateTaskCommand {
        CreateTaskCommand {
            actor,
            title: "Write report".to_string(),
            description: None,
            priority: None,
            start_date: Timestamp::now(),
            due_date: Timestamp::now().plus_days(7),
            project_id,
        }
    }

    #[tokio::test]
    async fn personal_task_is_assigned_to_creator() {
        let ctx = TestContext::new();
        let actor = UserId::new();

        let task = handler(&ctx).handle(command(actor, None)).await.unwrap();

        assert_eq!(task.status(), TaskStatus::Todo);
        assert_eq!(task.priority(), TaskPriority::Medium);
        assert_eq!(task.assignee(), Some(&actor));
    }

    #[tokio::test]
    async fn project_task_starts_unassigned() {
        let ctx = TestContext::new();
        let actor = UserId::new();
        let project = Project::new(
            ProjectId::new(),
            actor,
            "Launch plan".to_string(),
            None,
            ProjectColor::Blue,
        )
        .unwrap();
        ctx.projects.insert(&project).await.unwrap();

        let task = handler(&ctx)
            .handle(command(actor, Some(*project.id())))
            .await
            .unwrap();
        assert!(task.assignee().is_none());
        assert_eq!(task.project(), Some(project.id()));
    }

    #[tokio::test]
    async fn non_member_cannot_create_project_task() {
        let ctx = TestContext::new();
        let project = Project::new(
            ProjectId::new(),
            UserId::new(),
            "Launch plan".to_string(),
            None,
            ProjectColor::Blue,
        )
        .unwrap();
        ctx.projects.insert(&project).await.unwrap();

        let err = handler(&ctx)
            .handle(command(UserId::new(), Some(*project.id())))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn missing_project_is_rejected() {
        let ctx = TestContext::new();
        let err = handler(&ctx)
            .handle(command(UserId::new(), Some(ProjectId::new())))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ProjectNotFound);
    }

    #[tokio::test]
    async fn records_create_activity() {
        let ctx = TestContext::new();
        handler(&ctx).handle(command(UserId::new(), None)).await.unwrap();

        let entries = ctx.activity.all().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ActivityAction::CreateTask);
        assert_eq!(entries[0].message, "Task \"Write report\" was created");
    }
}
