//! Workflow transition command handler.
//!
//! The only code path that changes a task's status. Check order matters
//! and is part of the contract: existence, then assignment, then actor,
//! then the transition table.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{TaskId, UserId};
use crate::domain::notification::{Notification, NotificationType};
use crate::domain::task::{Task, TaskError, TaskStatus};
use crate::ports::{ProjectRepository, TaskRepository};

/// Command to move a task to a new workflow status.
#[derive(Debug, Clone)]
pub struct TransitionTaskStatusCommand {
    pub actor: UserId,
    pub task_id: TaskId,
    pub target: TaskStatus,
}

/// Handler for workflow transitions.
pub struct TransitionTaskStatusHandler {
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl TransitionTaskStatusHandler {
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
    /// - `NotFound` if the task is absent or deleted
    /// - `ValidationFailed` if the task has no assignee
    /// - `Forbidden` if the actor is not the assignee
    /// - `InvalidTransition` if the target is not reachable
    pub async fn handle(&self, command: TransitionTaskStatusCommand) -> Result<Task, TaskError> {
        let mut task = self
            .tasks
            .find_by_id(&command.task_id)
            .await?
            .filter(|t| !t.is_deleted())
            .ok_or(TaskError::NotFound(command.task_id))?;

        let assignee = *task.assignee().ok_or_else(|| {
            TaskError::validation("Task must be assigned before changing status")
        })?;
        if assignee != command.actor {
            return Err(TaskError::forbidden(
                "Only the assigned user can change task status",
            ));
        }

        let from = task.status();
        task.transition_status(command.target)
            .map_err(|_| {
                TaskError::invalid_transition(format!(
                    "Cannot move task from {} to {}",
                    from, command.target
                ))
            })?;
        self.tasks.update(&task).await?;

        tracing::info!(task = %task.id(), from = %from, to = %command.target, "task transitioned");
        if command.target == TaskStatus::Done {
            self.effects
                .log_activity(Activity::record(
                    command.actor,
                    ActivityAction::CompleteTask,
                    ActivityEntity::Task,
                    *task.id().as_uuid(),
                    task.project().copied(),
                    format!("Task \"{}\" was completed", task.title()),
                ))
                .await;
            self.notify_project_owner(&task).await;
        } else {
            self.effects
                .log_activity(Activity::record(
                    command.actor,
                    ActivityAction::UpdateTask,
                    ActivityEntity::Task,
                    *task.id().as_uuid(),
                    task.project().copied(),
                    format!("Task \"{}\" moved to {}", task.title(), command.target),
                ))
                .await;
        }

        Ok(task)
    }

    /// On completion of a project task, tell the project owner. Personal
    /// tasks complete silently.
    async fn notify_project_owner(&self, task: &Task) {
        let Some(project_id) = task.project() else {
            return;
        };
        let project = match self.projects.find_by_id(project_id).await {
            Ok(Some(project)) => project,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(project = %project_id, error = %err, "owner lookup failed");
                return;
            }
        };
        self.effects
            .notify(Notification::new(
                *project.owner(),
                NotificationType::TaskCompleted,
                format!("Task \"{}\" was completed", task.title()),
                Some(*project_id),
                Some(*task.id()),
            ))
            .await;
        self.effects
            .email_user(
                project.owner(),
                "Task completed",
                &format!("<p>Task \"{}\" was completed.</p>", task.title()),
            )
            .await;
    }
}
