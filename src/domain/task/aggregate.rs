//! Task aggregate entity.
//!
//! Tasks may live inside a project or stand alone as personal tasks. The
//! status field only ever changes through the workflow transition operation;
//! free-form edits go through [`TaskPatch`], which has no status field.
//!
//! # Invariants
//!
//! - `created_by` is set at creation and never changes; it scopes edits,
//!   soft delete, restore and the recycle bin
//! - `assignee` gates status transitions: unassigned tasks cannot move
//! - Personal tasks (no project) are assigned to their creator; project
//!   tasks start unassigned until the project owner assigns them

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ProjectId, StateMachine, TaskId, Timestamp, UserId, ValidationError,
};

use super::{TaskPriority, TaskStatus};

/// Free-form update to a task. Deliberately excludes `status`: edits must
/// not bypass the workflow state machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub start_date: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
}

/// Task aggregate - a unit of work tracked through the status workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    start_date: Timestamp,
    due_date: Timestamp,
    created_by: UserId,
    assignee: Option<UserId>,
    project: Option<ProjectId>,
    deleted: bool,
    deleted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Task {
    /// Create a new task in `Todo`.
    ///
    /// Personal tasks are assigned to their creator; tasks created inside a
    /// project start unassigned.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is empty or whitespace
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TaskId,
        created_by: UserId,
        title: String,
        description: Option<String>,
        priority: TaskPriority,
        start_date: Timestamp,
        due_date: Timestamp,
        project: Option<ProjectId>,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let assignee = if project.is_none() { Some(created_by) } else { None };
        let now = Timestamp::now();
        Ok(Self {
            id,
            title: title.trim().to_string(),
            description,
            priority,
            status: TaskStatus::Todo,
            start_date,
            due_date,
            created_by,
            assignee,
            project,
            deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a task from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TaskId,
        title: String,
        description: Option<String>,
        priority: TaskPriority,
        status: TaskStatus,
        start_date: Timestamp,
        due_date: Timestamp,
        created_by: UserId,
        assignee: Option<UserId>,
        project: Option<ProjectId>,
        deleted: bool,
        deleted_at: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            priority,
            status,
            start_date,
            due_date,
            created_by,
            assignee,
            project,
            deleted,
            deleted_at,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn start_date(&self) -> &Timestamp {
        &self.start_date
    }

    pub fn due_date(&self) -> &Timestamp {
        &self.due_date
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    pub fn project(&self) -> Option<&ProjectId> {
        self.project.as_ref()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn deleted_at(&self) -> Option<&Timestamp> {
        self.deleted_at.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// A task is overdue when its due date is in the past and it is not Done.
    pub fn is_overdue(&self) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_past()
    }

    /// Whether the given user created or is assigned to this task.
    pub fn involves(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id || self.assignee.as_ref() == Some(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a free-form edit. Status is untouchable through this path.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the patch sets an empty title
    pub fn apply_patch(&mut self, patch: TaskPatch) -> Result<(), ValidationError> {
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title"));
            }
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Move the task to a new workflow status.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if the target is not reachable from the current status
    pub fn transition_status(&mut self, target: TaskStatus) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(target)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Assign the task to a user. Returns `false` if the user is already
    /// the current assignee (nothing changes).
    pub fn assign_to(&mut self, user_id: UserId) -> bool {
        if self.assignee == Some(user_id) {
            return false;
        }
        self.assignee = Some(user_id);
        self.updated_at = Timestamp::now();
        true
    }

    /// Mark the task soft-deleted at the given instant.
    pub fn mark_deleted(&mut self, at: Timestamp) {
        self.deleted = true;
        self.deleted_at = Some(at);
        self.updated_at = Timestamp::now();
    }

    /// Clear the soft-delete flags. Every other field keeps its
    /// pre-delete value.
    pub fn restore(&mut self) {
        self.deleted = false;
        self.deleted_at = None;
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_task(creator: UserId) -> Task {
        Task::new(
            TaskId::new(),
            creator,
            "Write report".to_string(),
            None,
            TaskPriority::Medium,
            Timestamp::now(),
            Timestamp::now().plus_days(7),
            None,
        )
        .unwrap()
    }

    fn project_task(creator: UserId) -> Task {
        Task::new(
            TaskId::new(),
            creator,
            "Write report".to_string(),
            None,
            TaskPriority::Medium,
            Timestamp::now(),
            Timestamp::now().plus_days(7),
            Some(ProjectId::new()),
        )
        .unwrap()
    }

    #[test]
    fn personal_task_is_assigned_to_creator() {
        let creator = UserId::new();
        let task = personal_task(creator);
        assert_eq!(task.assignee(), Some(&creator));
    }

    #[test]
    fn project_task_starts_unassigned() {
        let task = project_task(UserId::new());
        assert!(task.assignee().is_none());
    }

    #[test]
    fn new_task_rejects_empty_title() {
        let result = Task::new(
            TaskId::new(),
            UserId::new(),
            "  ".to_string(),
            None,
            TaskPriority::Low,
            Timestamp::now(),
            Timestamp::now(),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn patch_cannot_touch_status() {
        let mut task = personal_task(UserId::new());
        task.apply_patch(TaskPatch {
            title: Some("Renamed".to_string()),
            priority: Some(TaskPriority::High),
            ..TaskPatch::default()
        })
        .unwrap();
        assert_eq!(task.title(), "Renamed");
        assert_eq!(task.priority(), TaskPriority::High);
        assert_eq!(task.status(), TaskStatus::Todo);
    }

    #[test]
    fn patch_rejects_empty_title() {
        let mut task = personal_task(UserId::new());
        let result = task.apply_patch(TaskPatch {
            title: Some("".to_string()),
            ..TaskPatch::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn transition_follows_workflow() {
        let mut task = personal_task(UserId::new());
        task.transition_status(TaskStatus::Inprogress).unwrap();
        task.transition_status(TaskStatus::Review).unwrap();
        task.transition_status(TaskStatus::Done).unwrap();
        assert_eq!(task.status(), TaskStatus::Done);
    }

    #[test]
    fn transition_rejects_skipping_stages() {
        let mut task = personal_task(UserId::new());
        assert!(task.transition_status(TaskStatus::Review).is_err());
        assert_eq!(task.status(), TaskStatus::Todo);
    }

    #[test]
    fn done_task_is_never_overdue() {
        let creator = UserId::new();
        let mut task = Task::new(
            TaskId::new(),
            creator,
            "Old task".to_string(),
            None,
            TaskPriority::Low,
            Timestamp::now().minus_days(10),
            Timestamp::now().minus_days(3),
            None,
        )
        .unwrap();
        assert!(task.is_overdue());

        task.transition_status(TaskStatus::Inprogress).unwrap();
        task.transition_status(TaskStatus::Review).unwrap();
        task.transition_status(TaskStatus::Done).unwrap();
        assert!(!task.is_overdue());
    }

    #[test]
    fn assign_to_same_user_reports_no_change() {
        let mut task = project_task(UserId::new());
        let member = UserId::new();
        assert!(task.assign_to(member));
        assert!(!task.assign_to(member));
    }

    #[test]
    fn delete_then_restore_is_identity_on_other_fields() {
        let mut task = personal_task(UserId::new());
        let status_before = task.status();
        let due_before = *task.due_date();

        task.mark_deleted(Timestamp::now());
        assert!(task.is_deleted());

        task.restore();
        assert!(!task.is_deleted());
        assert!(task.deleted_at().is_none());
        assert_eq!(task.status(), status_before);
        assert_eq!(task.due_date(), &due_before);
    }
}
