//! Query filters and ordering for task listings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{Task, TaskStatus};

/// Field a task listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    DueDate,
    StartDate,
    Title,
    Priority,
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Filters for "my tasks" listings. The default lists all non-deleted
/// tasks, newest first.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only tasks with this exact status.
    pub status: Option<TaskStatus>,
    /// Only overdue tasks (due date past, status not Done).
    pub overdue: bool,
    pub sort_by: TaskSortField,
    pub order: Option<SortOrder>,
}

impl TaskFilter {
    /// Whether the task passes the status/overdue predicates, evaluated
    /// against the given instant.
    pub fn matches(&self, task: &Task, now: &Timestamp) -> bool {
        if let Some(status) = self.status {
            if task.status() != status {
                return false;
            }
        }
        if self.overdue && (task.status() == TaskStatus::Done || !task.due_date().is_before(now)) {
            return false;
        }
        true
    }

    /// Effective sort order: explicit order wins; otherwise createdAt sorts
    /// descending (newest first) and every other field ascending.
    pub fn effective_order(&self) -> SortOrder {
        self.order.unwrap_or(match self.sort_by {
            TaskSortField::CreatedAt => SortOrder::Desc,
            _ => SortOrder::Asc,
        })
    }

    /// Sort tasks in place according to the filter.
    pub fn sort(&self, tasks: &mut [Task]) {
        let field = self.sort_by;
        tasks.sort_by(|a, b| {
            let ord = match field {
                TaskSortField::CreatedAt => a.created_at().cmp(b.created_at()),
                TaskSortField::UpdatedAt => a.updated_at().cmp(b.updated_at()),
                TaskSortField::DueDate => a.due_date().cmp(b.due_date()),
                TaskSortField::StartDate => a.start_date().cmp(b.start_date()),
                TaskSortField::Title => a.title().cmp(b.title()),
                TaskSortField::Priority => a.priority().cmp(&b.priority()),
                TaskSortField::Status => status_rank(a.status()).cmp(&status_rank(b.status())),
            };
            match self.effective_order() {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
    }
}

fn status_rank(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::Inprogress => 1,
        TaskStatus::Review => 2,
        TaskStatus::Done => 3,
    }
}
