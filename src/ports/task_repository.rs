//! Task repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId, TaskId, Timestamp, UserId};
use crate::domain::task::{Task, TaskFilter};

/// Repository port for Task aggregate persistence.
///
/// Ownership scope for soft delete/restore is the task creator, matching
/// the recycle bin views.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task.
    async fn insert(&self, task: &Task) -> Result<(), DomainError>;

    /// Find a task by its ID, deleted or not. Returns `None` if absent.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError>;

    /// Replace an existing task document.
    async fn update(&self, task: &Task) -> Result<(), DomainError>;

    /// Non-deleted tasks the user created or is assigned to, filtered and
    /// sorted per the given filter.
    async fn find_for_user(
        &self,
        user_id: &UserId,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, DomainError>;

    /// Non-deleted tasks belonging to a project.
    async fn find_for_project(&self, project: &ProjectId) -> Result<Vec<Task>, DomainError>;

    /// Soft-deleted tasks created by the user (the recycle bin view).
    async fn find_deleted_for_creator(&self, creator: &UserId)
        -> Result<Vec<Task>, DomainError>;

    /// Atomically mark a task deleted, scoped to `{id, created_by}`.
    ///
    /// Returns the updated task, or `None` when no task matches the filter.
    async fn soft_delete_owned(
        &self,
        id: &TaskId,
        creator: &UserId,
        deleted_at: Timestamp,
    ) -> Result<Option<Task>, DomainError>;

    /// Atomically restore a task, scoped to `{id, created_by, deleted: true}`.
    async fn restore_owned(
        &self,
        id: &TaskId,
        creator: &UserId,
    ) -> Result<Option<Task>, DomainError>;

    /// Permanently remove soft-deleted tasks with `deleted_at <= cutoff`.
    ///
    /// Returns the number of purged documents. Irreversible.
    async fn purge_deleted_before(&self, cutoff: &Timestamp) -> Result<u64, DomainError>;
}
