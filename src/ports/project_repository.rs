//! Project repository port.
//!
//! Contract for persisting and retrieving Project aggregates against the
//! document store. The ownership-scoped soft-delete/restore operations are
//! single atomic update-by-filter calls so a non-owner can never flip the
//! flags of someone else's project, even under races.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::domain::project::Project;

/// Repository port for Project aggregate persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a new project.
    async fn insert(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by its ID, deleted or not. Returns `None` if absent.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Replace an existing project document.
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Non-deleted projects the user is a member of.
    async fn find_active_for_member(&self, user_id: &UserId)
        -> Result<Vec<Project>, DomainError>;

    /// Soft-deleted projects owned by the user (the recycle bin view).
    async fn find_deleted_for_owner(&self, owner: &UserId) -> Result<Vec<Project>, DomainError>;

    /// Atomically mark a project deleted, scoped to `{id, owner}`.
    ///
    /// Returns the updated project, or `None` when no project matches the
    /// filter (absent, or actor is not the owner).
    async fn soft_delete_owned(
        &self,
        id: &ProjectId,
        owner: &UserId,
        deleted_at: Timestamp,
    ) -> Result<Option<Project>, DomainError>;

    /// Atomically restore a project, scoped to `{id, owner, deleted: true}`.
    ///
    /// Returns the updated project, or `None` when no deleted project
    /// matches the filter.
    async fn restore_owned(
        &self,
        id: &ProjectId,
        owner: &UserId,
    ) -> Result<Option<Project>, DomainError>;

    /// Permanently remove soft-deleted projects with `deleted_at <= cutoff`.
    ///
    /// Returns the number of purged documents. Irreversible.
    async fn purge_deleted_before(&self, cutoff: &Timestamp) -> Result<u64, DomainError>;
}
