//! In-memory project repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// In-memory implementation of [`ProjectRepository`].
///
/// Useful for tests and development. Mutations lock the whole map, which
/// gives the same effective per-document atomicity the port requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects (including soft-deleted ones).
    pub async fn count(&self) -> usize {
        self.projects.read().await.len()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: &Project) -> Result<(), DomainError> {
        self.projects
            .write()
            .await
            .insert(*project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        self.projects
            .write()
            .await
            .insert(*project.id(), project.clone());
        Ok(())
    }

    async fn find_active_for_member(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Project>, DomainError> {
        Ok(self
            .projects
            .read()
            .await
            .values()
            .filter(|p| !p.is_deleted() && p.is_member(user_id))
            .cloned()
            .collect())
    }

    async fn find_deleted_for_owner(&self, owner: &UserId) -> Result<Vec<Project>, DomainError> {
        Ok(self
            .projects
            .read()
            .await
            .values()
            .filter(|p| p.is_deleted() && p.is_owner(owner))
            .cloned()
            .collect())
    }

    async fn soft_delete_owned(
        &self,
        id: &ProjectId,
        owner: &UserId,
        deleted_at: Timestamp,
    ) -> Result<Option<Project>, DomainError> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(id) {
            Some(project) if project.is_owner(owner) && !project.is_deleted() => {
                project.mark_deleted(deleted_at);
                Ok(Some(project.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn restore_owned(
        &self,
        id: &ProjectId,
        owner: &UserId,
    ) -> Result<Option<Project>, DomainError> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(id) {
            Some(project) if project.is_owner(owner) && project.is_deleted() => {
                project.restore();
                Ok(Some(project.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn purge_deleted_before(&self, cutoff: &Timestamp) -> Result<u64, DomainError> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|_, p| {
            !(p.is_deleted() && p.deleted_at().map_or(false, |at| at <= cutoff))
        });
        Ok((before - projects.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectColor;

    #[tokio::test]
    async fn soft_delete_is_scoped_to_live_entries() {
        let repo = InMemoryProjectRepository::new();
        let owner = UserId::new();
        let project = Project::new(
            ProjectId::new(),
            owner,
            "Launch plan".to_string(),
            None,
            ProjectColor::Blue,
        )
        .unwrap();
        repo.insert(&project).await.unwrap();

        let first = Timestamp::now().minus_days(10);
        repo.soft_delete_owned(project.id(), &owner, first)
            .await
            .unwrap()
            .unwrap();

        // Already deleted: no match, and the original timestamp stands so
        // the retention clock keeps ticking from the first delete.
        let again = repo
            .soft_delete_owned(project.id(), &owner, Timestamp::now())
            .await
            .unwrap();
        assert!(again.is_none());

        let stored = repo.find_by_id(project.id()).await.unwrap().unwrap();
        assert_eq!(stored.deleted_at(), Some(&first));
    }
}
