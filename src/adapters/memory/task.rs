//! In-memory task repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProjectId, TaskId, Timestamp, UserId};
use crate::domain::task::{Task, TaskFilter};
use crate::ports::TaskRepository;

/// In-memory implementation of [`TaskRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks (including soft-deleted ones).
    pub async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> Result<(), DomainError> {
        self.tasks.write().await.insert(*task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        Ok(self.tasks.read().await.get(id).cloned())
    }

    async fn update(&self, task: &Task) -> Result<(), DomainError> {
        self.tasks.write().await.insert(*task.id(), task.clone());
        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, DomainError> {
        let now = Timestamp::now();
        let mut tasks: Vec<Task> = self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| !t.is_deleted() && t.involves(user_id) && filter.matches(t, &now))
            .cloned()
            .collect();
        filter.sort(&mut tasks);
        Ok(tasks)
    }

    async fn find_for_project(&self, project: &ProjectId) -> Result<Vec<Task>, DomainError> {
        Ok(self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| !t.is_deleted() && t.project() == Some(project))
            .cloned()
            .collect())
    }

    async fn find_deleted_for_creator(
        &self,
        creator: &UserId,
    ) -> Result<Vec<Task>, DomainError> {
        Ok(self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| t.is_deleted() && t.created_by() == creator)
            .cloned()
            .collect())
    }

    async fn soft_delete_owned(
        &self,
        id: &TaskId,
        creator: &UserId,
        deleted_at: Timestamp,
    ) -> Result<Option<Task>, DomainError> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(id) {
            Some(task) if task.created_by() == creator && !task.is_deleted() => {
                task.mark_deleted(deleted_at);
                Ok(Some(task.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn restore_owned(
        &self,
        id: &TaskId,
        creator: &UserId,
    ) -> Result<Option<Task>, DomainError> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(id) {
            Some(task) if task.created_by() == creator && task.is_deleted() => {
                task.restore();
                Ok(Some(task.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn purge_deleted_before(&self, cutoff: &Timestamp) -> Result<u64, DomainError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|_, t| {
            !(t.is_deleted() && t.deleted_at().map_or(false, |at| at <= cutoff))
        });
        Ok((before - tasks.len()) as u64)
    }
}
