//! In-memory activity ledger.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::activity::{Activity, ActivityEntity};
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::ActivityLog;

/// In-memory implementation of [`ActivityLog`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityLog {
    entries: Arc<RwLock<Vec<Activity>>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every entry appended so far, oldest first. For test assertions.
    pub async fn all(&self) -> Vec<Activity> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl ActivityLog for InMemoryActivityLog {
    async fn append(&self, activity: &Activity) -> Result<(), DomainError> {
        self.entries.write().await.push(activity.clone());
        Ok(())
    }

    async fn find_for_project(&self, project: &ProjectId) -> Result<Vec<Activity>, DomainError> {
        let mut entries: Vec<Activity> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|a| a.project.as_ref() == Some(project))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn find_for_entity(
        &self,
        entity_type: ActivityEntity,
        entity_id: Uuid,
    ) -> Result<Vec<Activity>, DomainError> {
        let mut entries: Vec<Activity> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|a| a.entity_type == entity_type && a.entity_id == entity_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}
