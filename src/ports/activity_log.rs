//! Activity ledger port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::activity::{Activity, ActivityEntity};
use crate::domain::foundation::{DomainError, ProjectId};

/// Append-only store of activity records.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Append one record to the ledger.
    async fn append(&self, activity: &Activity) -> Result<(), DomainError>;

    /// All records for a project, newest first.
    async fn find_for_project(&self, project: &ProjectId) -> Result<Vec<Activity>, DomainError>;

    /// All records for a specific entity, newest first.
    async fn find_for_entity(
        &self,
        entity_type: ActivityEntity,
        entity_id: Uuid,
    ) -> Result<Vec<Activity>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_log_is_object_safe() {
        fn _accepts_dyn(_log: &dyn ActivityLog) {}
    }
}
