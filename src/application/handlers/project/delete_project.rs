//! Soft-delete project command handler.

use std::sync::Arc;

use crate::application::SideEffects;
use crate::domain::activity::{Activity, ActivityAction, ActivityEntity};
use crate::domain::foundation::{ProjectId, Timestamp, UserId};
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Command to move a project to the recycle bin.
#[derive(Debug, Clone)]
pub struct SoftDeleteProjectCommand {
    pub actor: UserId,
    pub project_id: ProjectId,
}

/// Handler for soft-deleting projects.
///
/// The delete is a single ownership-scoped atomic update: a non-owner gets
/// the same answer as for a project that does not exist.
pub struct SoftDeleteProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    effects: SideEffects,
}

impl SoftDeleteProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, effects: SideEffects) -> Self {
        Self { projects, effects }
    }

    /// # Errors
    ///
    /// - `Forbidden` if the project is absent or the actor is not its owner
    pub async fn handle(&self, command: SoftDeleteProjectCommand) -> Result<Project, ProjectError> {
        let project = self
            .projects
            .soft_delete_owned(&command.project_id, &command.actor, Timestamp::now())
            .await?
            .ok_or_else(|| ProjectError::forbidden("Only the owner can delete this project"))?;

        tracing::info!(project = %project.id(), "project soft-deleted");
        self.effects
            .log_activity(Activity::record(
                command.actor,
                ActivityAction::DeleteProject,
                ActivityEntity::Project,
                *project.id().as_uuid(),
                Some(*project.id()),
                format!("Project \"{}\" was deleted", project.title()),
            ))
            .await;

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::project::ProjectColor;

    async fn seeded_project(ctx: &TestContext, owner: UserId) -> Project {
        let project = Project::new(
            ProjectId::new(),
            owner,
            "Launch plan".to_string(),
            None,
            ProjectColor::Blue,
        )
        .unwrap();
        ctx.projects.insert(&project).await.unwrap();
        project
    }

    fn handler(ctx: &TestContext) -> SoftDeleteProjectHandler {
        SoftDeleteProjectHandler::new(ctx.projects.clone(), ctx.effects())
    }

    #[tokio::test]
    async fn owner_can_delete() {
        let ctx = TestContext::new();
        let owner = UserId::new();
        let project = seeded_project(&ctx, owner).await;

        let deleted = handler(&ctx)
            .handle(SoftDeleteProjectCommand {
                actor: owner,
                project_id: *project.id(),
            })
            .await
            .unwrap();

        assert!(deleted.is_deleted());
        assert!(deleted.deleted_at().is_some());
    }

    #[tokio::test]
    async fn non_owner_is_rejected() {
        let ctx = TestContext::new();
        let project = seeded_project(&ctx, UserId::new()).await;

        let err = handler(&ctx)
            .handle(SoftDeleteProjectCommand {
                actor: UserId::new(),
                project_id: *project.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);

        // Nothing changed.
        let stored = ctx.projects.find_by_id(project.id()).await.unwrap().unwrap();
        assert!(!stored.is_deleted());
    }

    #[tokio::test]
    async fn missing_project_is_rejected_like_non_owner() {
        let ctx = TestContext::new();
        let err = handler(&ctx)
            .handle(SoftDeleteProjectCommand {
                actor: UserId::new(),
                project_id: ProjectId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn records_delete_activity() {
        let ctx = TestContext::new();
        let owner = UserId::new();
        let project = seeded_project(&ctx, owner).await;

        handler(&ctx)
            .handle(SoftDeleteProjectCommand {
                actor: owner,
                project_id: *project.id(),
            })
            .await
            .unwrap();

        let entries = ctx.activity.all().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ActivityAction::DeleteProject);
        assert_eq!(entries[0].message, "Project \"Launch plan\" was deleted");
    }
}
