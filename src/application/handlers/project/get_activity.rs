//! Project activity feed query.

use std::sync::Arc;

use crate::domain::activity::Activity;
use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::project::ProjectError;
use crate::ports::{ActivityLog, ProjectRepository};

/// Member-scoped view of a project's activity ledger, newest first.
pub struct ProjectActivityQueryHandler {
    projects: Arc<dyn ProjectRepository>,
    activity_log: Arc<dyn ActivityLog>,
}

impl ProjectActivityQueryHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            projects,
            activity_log,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the project is absent
    /// - `Forbidden` if the actor is not a member
    pub async fn handle(
        &self,
        actor: &UserId,
        project_id: &ProjectId,
    ) -> Result<Vec<Activity>, ProjectError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .filter(|p| !p.is_deleted())
            .ok_or(ProjectError::NotFound(*project_id))?;

        if !project.is_member(actor) {
            return Err(ProjectError::forbidden("Access denied"));
        }

        Ok(self.activity_log.find_for_project(project.id()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::activity::{ActivityAction, ActivityEntity};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::project::{Project, ProjectColor};

    #[tokio::test]
    async fn member_sees_project_feed() {
        let ctx = TestContext::new();
        let owner = UserId::new();
        let member = UserId::new();
        let mut project = Project::new(
            ProjectId::new(),
            owner,
            "Launch plan".to_string(),
            None,
            ProjectColor::Blue,
        )
        .unwrap();
        project.add_member(member);
        ctx.projects.insert(&project).await.unwrap();

        ctx.activity
            .append(&Activity::record(
                owner,
                ActivityAction::CreateProject,
                ActivityEntity::Project,
                *project.id().as_uuid(),
                Some(*project.id()),
                "Project \"Launch plan\" was created",
            ))
            .await
            .unwrap();

        let handler = ProjectActivityQueryHandler::new(ctx.projects.clone(), ctx.activity.clone());
        let feed = handler.handle(&member, project.id()).await.unwrap();
        assert_eq!(feed.len(), 1);

        let err = handler.handle(&UserId::new(), project.id()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
