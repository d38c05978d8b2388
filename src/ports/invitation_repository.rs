//! Invitation repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::invitation::Invitation;

/// Repository port for Invitation persistence.
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Persist a new invitation.
    async fn insert(&self, invitation: &Invitation) -> Result<(), DomainError>;

    /// Find an invitation by its claim token. Returns `None` if absent.
    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, DomainError>;

    /// Find a pending-status invitation for the given (email, project)
    /// pair, if one exists. Email comparison is case-insensitive.
    async fn find_pending(
        &self,
        email: &str,
        project: &ProjectId,
    ) -> Result<Option<Invitation>, DomainError>;

    /// Replace an existing invitation document (status transitions).
    async fn update(&self, invitation: &Invitation) -> Result<(), DomainError>;
}
