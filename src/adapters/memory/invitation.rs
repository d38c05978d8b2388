//! In-memory invitation repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, InvitationId, ProjectId};
use crate::domain::invitation::{Invitation, InvitationStatus};
use crate::ports::InvitationRepository;

/// In-memory implementation of [`InvitationRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvitationRepository {
    invitations: Arc<RwLock<HashMap<InvitationId, Invitation>>>,
}

impl InMemoryInvitationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvitationRepository for InMemoryInvitationRepository {
    async fn insert(&self, invitation: &Invitation) -> Result<(), DomainError> {
        self.invitations
            .write()
            .await
            .insert(*invitation.id(), invitation.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, DomainError> {
        Ok(self
            .invitations
            .read()
            .await
            .values()
            .find(|i| i.token().as_str() == token)
            .cloned())
    }

    async fn find_pending(
        &self,
        email: &str,
        project: &ProjectId,
    ) -> Result<Option<Invitation>, DomainError> {
        Ok(self
            .invitations
            .read()
            .await
            .values()
            .find(|i| {
                i.status() == InvitationStatus::Pending
                    && i.project() == project
                    && i.is_for_email(email)
            })
            .cloned())
    }

    async fn update(&self, invitation: &Invitation) -> Result<(), DomainError> {
        self.invitations
            .write()
            .await
            .insert(*invitation.id(), invitation.clone());
        Ok(())
    }
}
