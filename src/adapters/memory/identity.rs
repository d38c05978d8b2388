//! In-memory identity directory.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, User, UserId};
use crate::ports::IdentityDirectory;

/// In-memory implementation of [`IdentityDirectory`].
///
/// Seeded up front with known users; the workflow engine never creates
/// accounts itself.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityDirectory {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user to the directory.
    pub async fn add_user(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email_matches(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }
}
