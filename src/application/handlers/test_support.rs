//! Shared fixture for handler tests.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryActivityLog, InMemoryIdentityDirectory, InMemoryInvitationRepository,
    InMemoryNotificationStore, InMemoryProjectRepository, InMemoryTaskRepository,
    RecordingMailer,
};
use crate::application::SideEffects;
use crate::domain::foundation::{User, UserId};

/// Every in-memory adapter wired together, plus helpers to seed users.
pub struct TestContext {
    pub projects: Arc<InMemoryProjectRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub invitations: Arc<InMemoryInvitationRepository>,
    pub activity: Arc<InMemoryActivityLog>,
    pub notifications: Arc<InMemoryNotificationStore>,
    pub identity: Arc<InMemoryIdentityDirectory>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(InMemoryProjectRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
            invitations: Arc::new(InMemoryInvitationRepository::new()),
            activity: Arc::new(InMemoryActivityLog::new()),
            notifications: Arc::new(InMemoryNotificationStore::new()),
            identity: Arc::new(InMemoryIdentityDirectory::new()),
            mailer: Arc::new(RecordingMailer::new()),
        }
    }

    pub fn effects(&self) -> SideEffects {
        SideEffects::new(
            self.activity.clone(),
            self.notifications.clone(),
            self.mailer.clone(),
            self.identity.clone(),
        )
    }

    /// Seed a user into the identity directory and return it.
    pub async fn user(&self, username: &str, email: &str) -> User {
        let user = User::new(UserId::new(), username, email);
        self.identity.add_user(user.clone()).await;
        user
    }
}
