//! Identity directory port.
//!
//! User accounts are owned by the authentication service; this crate only
//! resolves them by email (invitations, member adds) or by id.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, User, UserId};

/// Lookup of users by email or id.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Find a user by email, case-insensitive. Returns `None` if absent.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id. Returns `None` if absent.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_directory_is_object_safe() {
        fn _accepts_dyn(_dir: &dyn IdentityDirectory) {}
    }
}
