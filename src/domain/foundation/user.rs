//! User read model.
//!
//! Users are owned by the Identity Directory; this crate only reads them
//! to resolve actors, members and email recipients.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// A user as exposed by the Identity Directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Creates a user record. Email is stored lowercased so that lookups
    /// and invitation matches are case-insensitive.
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into().to_lowercase(),
            role: UserRole::User,
        }
    }

    /// Checks whether the given address matches this user's email,
    /// ignoring case.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
