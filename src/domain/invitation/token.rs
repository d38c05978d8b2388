//! Claim token generation for invitations.
//!
//! The token is the sole claim credential: it is never re-derivable from
//! the invitee email or project, only stored and compared.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a claim token in characters.
pub const TOKEN_LENGTH: usize = 48;

/// High-entropy single-use credential proving the right to accept a
/// pending invitation.
///
/// Base62 characters only, so the token is URL-safe in invite links.
/// Key space: 62^48, far beyond guessability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimToken(String);

impl ClaimToken {
    /// Generates a new random claim token.
    pub fn generate() -> Self {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
        let mut rng = rand::thread_rng();

        let token: String = (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();
        Self(token)
    }

    /// Wraps an existing token string (e.g. parsed from an invite link).
    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
