//! Invitation aggregate entity.
//!
//! A pending invite to join a project, claimed with a single-use token.
//! Acceptance is idempotent at the membership level but single-use at the
//! invitation level: once the status leaves `pending` it never returns.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    InvitationId, ProjectId, StateMachine, Timestamp, ValidationError,
};

use super::{ClaimToken, InvitationStatus};

/// Validity window for a fresh invitation.
pub const EXPIRY_HOURS: i64 = 24;

/// Invitation aggregate - a token-gated pending membership offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    id: InvitationId,
    email: String,
    project: ProjectId,
    token: ClaimToken,
    status: InvitationStatus,
    expires_at: Timestamp,
    created_at: Timestamp,
}

impl Invitation {
    /// Create a pending invitation with a fresh token and 24h expiry.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the email is empty
    pub fn new(id: InvitationId, email: &str, project: ProjectId) -> Result<Self, ValidationError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            email,
            project,
            token: ClaimToken::generate(),
            status: InvitationStatus::Pending,
            expires_at: now.plus_hours(EXPIRY_HOURS),
            created_at: now,
        })
    }

    /// Reconstitute an invitation from persistence (no validation).
    pub fn reconstitute(
        id: InvitationId,
        email: String,
        project: ProjectId,
        token: ClaimToken,
        status: InvitationStatus,
        expires_at: Timestamp,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            project,
            token,
            status,
            expires_at,
            created_at,
        }
    }

    pub fn id(&self) -> &InvitationId {
        &self.id
    }

    /// Invitee email, always lowercased.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    pub fn token(&self) -> &ClaimToken {
        &self.token
    }

    pub fn status(&self) -> InvitationStatus {
        self.status
    }

    pub fn expires_at(&self) -> &Timestamp {
        &self.expires_at
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Whether the invitee email matches, ignoring case.
    pub fn is_for_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    /// Whether the validity window has passed at the given instant,
    /// regardless of whether the status has caught up.
    pub fn is_expired_at(&self, now: &Timestamp) -> bool {
        self.expires_at.is_before(now)
    }

    /// Whether this invitation still blocks a duplicate invite for the
    /// same (email, project) pair.
    pub fn is_claimable_at(&self, now: &Timestamp) -> bool {
        self.status == InvitationStatus::Pending && !self.is_expired_at(now)
    }

    /// Mark the invitation accepted.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if the status is no longer pending
    pub fn accept(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(InvitationStatus::Accepted)?;
        Ok(())
    }

    /// Mark the invitation expired (lazily at claim time, or by the sweeper).
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if the status is no longer pending
    pub fn expire(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(InvitationStatus::Expired)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_invitation() -> Invitation {
        Invitation::new(InvitationId::new(), "Invitee@Example.com", ProjectId::new()).unwrap()
    }

    #[test]
    fn new_invitation_is_pending_with_24h_expiry() {
        let invitation = test_invitation();
        assert_eq!(invitation.status(), InvitationStatus::Pending);
        let now = Timestamp::now();
        assert!(invitation.expires_at().is_after(&now.plus_hours(23)));
        assert!(invitation.expires_at().is_before(&now.plus_hours(25)));
    }

    #[test]
    fn email_is_lowercased() {
        let invitation = test_invitation();
        assert_eq!(invitation.email(), "invitee@example.com");
        assert!(invitation.is_for_email("INVITEE@example.COM"));
    }

    #[test]
    fn empty_email_is_rejected() {
        assert!(Invitation::new(InvitationId::new(), "  ", ProjectId::new()).is_err());
    }

    #[test]
    fn accept_is_single_use() {
        let mut invitation = test_invitation();
        invitation.accept().unwrap();
        assert_eq!(invitation.status(), InvitationStatus::Accepted);
        assert!(invitation.accept().is_err());
    }

    #[test]
    fn expired_invitation_cannot_be_accepted() {
        let mut invitation = test_invitation();
        invitation.expire().unwrap();
        assert!(invitation.accept().is_err());
    }

    #[test]
    fn claimable_requires_pending_and_unexpired() {
        let invitation = test_invitation();
        let now = Timestamp::now();
        assert!(invitation.is_claimable_at(&now));
        assert!(!invitation.is_claimable_at(&now.plus_days(2)));

        let mut accepted = test_invitation();
        accepted.accept().unwrap();
        assert!(!accepted.is_claimable_at(&now));
    }
}
