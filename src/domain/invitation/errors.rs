//! Invitation-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Invitation-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvitationError {
    /// No invitation matches the presented token.
    NotFound,
    /// Referenced project no longer exists.
    ProjectNotFound,
    /// Invitation is past its validity window.
    Expired,
    /// Invitation status is no longer pending (already accepted or expired).
    NotPending,
    /// A pending, unexpired invitation already exists for this email/project.
    AlreadyInvited,
    /// Invitee already has an account and is already a member.
    AlreadyMember,
    /// Actor lacks permission (not the project owner, or wrong account).
    Forbidden(String),
    /// Malformed or missing input.
    ValidationFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl InvitationError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        InvitationError::Forbidden(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        InvitationError::ValidationFailed(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            InvitationError::NotFound => ErrorCode::InvitationNotFound,
            InvitationError::ProjectNotFound => ErrorCode::ProjectNotFound,
            InvitationError::Expired => ErrorCode::InvitationExpired,
            InvitationError::NotPending => ErrorCode::Conflict,
            InvitationError::AlreadyInvited => ErrorCode::Conflict,
            InvitationError::AlreadyMember => ErrorCode::Conflict,
            InvitationError::Forbidden(_) => ErrorCode::Forbidden,
            InvitationError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            InvitationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            InvitationError::NotFound => "Invalid invitation".to_string(),
            InvitationError::ProjectNotFound => "Project not found".to_string(),
            InvitationError::Expired => "Invitation expired".to_string(),
            InvitationError::NotPending => "Invitation is no longer pending".to_string(),
            InvitationError::AlreadyInvited => {
                "A pending invitation already exists for this email".to_string()
            }
            InvitationError::AlreadyMember => "User is already a project member".to_string(),
            InvitationError::Forbidden(msg) => msg.clone(),
            InvitationError::ValidationFailed(msg) => msg.clone(),
            InvitationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for InvitationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InvitationError {}

impl From<DomainError> for InvitationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => InvitationError::ValidationFailed(err.message),
            ErrorCode::Conflict => InvitationError::NotPending,
            _ => InvitationError::Infrastructure(err.message),
        }
    }
}
