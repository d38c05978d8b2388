//! Project-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};

/// Project-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// Project was not found (or filtered out by ownership scope).
    NotFound(ProjectId),
    /// Actor lacks permission for the operation.
    Forbidden(String),
    /// No user exists for the given email.
    UserNotFound(String),
    /// Target user is not a member.
    MemberNotFound,
    /// State already satisfies or contradicts the request.
    Conflict(String),
    /// Malformed or missing input.
    ValidationFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProjectError {
    pub fn not_found(id: ProjectId) -> Self {
        ProjectError::NotFound(id)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ProjectError::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ProjectError::Conflict(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ProjectError::ValidationFailed(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::NotFound(_) => ErrorCode::ProjectNotFound,
            ProjectError::Forbidden(_) => ErrorCode::Forbidden,
            ProjectError::UserNotFound(_) => ErrorCode::UserNotFound,
            ProjectError::MemberNotFound => ErrorCode::UserNotFound,
            ProjectError::Conflict(_) => ErrorCode::Conflict,
            ProjectError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            ProjectError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProjectError::NotFound(id) => format!("Project not found: {}", id),
            ProjectError::Forbidden(msg) => msg.clone(),
            ProjectError::UserNotFound(email) => format!("User not found: {}", email),
            ProjectError::MemberNotFound => "User is not a project member".to_string(),
            ProjectError::Conflict(msg) => msg.clone(),
            ProjectError::ValidationFailed(msg) => msg.clone(),
            ProjectError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProjectError {}

impl From<DomainError> for ProjectError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ProjectNotFound => ProjectError::Infrastructure(err.message),
            ErrorCode::ValidationFailed => ProjectError::ValidationFailed(err.message),
            ErrorCode::Conflict => ProjectError::Conflict(err.message),
            _ => ProjectError::Infrastructure(err.message),
        }
    }
}
