//! Task-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, TaskId};

/// Task-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task was not found (or filtered out by ownership scope).
    NotFound(TaskId),
    /// Referenced project was not found.
    ProjectNotFound,
    /// Actor lacks permission for the operation.
    Forbidden(String),
    /// State already satisfies or contradicts the request.
    Conflict(String),
    /// Rejected workflow transition.
    InvalidTransition(String),
    /// Malformed or missing input.
    ValidationFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl TaskError {
    pub fn not_found(id: TaskId) -> Self {
        TaskError::NotFound(id)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        TaskError::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        TaskError::Conflict(message.into())
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        TaskError::InvalidTransition(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        TaskError::ValidationFailed(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TaskError::NotFound(_) => ErrorCode::TaskNotFound,
            TaskError::ProjectNotFound => ErrorCode::ProjectNotFound,
            TaskError::Forbidden(_) => ErrorCode::Forbidden,
            TaskError::Conflict(_) => ErrorCode::Conflict,
            TaskError::InvalidTransition(_) => ErrorCode::InvalidTransition,
            TaskError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            TaskError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            TaskError::NotFound(id) => format!("Task not found: {}", id),
            TaskError::ProjectNotFound => "Project not found".to_string(),
            TaskError::Forbidden(msg) => msg.clone(),
            TaskError::Conflict(msg) => msg.clone(),
            TaskError::InvalidTransition(msg) => msg.clone(),
            TaskError::ValidationFailed(msg) => msg.clone(),
            TaskError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TaskError {}

impl From<DomainError> for TaskError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TaskError::ValidationFailed(err.message),
            ErrorCode::Conflict => TaskError::Conflict(err.message),
            _ => TaskError::Infrastructure(err.message),
        }
    }
}
