//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Taskhive domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;
mod user;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActivityId, InvitationId, NotificationId, ProjectId, TaskId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use user::{User, UserRole};
