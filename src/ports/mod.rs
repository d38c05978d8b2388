//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence ports
//!
//! - `ProjectRepository` / `TaskRepository` - aggregate persistence with
//!   ownership-scoped atomic soft-delete/restore
//! - `InvitationRepository` - pending invite storage keyed by claim token
//! - `ActivityLog` - append-only domain event ledger
//! - `NotificationStore` - per-user inbox
//!
//! ## Collaborator ports
//!
//! - `IdentityDirectory` - user lookup (owned by the auth service)
//! - `Mailer` - best-effort outbound email

mod activity_log;
mod identity_directory;
mod invitation_repository;
mod mailer;
mod notification_store;
mod project_repository;
mod task_repository;

pub use activity_log::ActivityLog;
pub use identity_directory::IdentityDirectory;
pub use invitation_repository::InvitationRepository;
pub use mailer::Mailer;
pub use notification_store::NotificationStore;
pub use project_repository::ProjectRepository;
pub use task_repository::TaskRepository;
