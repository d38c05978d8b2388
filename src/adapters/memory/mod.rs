//! In-memory adapters.
//!
//! Implement every port over tokio `RwLock`-guarded collections. Used as
//! test doubles and for development bootstrap; production deployments plug
//! a document store behind the same ports.

mod activity;
mod identity;
mod invitation;
mod mailer;
mod notification;
mod project;
mod task;

pub use activity::InMemoryActivityLog;
pub use identity::InMemoryIdentityDirectory;
pub use invitation::InMemoryInvitationRepository;
pub use mailer::{FailingMailer, RecordingMailer, SentEmail};
pub use notification::InMemoryNotificationStore;
pub use project::InMemoryProjectRepository;
pub use task::InMemoryTaskRepository;
