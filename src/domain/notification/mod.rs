//! Notification sink - per-user inbox of system messages.

mod record;

pub use record::{Notification, NotificationType};
