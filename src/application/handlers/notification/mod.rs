//! Notification handlers - the per-user inbox.

mod inbox;

pub use inbox::{NotificationInboxHandler, INBOX_LIMIT};
