//! Mailer port.
//!
//! Email delivery is best-effort: callers log failures and never let them
//! change the outcome of the primary operation.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Outbound email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one HTML email.
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailer_is_object_safe() {
        fn _accepts_dyn(_mailer: &dyn Mailer) {}
    }
}
