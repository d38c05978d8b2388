//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration for outbound notifications and invite links
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// API key for the email delivery provider
    pub api_key: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Base URL the invitation claim token is appended to
    #[serde(default = "default_invite_base_url")]
    pub invite_base_url: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__API_KEY"));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.invite_base_url.starts_with("http://")
            && !self.invite_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidInviteBaseUrl);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            invite_base_url: default_invite_base_url(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@taskhive.io".to_string()
}

fn default_from_name() -> String {
    "Taskhive".to_string()
}

fn default_invite_base_url() -> String {
    "https://app.taskhive.io/invitations/accept".to_string()
}
