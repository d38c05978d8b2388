//! Invitation domain - token-based pending invites with expiry.

mod aggregate;
mod errors;
mod status;
mod token;

pub use aggregate::{Invitation, EXPIRY_HOURS};
pub use errors::InvitationError;
pub use status::InvitationStatus;
pub use token::{ClaimToken, TOKEN_LENGTH};
