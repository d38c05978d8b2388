//! Invitation handlers - the token-gated membership flow.

mod accept_invitation;
mod invite_member;

pub use accept_invitation::{
    AcceptInvitationCommand, AcceptInvitationHandler, AcceptInvitationOutcome,
};
pub use invite_member::{InviteMemberCommand, InviteMemberHandler, InviteOutcome};
