//! InvitationStatus enum and lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an invitation. Wire form is lowercase:
/// `"pending"`, `"accepted"`, `"expired"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Expired,
}

impl StateMachine for InvitationStatus {
    /// Pending -> Accepted | Expired; both outcomes are terminal.
    fn can_transition_to(&self, target: &Self) -> bool {
        use InvitationStatus::*;
        matches!((self, target), (Pending, Accepted) | (Pending, Expired))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InvitationStatus::*;
        match self {
            Pending => vec![Accepted, Expired],
            Accepted | Expired => vec![],
        }
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvitationStatus::Pending => "pending",
            InvitationStatus::Accepted => "accepted",
            InvitationStatus::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_and_expired_are_terminal() {
        assert!(InvitationStatus::Accepted.is_terminal());
        assert!(InvitationStatus::Expired.is_terminal());
        assert!(!InvitationStatus::Pending.is_terminal());
    }

    #[test]
    fn pending_can_reach_both_outcomes() {
        assert!(InvitationStatus::Pending.can_transition_to(&InvitationStatus::Accepted));
        assert!(InvitationStatus::Pending.can_transition_to(&InvitationStatus::Expired));
    }

    #[test]
    fn terminal_states_cannot_reopen() {
        assert!(!InvitationStatus::Expired.can_transition_to(&InvitationStatus::Pending));
        assert!(!InvitationStatus::Accepted.can_transition_to(&InvitationStatus::Expired));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&InvitationStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
