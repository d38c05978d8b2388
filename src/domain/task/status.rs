//! TaskStatus enum and its workflow state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Workflow status of a task.
///
/// The wire form matches the existing clients verbatim:
/// `"Todo"`, `"Inprogress"`, `"Review"`, `"Done"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Todo,
    Inprogress,
    Review,
    Done,
}

impl StateMachine for TaskStatus {
    /// Transition table:
    ///
    /// - Todo -> Inprogress
    /// - Inprogress -> Review
    /// - Review -> Done | Inprogress
    /// - Done -> (terminal)
    fn can_transition_to(&self, target: &Self) -> bool {
        use TaskStatus::*;
        matches!(
            (self, target),
            (Todo, Inprogress) | (Inprogress, Review) | (Review, Done) | (Review, Inprogress)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use TaskStatus::*;
        match self {
            Todo => vec![Inprogress],
            Inprogress => vec![Review],
            Review => vec![Done, Inprogress],
            Done => vec![],
        }
    }
}

impl TaskStatus {
    /// All statuses, for exhaustive iteration in checks and tests.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::Inprogress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::Inprogress => "Inprogress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
        };
        write!(f, "{}", s)
    }
}
