//! Task domain - CRUD, status state machine, assignment, soft delete.

mod aggregate;
mod errors;
mod filter;
mod priority;
mod status;

pub use aggregate::{Task, TaskPatch};
pub use errors::TaskError;
pub use filter::{SortOrder, TaskFilter, TaskSortField};
pub use priority::TaskPriority;
pub use status::TaskStatus;
