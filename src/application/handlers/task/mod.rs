//! Task handlers - workflow engine, assignment and soft-delete lifecycle.

mod add_comment;
mod assign_task;
mod create_task;
mod delete_task;
mod get_activity;
mod list_tasks;
mod restore_task;
mod transition_status;
mod update_task;

pub use add_comment::{CommentOnTaskCommand, CommentOnTaskHandler};
pub use assign_task::{AssignTaskCommand, AssignTaskHandler};
pub use create_task::{CreateTaskCommand, CreateTaskHandler};
pub use delete_task::{SoftDeleteTaskCommand, SoftDeleteTaskHandler};
pub use get_activity::TaskActivityQueryHandler;
pub use list_tasks::ListTasksQueryHandler;
pub use restore_task::{RestoreTaskCommand, RestoreTaskHandler};
pub use transition_status::{TransitionTaskStatusCommand, TransitionTaskStatusHandler};
pub use update_task::{UpdateTaskCommand, UpdateTaskHandler};
