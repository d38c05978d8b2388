//! Project handlers - registry, membership and soft-delete lifecycle.

mod add_comment;
mod add_member;
mod create_project;
mod delete_project;
mod get_activity;
mod list_members;
mod list_projects;
mod remove_member;
mod restore_project;

pub use add_comment::{CommentOnProjectCommand, CommentOnProjectHandler};
pub use add_member::{AddMemberCommand, AddMemberHandler};
pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use delete_project::{SoftDeleteProjectCommand, SoftDeleteProjectHandler};
pub use get_activity::ProjectActivityQueryHandler;
pub use list_members::{ListMembersQueryHandler, ProjectMember};
pub use list_projects::ListProjectsQueryHandler;
pub use remove_member::{RemoveMemberCommand, RemoveMemberHandler};
pub use restore_project::{RestoreProjectCommand, RestoreProjectHandler};
