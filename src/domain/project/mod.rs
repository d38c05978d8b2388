//! Project domain - ownership, membership, soft-delete lifecycle.

mod aggregate;
mod color;
mod errors;

pub use aggregate::Project;
pub use color::ProjectColor;
pub use errors::ProjectError;

use serde::{Deserialize, Serialize};

/// Role of a user within a project, as reported by member listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MemberRole {
    Owner,
    Member,
}
