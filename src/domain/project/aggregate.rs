//! Project aggregate entity.
//!
//! Projects own their member list exclusively: membership changes only
//! happen through this aggregate. Tasks reference projects by ID but are
//! managed by the task module.
//!
//! # Invariants
//!
//! - The owner is always a member (except mid soft-delete, where the member
//!   list is untouched anyway)
//! - Only the owner may delete, restore, invite or remove members
//! - The owner can never be removed from the member list

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProjectId, Timestamp, UserId, ValidationError};

use super::ProjectColor;

/// Project aggregate - a shared workspace owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: Option<String>,
    color: ProjectColor,
    owner: UserId,
    members: Vec<UserId>,
    deleted: bool,
    deleted_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Project {
    /// Create a new project with the owner as sole member.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is empty or whitespace
    pub fn new(
        id: ProjectId,
        owner: UserId,
        title: String,
        description: Option<String>,
        color: ProjectColor,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            title: title.trim().to_string(),
            description,
            color,
            owner,
            members: vec![owner],
            deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a project from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProjectId,
        title: String,
        description: Option<String>,
        color: ProjectColor,
        owner: UserId,
        members: Vec<UserId>,
        deleted: bool,
        deleted_at: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            color,
            owner,
            members,
            deleted,
            deleted_at,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn color(&self) -> ProjectColor {
        self.color
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn deleted_at(&self) -> Option<&Timestamp> {
        self.deleted_at.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this project.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }

    /// Checks if the given user is a member of this project.
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.members.contains(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a user to the member list.
    ///
    /// Returns `false` without modifying anything if the user is already a
    /// member; the caller decides whether that is a conflict (direct add)
    /// or a no-op (invitation acceptance).
    pub fn add_member(&mut self, user_id: UserId) -> bool {
        if self.members.contains(&user_id) {
            return false;
        }
        self.members.push(user_id);
        self.updated_at = Timestamp::now();
        true
    }

    /// Remove a user from the member list.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if the target is the owner (the owner can never be
    ///   removed)
    pub fn remove_member(&mut self, user_id: &UserId) -> Result<bool, ValidationError> {
        if self.is_owner(user_id) {
            return Err(ValidationError::invalid_value(
                "member",
                "Project owner cannot be removed from members",
            ));
        }
        let before = self.members.len();
        self.members.retain(|m| m != user_id);
        if self.members.len() == before {
            return Ok(false);
        }
        self.updated_at = Timestamp::now();
        Ok(true)
    }

    /// Mark the project soft-deleted at the given instant.
    pub fn mark_deleted(&mut self, at: Timestamp) {
        self.deleted = true;
        self.deleted_at = Some(at);
        self.updated_at = Timestamp::now();
    }

    /// Clear the soft-delete flags, making the project active again.
    /// Every other field keeps its pre-delete value.
    pub fn restore(&mut self) {
        self.deleted = false;
        self.deleted_at = None;
        self.updated_at = Timestamp::now();
    }
}
