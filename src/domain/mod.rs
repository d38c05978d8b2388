//! Domain layer - aggregates, value objects, and workflow rules.

pub mod activity;
pub mod foundation;
pub mod invitation;
pub mod notification;
pub mod project;
pub mod task;
