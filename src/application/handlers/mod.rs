//! Command and query handlers, grouped by aggregate.

pub mod invitation;
pub mod notification;
pub mod project;
pub mod task;

#[cfg(test)]
pub(crate) mod test_support;
