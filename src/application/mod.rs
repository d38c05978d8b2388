//! Application layer - command and query handlers.
//!
//! Handlers orchestrate domain aggregates through the ports: load,
//! authorize, mutate, persist, then fan out best-effort side effects.
//! Authorization lives here (and in the aggregates), never in adapters.

pub mod handlers;
pub mod side_effects;

pub use side_effects::SideEffects;
