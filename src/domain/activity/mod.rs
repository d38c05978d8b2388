//! Activity ledger - append-only log of domain events and comments.

mod record;

pub use record::{Activity, ActivityAction, ActivityEntity};
